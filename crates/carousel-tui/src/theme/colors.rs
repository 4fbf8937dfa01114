use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;

pub const BUTTON_ENABLED: Color = Color::Blue;
pub const BUTTON_DISABLED: Color = Color::DarkGray;

pub const DOT_ACTIVE: Color = Color::Blue;
pub const DOT_INACTIVE: Color = Color::Gray;

pub const TITLE_TEXT: Color = Color::White;
pub const NORMAL_TEXT: Color = Color::Gray;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const ERROR_COLOR: Color = Color::Red;
