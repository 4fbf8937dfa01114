use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(ratatui::style::Color::White)
            .bg(BUTTON_ENABLED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BUTTON_DISABLED)
    }
}

pub fn dot(active: bool) -> Style {
    if active {
        Style::default().fg(DOT_ACTIVE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DOT_INACTIVE)
    }
}

pub fn card_title() -> Style {
    Style::default()
        .fg(TITLE_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn bold_error() -> Style {
    error_text().add_modifier(Modifier::BOLD)
}
