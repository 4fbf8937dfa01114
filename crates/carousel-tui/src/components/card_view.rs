use crate::theme::*;
use carousel_domain::CardRecord;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Horizontal extent of a card in track columns; `left` may be negative or
/// past the end of the track while the card is scrolled out of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpan {
    pub left: i32,
    pub width: u16,
}

impl CardSpan {
    /// Both edges are rounded independently so neighbouring cards never overlap.
    pub fn from_pixels(offset_px: f32, width_px: f32, cell_width_px: f32) -> Self {
        let left = (offset_px / cell_width_px).round() as i32;
        let right = ((offset_px + width_px) / cell_width_px).round() as i32;
        Self {
            left,
            width: (right - left).max(0) as u16,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    /// Visible columns `[start, end)` within a track `track_width` wide.
    pub fn clip(&self, track_width: u16) -> Option<(u16, u16)> {
        let start = self.left.max(0);
        let end = self.right().min(track_width as i32);
        (end > start).then_some((start as u16, end as u16))
    }
}

pub fn render_card(frame: &mut Frame, track: Rect, span: CardSpan, card: &CardRecord, focused: bool) {
    let Some((start, end)) = span.clip(track.width) else {
        return;
    };
    let area = Rect {
        x: track.x + start,
        y: track.y,
        width: end - start,
        height: track.height,
    };

    let mut borders = Borders::TOP | Borders::BOTTOM;
    if span.left >= 0 {
        borders |= Borders::LEFT;
    }
    if span.right() <= track.width as i32 {
        borders |= Borders::RIGHT;
    }
    let border_style = if focused {
        focused_border()
    } else {
        unfocused_border()
    };

    let inner_width = span.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = wrap_text(&card.title, inner_width)
        .into_iter()
        .map(|line| Line::styled(line, card_title()))
        .collect();
    lines.push(Line::styled(format!("▣ {}", card.image), label_text()));
    lines.push(Line::default());
    lines.extend(
        wrap_text(&card.description, inner_width)
            .into_iter()
            .map(|line| Line::styled(line, normal_text())),
    );

    // Columns of content hidden past the left edge; the left border is one of them.
    let scroll_x = if span.left < 0 {
        (-span.left - 1) as u16
    } else {
        0
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(borders).border_style(border_style))
        .scroll((0, scroll_x));
    frame.render_widget(widget, area);
}

/// Greedy word wrap to `width` characters; words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }
        let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}
