use crate::app::{App, LoadState};
use crate::components::{render_card, CardSpan};
use crate::theme::*;
use carousel_domain::RenderModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

pub const HEADING: &str = "Carousel cards title";
const PREV_LABEL: &str = " ◀ ";
const NEXT_LABEL: &str = " ▶ ";
const BANNER_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub track: Rect,
    pub dots: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let track = chunks[1];
    ScreenLayout {
        header: chunks[0],
        track: Rect {
            x: track.x + 1,
            width: track.width.saturating_sub(2),
            ..track
        },
        dots: chunks[2],
        footer: chunks[3],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Prev,
    Next,
    Dot(usize),
    Track,
}

/// Clickable regions from the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<(Rect, usize)>,
    pub track: Option<Rect>,
}

impl HitMap {
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        if self.prev.is_some_and(|r| contains(r, column, row)) {
            return Some(HitTarget::Prev);
        }
        if self.next.is_some_and(|r| contains(r, column, row)) {
            return Some(HitTarget::Next);
        }
        if let Some(&(_, index)) = self.dots.iter().find(|(r, _)| contains(*r, column, row)) {
            return Some(HitTarget::Dot(index));
        }
        if self.track.is_some_and(|r| contains(r, column, row)) {
            return Some(HitTarget::Track);
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = screen_layout(area);
    let model = app.carousel.render_model();
    let mut hit_map = HitMap::default();

    render_header(frame, layout.header, &model, &mut hit_map);

    match &app.load_state {
        LoadState::Loading => render_message(
            frame,
            layout.track,
            vec![Line::styled("Loading cards...", label_text())],
        ),
        LoadState::Failed(error) => render_message(
            frame,
            layout.track,
            vec![
                Line::styled("Failed to load data", bold_error()),
                Line::styled("There was an issue fetching data from the API.", error_text()),
                Line::styled(format!("Error: {}", error), error_text()),
            ],
        ),
        LoadState::Ready if model.card_count == 0 => render_message(
            frame,
            layout.track,
            vec![Line::styled("No cards found.", label_text())],
        ),
        LoadState::Ready => {
            render_track(app, frame, layout.track, &model);
            hit_map.track = Some(layout.track);
            render_dots(frame, layout.dots, &model, &mut hit_map);
        }
    }

    render_footer(app, frame, layout.footer);

    if app.banner.as_ref().is_some_and(|b| b.is_expired(BANNER_TTL)) {
        app.banner = None;
    }
    if let Some(banner) = &app.banner {
        banner.render(frame, area);
    }

    app.hit_map = hit_map;
}

fn render_header(frame: &mut Frame, area: Rect, model: &RenderModel, hit_map: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(
        Paragraph::new(Line::styled(HEADING, card_title())).block(block),
        area,
    );

    if !model.can_navigate || inner.width < 8 {
        return;
    }

    let button_width = PREV_LABEL.chars().count() as u16;
    let next = Rect {
        x: inner.x + inner.width - button_width,
        y: inner.y,
        width: button_width,
        height: 1,
    };
    let prev = Rect {
        x: next.x - button_width - 1,
        ..next
    };
    frame.render_widget(
        Paragraph::new(Span::styled(PREV_LABEL, button(model.prev_enabled))),
        prev,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(NEXT_LABEL, button(model.next_enabled))),
        next,
    );
    hit_map.prev = Some(prev);
    hit_map.next = Some(next);
}

fn render_track(app: &App, frame: &mut Frame, track: Rect, model: &RenderModel) {
    let cell_width_px = app.config.layout.cell_width_px;
    let offset = app.track_offset();
    for placement in app.carousel.placements(offset) {
        let span = CardSpan::from_pixels(placement.offset_px, placement.width_px, cell_width_px);
        let focused = placement.display_index == model.state.display_index;
        render_card(frame, track, span, placement.card, focused);
    }
}

fn render_dots(frame: &mut Frame, area: Rect, model: &RenderModel, hit_map: &mut HitMap) {
    if !model.can_navigate || model.dots.is_empty() {
        return;
    }
    // Each dot takes two columns: the glyph and a space. Rows too narrow for
    // every dot show the leading ones.
    let width = area.width as usize;
    let total = (model.dots.len() * 2).saturating_sub(1).min(width);
    let start = area.x as usize + (width - total) / 2;
    let end = area.x as usize + width;

    let mut spans = Vec::with_capacity(model.dots.len().min(width) * 2);
    for item in &model.dots {
        let x = start + item.index.saturating_mul(2);
        if x >= end {
            break;
        }
        let x = x as u16;
        let glyph = if item.active { "●" } else { "○" };
        spans.push(Span::styled(glyph, dot(item.active)));
        spans.push(Span::raw(" "));
        hit_map.dots.push((
            Rect {
                x,
                y: area.y,
                width: 1,
                height: 1,
            },
            item.index,
        ));
    }

    let row = Rect {
        x: start as u16,
        width: (end - start) as u16,
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let area = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help = "←/h prev  →/l next  1-9 slide  drag to swipe  r reload  q quit";
    let line = Line::from(vec![
        Span::styled(help, label_text()),
        Span::raw("  "),
        Span::styled(app.source_description(), normal_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
