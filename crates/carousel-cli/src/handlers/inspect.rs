use crate::cli::InspectArgs;
use crate::output;
use carousel_core::CarouselConfig;
use carousel_domain::{Breakpoint, CardRecord, Carousel, LayoutGeometry, LayoutManager, NavigationState};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub viewport_width: f32,
    pub container_width: f32,
    pub breakpoint: Breakpoint,
    pub visible_count: usize,
    pub geometry: Option<LayoutGeometry>,
    pub can_navigate: bool,
    pub card_count: usize,
    pub clone_count: usize,
    /// Card ids in display order, clones included.
    pub display: Vec<u64>,
    /// First and last display index holding a real card.
    pub real_range: Option<(usize, usize)>,
    pub initial: NavigationState,
    pub active_dot: usize,
    pub settled_offset_px: f32,
}

pub async fn handle(config: &CarouselConfig, args: InspectArgs) -> anyhow::Result<()> {
    let cards = super::load_cards(&args.file).await?;
    let container_width = args.container_width.unwrap_or(args.viewport_width);
    let report = inspect(config, cards, args.viewport_width, container_width);
    output::output_success(report)
}

pub fn inspect(
    config: &CarouselConfig,
    cards: Vec<CardRecord>,
    viewport_width: f32,
    container_width: f32,
) -> InspectReport {
    let carousel = Carousel::with_cards(config, cards, viewport_width, container_width);
    let buffer = carousel.buffer();
    InspectReport {
        viewport_width,
        container_width,
        breakpoint: LayoutManager::new(config.layout).breakpoint(viewport_width),
        visible_count: carousel.visible_count(),
        geometry: carousel.geometry(),
        can_navigate: carousel.can_navigate(),
        card_count: buffer.real_len(),
        clone_count: buffer.clone_count(),
        display: buffer.display().iter().map(|card| card.id).collect(),
        real_range: buffer.real_range(),
        initial: carousel.state(),
        active_dot: carousel.active_dot(),
        settled_offset_px: carousel.settled_offset(),
    }
}
