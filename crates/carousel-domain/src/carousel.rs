//! The synchronous dispatcher tying layout, loop buffer, gestures and
//! navigation together.
//!
//! Every input is turned into one [`CarouselEvent`] and fully processed by
//! [`Carousel::dispatch`] before the next is looked at. The answer is at most
//! one [`AnimationDirective`] for the animation primitive, whose completion
//! comes back later as [`CarouselEvent::MoveCompleted`].

use crate::animation::{AnimationDirective, MoveMode};
use crate::card::CardRecord;
use crate::dots::{self, Dot};
use crate::gesture::{DragRelease, GestureInterpreter, GestureOutcome};
use crate::layout::{LayoutGeometry, LayoutManager};
use crate::loop_buffer::LoopBuffer;
use crate::navigation::{
    Command, CommandOutcome, CompletionOutcome, MoveId, MoveRequest, NavigationController,
    NavigationState,
};
use carousel_core::CarouselConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    Resize {
        viewport_width: f32,
        container_width: f32,
    },
    Command(Command),
    DragRelease(DragRelease),
    MoveCompleted(MoveId),
    CardsLoaded(Vec<CardRecord>),
}

/// Everything the rendering surface needs apart from card placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub can_navigate: bool,
    pub active_dot: usize,
    pub dots: Vec<Dot>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub state: NavigationState,
    pub visible_count: usize,
    pub card_count: usize,
    pub geometry: Option<LayoutGeometry>,
}

/// A card of the display sequence at its pixel offset inside the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub display_index: usize,
    pub card: &'a CardRecord,
    pub offset_px: f32,
    pub width_px: f32,
    pub is_clone: bool,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    layout: LayoutManager,
    gestures: GestureInterpreter,
    buffer: LoopBuffer,
    nav: NavigationController,
    viewport_width: f32,
    container_width: f32,
    visible_count: usize,
    geometry: Option<LayoutGeometry>,
}

impl Carousel {
    /// An empty carousel; size and cards arrive as events.
    pub fn new(config: &CarouselConfig) -> Self {
        let layout = LayoutManager::new(config.layout);
        let visible_count = layout.visible_count(0.0);
        let buffer = LoopBuffer::build(Vec::new(), visible_count);
        let nav = NavigationController::new(&buffer, config.navigation.same_dot_policy);
        Self {
            layout,
            gestures: GestureInterpreter::new(config.gesture),
            buffer,
            nav,
            viewport_width: 0.0,
            container_width: 0.0,
            visible_count,
            geometry: None,
        }
    }

    pub fn with_cards(
        config: &CarouselConfig,
        cards: Vec<CardRecord>,
        viewport_width: f32,
        container_width: f32,
    ) -> Self {
        let mut carousel = Self::new(config);
        carousel.resize(viewport_width, container_width);
        carousel.set_cards(cards);
        carousel
    }

    pub fn dispatch(&mut self, event: CarouselEvent) -> Option<AnimationDirective> {
        match event {
            CarouselEvent::Resize {
                viewport_width,
                container_width,
            } => self.resize(viewport_width, container_width),
            CarouselEvent::Command(command) => self.command(command),
            CarouselEvent::DragRelease(release) => self.release_drag(release),
            CarouselEvent::MoveCompleted(id) => self.complete(id),
            CarouselEvent::CardsLoaded(cards) => self.set_cards(cards),
        }
    }

    /// Recomputes the slot geometry. A change in slot count rebuilds the
    /// display sequence and returns to the first card; otherwise the current
    /// move is re-targeted, or the track is snapped to the new settled offset.
    pub fn resize(&mut self, viewport_width: f32, container_width: f32) -> Option<AnimationDirective> {
        self.viewport_width = viewport_width;
        self.container_width = container_width;
        self.geometry = self.layout.geometry(viewport_width, container_width);

        let visible_count = self.layout.visible_count(viewport_width);
        if visible_count != self.visible_count {
            tracing::info!(
                from = self.visible_count,
                to = visible_count,
                "Visible slot count changed"
            );
            self.visible_count = visible_count;
            return Some(self.rebuild(self.buffer.cards().to_vec()));
        }

        match self.nav.in_flight() {
            Some(id) if self.nav.is_animating() => Some(AnimationDirective {
                id,
                target_offset_px: self.settled_offset(),
                mode: MoveMode::Interpolated,
            }),
            _ => {
                let request = self.nav.reposition();
                Some(self.directive(request, MoveMode::Instant))
            }
        }
    }

    pub fn set_cards(&mut self, cards: Vec<CardRecord>) -> Option<AnimationDirective> {
        tracing::info!(count = cards.len(), "Cards loaded");
        Some(self.rebuild(cards))
    }

    pub fn command(&mut self, command: Command) -> Option<AnimationDirective> {
        match self.nav.handle(command) {
            CommandOutcome::Accepted(request) => {
                Some(self.directive(request, MoveMode::Interpolated))
            }
            CommandOutcome::Dropped(reason) => {
                tracing::debug!(?command, ?reason, "Command dropped");
                None
            }
        }
    }

    /// Ignored unless settled with navigation enabled.
    pub fn release_drag(&mut self, release: DragRelease) -> Option<AnimationDirective> {
        if !self.nav.accepts_commands() {
            return None;
        }
        match self.gestures.interpret(release) {
            GestureOutcome::Navigate(command) => self.command(command),
            GestureOutcome::SnapBack => {
                let request = self.nav.reposition();
                Some(self.directive(request, MoveMode::Interpolated))
            }
        }
    }

    pub fn complete(&mut self, id: MoveId) -> Option<AnimationDirective> {
        match self.nav.complete(id) {
            CompletionOutcome::Jumped(request) => Some(self.directive(request, MoveMode::Instant)),
            CompletionOutcome::Settled
            | CompletionOutcome::JumpCleared
            | CompletionOutcome::Ignored => None,
        }
    }

    /// Completes `first` and everything it triggers at once, as an animation
    /// layer with zero-length moves would. Returns the directives in order.
    pub fn drain(&mut self, first: Option<AnimationDirective>) -> Vec<AnimationDirective> {
        let mut applied = Vec::new();
        let mut pending = first;
        while let Some(directive) = pending {
            applied.push(directive);
            pending = self.complete(directive.id);
        }
        applied
    }

    fn rebuild(&mut self, cards: Vec<CardRecord>) -> AnimationDirective {
        self.buffer = LoopBuffer::build(cards, self.visible_count);
        self.nav.reset(&self.buffer);
        tracing::debug!(
            display_len = self.buffer.display_len(),
            can_navigate = self.buffer.can_navigate(),
            "Display sequence rebuilt"
        );
        let request = self.nav.reposition();
        self.directive(request, MoveMode::Instant)
    }

    fn directive(&self, request: MoveRequest, mode: MoveMode) -> AnimationDirective {
        AnimationDirective {
            id: request.id,
            target_offset_px: self.offset_for(request.target_index),
            mode,
        }
    }

    /// Track offset that shows `display_index` first; zero until laid out.
    pub fn offset_for(&self, display_index: usize) -> f32 {
        self.geometry
            .map(|geometry| geometry.track_offset(display_index))
            .unwrap_or(0.0)
    }

    pub fn settled_offset(&self) -> f32 {
        self.offset_for(self.nav.display_index())
    }

    pub fn buffer(&self) -> &LoopBuffer {
        &self.buffer
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn state(&self) -> NavigationState {
        self.nav.state()
    }

    pub fn geometry(&self) -> Option<LayoutGeometry> {
        self.geometry
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn can_navigate(&self) -> bool {
        self.buffer.can_navigate()
    }

    pub fn active_dot(&self) -> usize {
        dots::active_dot(
            self.nav.display_index(),
            self.buffer.clone_count(),
            self.buffer.real_len(),
            self.buffer.can_navigate(),
        )
    }

    pub fn render_model(&self) -> RenderModel {
        let can_navigate = self.can_navigate();
        let state = self.nav.state();
        let enabled = can_navigate && !state.is_animating;
        RenderModel {
            can_navigate,
            active_dot: self.active_dot(),
            dots: dots::dots(&self.buffer, state.display_index),
            prev_enabled: enabled,
            next_enabled: enabled,
            state,
            visible_count: self.visible_count,
            card_count: self.buffer.real_len(),
            geometry: self.geometry,
        }
    }

    /// The display sequence positioned for a track at `track_offset_px`.
    /// Empty until the container has been laid out.
    pub fn placements(&self, track_offset_px: f32) -> Vec<Placement<'_>> {
        let Some(geometry) = self.geometry else {
            return Vec::new();
        };
        self.buffer
            .display()
            .iter()
            .enumerate()
            .map(|(display_index, card)| Placement {
                display_index,
                card,
                offset_px: track_offset_px + geometry.slot_offset(display_index),
                width_px: geometry.slot_width_px,
                is_clone: self.buffer.is_clone(display_index),
            })
            .collect()
    }
}
