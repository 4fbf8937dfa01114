use crate::animation::SpringAnimator;
use crate::components::Banner;
use crate::drag::DragTracker;
use crate::events::{should_quit, Event, EventHandler};
use crate::terminal::TerminalGuard;
use crate::ui::{self, HitMap, HitTarget};
use carousel_core::{CarouselConfig, CarouselResult};
use carousel_domain::{
    AnimationDirective, AnimationDriver, CardRecord, Carousel, CarouselEvent, Command,
};
use carousel_source::{CardSource, FileWatcher};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

pub struct App {
    pub config: CarouselConfig,
    pub carousel: Carousel,
    pub animator: SpringAnimator,
    pub load_state: LoadState,
    pub drag: Option<DragTracker>,
    pub hit_map: HitMap,
    pub banner: Option<Banner>,
    pub should_quit: bool,
    source: Arc<dyn CardSource>,
    watch_path: Option<PathBuf>,
    fetch_in_flight: bool,
    reload_requested: bool,
    last_tick: Instant,
}

impl App {
    pub fn new(config: CarouselConfig, source: Arc<dyn CardSource>, watch_path: Option<PathBuf>) -> Self {
        Self {
            carousel: Carousel::new(&config),
            animator: SpringAnimator::new(config.animation),
            config,
            load_state: LoadState::Loading,
            drag: None,
            hit_map: HitMap::default(),
            banner: None,
            should_quit: false,
            source,
            watch_path,
            fetch_in_flight: false,
            reload_requested: false,
            last_tick: Instant::now(),
        }
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Offset the track is drawn at: under the pointer while dragging,
    /// otherwise wherever the animation has it.
    pub fn track_offset(&self) -> f32 {
        match &self.drag {
            Some(drag) => drag.track_offset_px(),
            None => self.animator.position(),
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    /// Returns and clears a pending reload request from the keyboard or the file watcher.
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
            Event::Resize(cols, rows) => self.resize(cols, rows),
            Event::Tick => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_tick);
                self.last_tick = now;
                self.tick(dt);
            }
            Event::CardsLoaded(result) => self.on_cards_loaded(result),
            Event::SourceChanged => {
                tracing::info!("Card source changed on disk");
                self.reload_requested = true;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(&key) {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.command(Command::Prev),
            KeyCode::Right | KeyCode::Char('l') => self.command(Command::Next),
            KeyCode::Char(c @ '1'..='9') => {
                let dot = c as usize - '1' as usize;
                self.command(Command::DotClick(dot));
            }
            KeyCode::Char('r') => self.reload_requested = true,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_map.hit(mouse.column, mouse.row) {
                    Some(HitTarget::Prev) => self.command(Command::Prev),
                    Some(HitTarget::Next) => self.command(Command::Next),
                    Some(HitTarget::Dot(index)) => self.command(Command::DotClick(index)),
                    Some(HitTarget::Track) => self.begin_drag(mouse.column, now),
                    None => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.update(mouse.column, now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.end_drag(mouse.column, now),
            _ => {}
        }
    }

    fn begin_drag(&mut self, column: u16, now: Instant) {
        if self.load_state != LoadState::Ready || !self.carousel.navigation().accepts_commands() {
            return;
        }
        self.drag = Some(DragTracker::begin(
            column,
            now,
            self.config.layout.cell_width_px,
            self.animator.position(),
        ));
    }

    fn end_drag(&mut self, column: u16, now: Instant) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let anchor = drag.anchor_offset_px();
        let release = drag.release(column, now);
        tracing::debug!(
            offset_x = release.offset_x,
            velocity_x = release.velocity_x,
            "Drag released"
        );
        if let Some(directive) = self.carousel.dispatch(CarouselEvent::DragRelease(release)) {
            // The spring picks up from where the pointer let go.
            self.animator.grab(anchor + release.offset_x);
            self.animator.fling(release.velocity_x);
            self.animator.animate_to(directive);
        }
    }

    fn command(&mut self, command: Command) {
        let directive = self.carousel.dispatch(CarouselEvent::Command(command));
        if directive.is_some() {
            self.drag = None;
        }
        self.apply(directive);
    }

    pub fn apply(&mut self, directive: Option<AnimationDirective>) {
        if let Some(directive) = directive {
            self.animator.animate_to(directive);
        }
    }

    /// Advances the animation and reports every finished move to the carousel.
    pub fn tick(&mut self, dt: Duration) {
        for id in self.animator.tick(dt) {
            let directive = self.carousel.dispatch(CarouselEvent::MoveCompleted(id));
            self.apply(directive);
        }
    }

    /// Converts the terminal size to pixels using the configured cell width.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let layout = ui::screen_layout(Rect::new(0, 0, cols, rows));
        let cell_width_px = self.config.layout.cell_width_px;
        self.drag = None;
        let directive = self.carousel.dispatch(CarouselEvent::Resize {
            viewport_width: cols as f32 * cell_width_px,
            container_width: layout.track.width as f32 * cell_width_px,
        });
        self.apply(directive);
    }

    pub fn on_cards_loaded(&mut self, result: Result<Vec<CardRecord>, String>) {
        self.fetch_in_flight = false;
        match result {
            Ok(cards) => {
                if self.load_state == LoadState::Ready {
                    self.banner = Some(Banner::info(format!("Reloaded {} cards", cards.len())));
                }
                self.load_state = LoadState::Ready;
                self.drag = None;
                let directive = self.carousel.dispatch(CarouselEvent::CardsLoaded(cards));
                self.apply(directive);
            }
            Err(error) => {
                tracing::error!("Failed to load cards: {}", error);
                if self.load_state == LoadState::Ready {
                    self.banner = Some(Banner::error(format!("Reload failed: {}", error)));
                } else {
                    self.load_state = LoadState::Failed(error);
                }
            }
        }
    }

    /// Starts a fetch unless one is already running. A failed screen goes back
    /// to loading; loaded cards stay visible until the new ones arrive.
    pub fn reload(&mut self, tx: mpsc::UnboundedSender<Event>) {
        if self.fetch_in_flight {
            tracing::debug!("Reload skipped, fetch already in flight");
            return;
        }
        if matches!(self.load_state, LoadState::Failed(_)) {
            self.load_state = LoadState::Loading;
        }
        self.fetch_in_flight = true;

        let source = self.source.clone();
        tokio::spawn(async move {
            tracing::info!("Fetching cards from {}", source.describe());
            let result = source.fetch().await.map_err(|e| e.to_string());
            let _ = tx.send(Event::CardsLoaded(result));
        });
    }

    pub async fn run(&mut self) -> CarouselResult<()> {
        let mut guard = TerminalGuard::new()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut events = EventHandler::new();
        let tx = events.sender();

        let size = terminal.size()?;
        self.resize(size.width, size.height);
        self.reload(tx.clone());

        let watcher = FileWatcher::new();
        if let Some(path) = self.watch_path.clone() {
            match watcher.start_watching(path.clone()).await {
                Ok(()) => {
                    let mut changes = watcher.subscribe();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        loop {
                            match changes.recv().await {
                                Ok(change) => {
                                    tracing::debug!("Change detected at {}", change.detected_at);
                                    if tx.send(Event::SourceChanged).is_err() {
                                        break;
                                    }
                                }
                                Err(RecvError::Lagged(_)) => continue,
                                Err(RecvError::Closed) => break,
                            }
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!("Not watching {}: {}", path.display(), e);
                    self.banner = Some(Banner::error(format!("Watch failed: {}", e)));
                }
            }
        }

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            let Some(event) = events.next().await else {
                break;
            };
            self.handle_event(event);

            if self.take_reload_request() {
                self.reload(tx.clone());
            }
        }

        watcher.stop_watching().await?;
        events.stop();
        terminal.show_cursor()?;
        guard.restore()?;
        Ok(())
    }
}
