pub mod animation;
pub mod app;
pub mod components;
pub mod drag;
pub mod events;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use animation::SpringAnimator;
pub use app::{App, LoadState};
pub use drag::DragTracker;
