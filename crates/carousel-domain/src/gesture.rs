use crate::navigation::Command;
use carousel_core::GestureConfig;
use serde::{Deserialize, Serialize};

/// Horizontal displacement and speed of a drag at the moment it is released.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragRelease {
    /// Pixels; negative means the track was pulled to the left.
    pub offset_x: f32,
    /// Pixels per second.
    pub velocity_x: f32,
}

impl DragRelease {
    pub fn new(offset_x: f32, velocity_x: f32) -> Self {
        Self {
            offset_x,
            velocity_x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Navigate(Command),
    /// Too short and too slow: the track springs back to where it was.
    SnapBack,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Pulling left reveals the next card, pulling right the previous one.
    /// Leftward intent is checked first.
    pub fn interpret(&self, release: DragRelease) -> GestureOutcome {
        let buffer = self.config.drag_buffer;
        let threshold = self.config.velocity_threshold;

        if release.offset_x < -buffer || release.velocity_x < -threshold {
            GestureOutcome::Navigate(Command::Next)
        } else if release.offset_x > buffer || release.velocity_x > threshold {
            GestureOutcome::Navigate(Command::Prev)
        } else {
            GestureOutcome::SnapBack
        }
    }
}
