//! Turns mouse drag events on the track into a [`DragRelease`].

use carousel_domain::DragRelease;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Samples older than this are ignored when estimating release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct DragTracker {
    origin_column: u16,
    cell_width_px: f32,
    /// Where the track was when the drag began.
    anchor_offset_px: f32,
    samples: VecDeque<(Instant, f32)>,
}

impl DragTracker {
    pub fn begin(column: u16, now: Instant, cell_width_px: f32, anchor_offset_px: f32) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back((now, 0.0));
        Self {
            origin_column: column,
            cell_width_px,
            anchor_offset_px,
            samples,
        }
    }

    pub fn anchor_offset_px(&self) -> f32 {
        self.anchor_offset_px
    }

    /// Records the pointer position and returns the displacement so far in pixels.
    pub fn update(&mut self, column: u16, now: Instant) -> f32 {
        let offset = (column as f32 - self.origin_column as f32) * self.cell_width_px;
        self.samples.push_back((now, offset));
        while let Some(&(at, _)) = self.samples.front() {
            if self.samples.len() > 2 && now.duration_since(at) > VELOCITY_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        offset
    }

    pub fn offset_px(&self) -> f32 {
        self.samples.back().map(|&(_, offset)| offset).unwrap_or(0.0)
    }

    /// Track offset to show while the pointer is held.
    pub fn track_offset_px(&self) -> f32 {
        self.anchor_offset_px + self.offset_px()
    }

    /// Pixels per second over the most recent samples.
    pub fn velocity_px(&self) -> f32 {
        let (Some(&(first_at, first)), Some(&(last_at, last))) =
            (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let elapsed = last_at.duration_since(first_at).as_secs_f32();
        if elapsed <= f32::EPSILON {
            return 0.0;
        }
        (last - first) / elapsed
    }

    pub fn release(mut self, column: u16, now: Instant) -> DragRelease {
        let offset_x = self.update(column, now);
        DragRelease::new(offset_x, self.velocity_px())
    }
}
