//! Responsive slot count and slot geometry.

use carousel_core::LayoutConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn visible_count(self) -> usize {
        match self {
            Breakpoint::Mobile => 1,
            Breakpoint::Tablet => 2,
            Breakpoint::Desktop => 3,
        }
    }
}

/// Pixel geometry of the slots for one container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutGeometry {
    pub visible_count: usize,
    pub slot_width_px: f32,
    pub gap_px: f32,
}

impl LayoutGeometry {
    /// Distance between the left edges of two neighbouring slots.
    pub fn stride(&self) -> f32 {
        self.slot_width_px + self.gap_px
    }

    /// Track translation that brings `display_index` to the left edge of the container.
    pub fn track_offset(&self, display_index: usize) -> f32 {
        -(display_index as f32) * self.stride()
    }

    /// Left edge of `display_index` relative to the start of the track.
    pub fn slot_offset(&self, display_index: usize) -> f32 {
        display_index as f32 * self.stride()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutManager {
    config: LayoutConfig,
}

impl LayoutManager {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn breakpoint(&self, viewport_width: f32) -> Breakpoint {
        if viewport_width >= self.config.desktop_min_width {
            Breakpoint::Desktop
        } else if viewport_width >= self.config.tablet_min_width {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    pub fn visible_count(&self, viewport_width: f32) -> usize {
        self.breakpoint(viewport_width).visible_count()
    }

    /// Returns `None` while the container has no usable width yet.
    pub fn geometry(&self, viewport_width: f32, container_width: f32) -> Option<LayoutGeometry> {
        let visible_count = self.visible_count(viewport_width);
        let slot_width_px = slot_width(container_width, self.config.gap_px, visible_count)?;
        Some(LayoutGeometry {
            visible_count,
            slot_width_px,
            gap_px: self.config.gap_px,
        })
    }
}

/// `(W - G·(V-1)) / V`, or `None` when the result would not be a positive width.
pub fn slot_width(container_width: f32, gap_px: f32, visible_count: usize) -> Option<f32> {
    if container_width.is_nan() || container_width <= 0.0 || visible_count == 0 {
        return None;
    }
    let slots = visible_count as f32;
    let width = (container_width - gap_px * (slots - 1.0)) / slots;
    (width > 0.0).then_some(width)
}
