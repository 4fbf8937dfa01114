use crate::loop_buffer::LoopBuffer;
use serde::Serialize;

/// Logical index of the highlighted dot; `0` when looping is disabled.
pub fn active_dot(
    display_index: usize,
    clone_count: usize,
    real_len: usize,
    can_navigate: bool,
) -> usize {
    if !can_navigate || real_len == 0 {
        return 0;
    }
    (display_index + real_len - clone_count % real_len) % real_len
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// One dot per real card, or none when there is nothing to navigate.
pub fn dots(buffer: &LoopBuffer, display_index: usize) -> Vec<Dot> {
    if !buffer.can_navigate() {
        return Vec::new();
    }
    let active = active_dot(
        display_index,
        buffer.clone_count(),
        buffer.real_len(),
        true,
    );
    (0..buffer.real_len())
        .map(|index| Dot {
            index,
            active: index == active,
            label: format!("Go to slide {}", index + 1),
        })
        .collect()
}
