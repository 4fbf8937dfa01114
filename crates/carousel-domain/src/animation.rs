//! Contract between the dispatcher and whatever animates the track.

use crate::navigation::MoveId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveMode {
    Interpolated,
    /// Zero duration: the offset is set directly.
    Instant,
}

/// A request to move the track to `target_offset_px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationDirective {
    pub id: MoveId,
    pub target_offset_px: f32,
    pub mode: MoveMode,
}

/// The animation primitive.
///
/// Implementations must report completion exactly once for every directive
/// they accept, instant ones included. A directive that replaces one still in
/// flight completes the replaced one, unless both carry the same id, in which
/// case the move is only re-targeted.
pub trait AnimationDriver {
    fn animate_to(&mut self, directive: AnimationDirective);

    /// Current visual offset of the track.
    fn position(&self) -> f32;
}
