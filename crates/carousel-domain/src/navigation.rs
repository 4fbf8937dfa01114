//! Navigation state machine.
//!
//! The controller owns the display index and a single in-flight move. A
//! command is only accepted while no move is in flight; the index it targets
//! becomes current immediately and the animation catches up. When the
//! completion of that move arrives and the index has stepped onto a clone, the
//! index is moved by `N` to the matching real card and an instant move is
//! requested so the swap is invisible.

use crate::loop_buffer::LoopBuffer;
use carousel_core::SameDotPolicy;
use serde::{Deserialize, Serialize};

/// Identifies one requested move so its completion can be matched.
pub type MoveId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Next,
    Prev,
    /// Go to the card at this logical index.
    DotClick(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Transition,
    Jump,
    /// Not tracked by the controller; its completion is ignored.
    Reposition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub id: MoveId,
    pub target_index: usize,
    pub kind: MoveKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    NavigationDisabled,
    InFlight,
    OutOfRange,
    AlreadyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted(MoveRequest),
    Dropped(DropReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The transition ended on a real card.
    Settled,
    /// The transition ended on a clone; the returned instant move hides the swap.
    Jumped(MoveRequest),
    /// The instant move of a jump was applied.
    JumpCleared,
    /// Not the move the controller was waiting for.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Settled,
    Transitioning(MoveId),
    Jumping(MoveId),
}

/// Snapshot of the controller for rendering and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub display_index: usize,
    pub is_animating: bool,
    pub is_jumping: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    display_index: usize,
    phase: Phase,
    real_len: usize,
    clone_count: usize,
    can_navigate: bool,
    next_move_id: MoveId,
    same_dot_policy: SameDotPolicy,
}

impl NavigationController {
    pub fn new(buffer: &LoopBuffer, same_dot_policy: SameDotPolicy) -> Self {
        Self {
            display_index: buffer.initial_index(),
            phase: Phase::Settled,
            real_len: buffer.real_len(),
            clone_count: buffer.clone_count(),
            can_navigate: buffer.can_navigate(),
            next_move_id: 1,
            same_dot_policy,
        }
    }

    /// Adopts a rebuilt buffer: back to the first real card, nothing in flight.
    /// Completions of moves issued before the reset are ignored afterwards.
    pub fn reset(&mut self, buffer: &LoopBuffer) {
        self.display_index = buffer.initial_index();
        self.phase = Phase::Settled;
        self.real_len = buffer.real_len();
        self.clone_count = buffer.clone_count();
        self.can_navigate = buffer.can_navigate();
        tracing::debug!(
            display_index = self.display_index,
            real_len = self.real_len,
            clone_count = self.clone_count,
            "Navigation reset"
        );
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            display_index: self.display_index,
            is_animating: self.is_animating(),
            is_jumping: self.is_jumping(),
        }
    }

    pub fn display_index(&self) -> usize {
        self.display_index
    }

    pub fn can_navigate(&self) -> bool {
        self.can_navigate
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self.phase, Phase::Jumping(_))
    }

    /// A jump in progress does not block commands: the instant move has already
    /// been applied and only its notification is outstanding.
    pub fn is_settled(&self) -> bool {
        !self.is_animating()
    }

    pub fn accepts_commands(&self) -> bool {
        self.can_navigate && self.is_settled()
    }

    /// Id of the transition or jump the controller is waiting on.
    pub fn in_flight(&self) -> Option<MoveId> {
        match self.phase {
            Phase::Settled => None,
            Phase::Transitioning(id) | Phase::Jumping(id) => Some(id),
        }
    }

    pub fn handle(&mut self, command: Command) -> CommandOutcome {
        if !self.can_navigate {
            return CommandOutcome::Dropped(DropReason::NavigationDisabled);
        }
        match self.phase {
            Phase::Transitioning(_) => {
                tracing::debug!(?command, "Dropped command during transition");
                return CommandOutcome::Dropped(DropReason::InFlight);
            }
            Phase::Jumping(id) => {
                tracing::debug!(move_id = id, "Jump cleared by incoming command");
                self.phase = Phase::Settled;
            }
            Phase::Settled => {}
        }

        let target = match command {
            Command::Next => self.display_index + 1,
            Command::Prev => self.display_index - 1,
            Command::DotClick(dot) => {
                if dot >= self.real_len {
                    return CommandOutcome::Dropped(DropReason::OutOfRange);
                }
                let target = dot + self.clone_count;
                if target == self.display_index && self.same_dot_policy == SameDotPolicy::Ignore {
                    return CommandOutcome::Dropped(DropReason::AlreadyActive);
                }
                target
            }
        };

        let id = self.allocate_id();
        tracing::debug!(
            ?command,
            from = self.display_index,
            to = target,
            move_id = id,
            "Transition started"
        );
        self.display_index = target;
        self.phase = Phase::Transitioning(id);

        CommandOutcome::Accepted(MoveRequest {
            id,
            target_index: target,
            kind: MoveKind::Transition,
        })
    }

    /// Called once for every move the animation layer finishes.
    pub fn complete(&mut self, id: MoveId) -> CompletionOutcome {
        match self.phase {
            Phase::Transitioning(active) if active == id => {
                let high_boundary = self.real_len + self.clone_count;
                let corrected = if self.display_index >= high_boundary {
                    Some(self.display_index - self.real_len)
                } else if self.display_index < self.clone_count {
                    Some(self.display_index + self.real_len)
                } else {
                    None
                };

                match corrected {
                    Some(index) => {
                        let jump_id = self.allocate_id();
                        tracing::debug!(
                            from = self.display_index,
                            to = index,
                            move_id = jump_id,
                            "Jumping across loop seam"
                        );
                        self.display_index = index;
                        self.phase = Phase::Jumping(jump_id);
                        CompletionOutcome::Jumped(MoveRequest {
                            id: jump_id,
                            target_index: index,
                            kind: MoveKind::Jump,
                        })
                    }
                    None => {
                        self.phase = Phase::Settled;
                        CompletionOutcome::Settled
                    }
                }
            }
            Phase::Jumping(active) if active == id => {
                self.phase = Phase::Settled;
                CompletionOutcome::JumpCleared
            }
            _ => {
                tracing::trace!(move_id = id, "Ignored completion");
                CompletionOutcome::Ignored
            }
        }
    }

    /// An untracked move back to the current index, for snap-backs and layout changes.
    pub fn reposition(&mut self) -> MoveRequest {
        MoveRequest {
            id: self.allocate_id(),
            target_index: self.display_index,
            kind: MoveKind::Reposition,
        }
    }

    fn allocate_id(&mut self) -> MoveId {
        let id = self.next_move_id;
        self.next_move_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardRecord;

    fn buffer(n: usize, v: usize) -> LoopBuffer {
        let cards = (0..n as u64)
            .map(|i| CardRecord::new(i, format!("Card {}", i), "", ""))
            .collect();
        LoopBuffer::build(cards, v)
    }

    fn controller(n: usize, v: usize) -> NavigationController {
        NavigationController::new(&buffer(n, v), SameDotPolicy::Animate)
    }

    fn accept(nav: &mut NavigationController, command: Command) -> MoveRequest {
        match nav.handle(command) {
            CommandOutcome::Accepted(request) => request,
            other => panic!("expected {:?} to be accepted, got {:?}", command, other),
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = controller(10, 3);
        assert_eq!(
            nav.state(),
            NavigationState {
                display_index: 3,
                is_animating: false,
                is_jumping: false,
            }
        );
        assert!(nav.accepts_commands());
    }

    #[test]
    fn test_next_updates_index_before_completion() {
        let mut nav = controller(10, 3);
        let request = accept(&mut nav, Command::Next);
        assert_eq!(request.target_index, 4);
        assert_eq!(request.kind, MoveKind::Transition);
        assert_eq!(nav.display_index(), 4);
        assert!(nav.is_animating());
        assert_eq!(nav.complete(request.id), CompletionOutcome::Settled);
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_commands_dropped_while_transitioning() {
        let mut nav = controller(10, 3);
        let request = accept(&mut nav, Command::Next);
        assert_eq!(
            nav.handle(Command::Next),
            CommandOutcome::Dropped(DropReason::InFlight)
        );
        assert_eq!(
            nav.handle(Command::DotClick(7)),
            CommandOutcome::Dropped(DropReason::InFlight)
        );
        assert_eq!(nav.display_index(), request.target_index);
    }

    #[test]
    fn test_commands_dropped_when_navigation_disabled() {
        let mut nav = controller(2, 3);
        assert!(!nav.can_navigate());
        assert_eq!(nav.display_index(), 0);
        assert_eq!(
            nav.handle(Command::Next),
            CommandOutcome::Dropped(DropReason::NavigationDisabled)
        );
        assert_eq!(
            nav.handle(Command::Prev),
            CommandOutcome::Dropped(DropReason::NavigationDisabled)
        );
    }

    #[test]
    fn test_overrun_jumps_back_by_len() {
        let mut nav = controller(10, 3);
        let dot = accept(&mut nav, Command::DotClick(9));
        assert_eq!(nav.complete(dot.id), CompletionOutcome::Settled);
        assert_eq!(nav.display_index(), 12);

        let step = accept(&mut nav, Command::Next);
        assert_eq!(step.target_index, 13);
        let jump = match nav.complete(step.id) {
            CompletionOutcome::Jumped(jump) => jump,
            other => panic!("expected jump, got {:?}", other),
        };
        assert_eq!(jump.target_index, 3);
        assert_eq!(jump.kind, MoveKind::Jump);
        assert_eq!(nav.display_index(), 3);
        assert!(nav.is_jumping());
        assert!(!nav.is_animating());

        assert_eq!(nav.complete(jump.id), CompletionOutcome::JumpCleared);
        assert!(!nav.is_jumping());
    }

    #[test]
    fn test_underrun_jumps_forward_by_len() {
        let mut nav = controller(10, 3);
        let step = accept(&mut nav, Command::Prev);
        assert_eq!(step.target_index, 2);
        match nav.complete(step.id) {
            CompletionOutcome::Jumped(jump) => assert_eq!(jump.target_index, 12),
            other => panic!("expected jump, got {:?}", other),
        }
        assert_eq!(nav.display_index(), 12);
    }

    #[test]
    fn test_command_during_jump_clears_it_first() {
        let mut nav = controller(4, 1);
        let step = accept(&mut nav, Command::Prev);
        let jump = match nav.complete(step.id) {
            CompletionOutcome::Jumped(jump) => jump,
            other => panic!("expected jump, got {:?}", other),
        };
        assert!(nav.is_jumping());

        let next = accept(&mut nav, Command::Prev);
        assert!(!nav.is_jumping());
        assert_eq!(next.target_index, 3);

        // The jump's notification arriving late must not settle the new transition.
        assert_eq!(nav.complete(jump.id), CompletionOutcome::Ignored);
        assert!(nav.is_animating());
        assert_eq!(nav.complete(next.id), CompletionOutcome::Settled);
    }

    #[test]
    fn test_dot_click_targets_real_range() {
        let mut nav = controller(10, 3);
        let request = accept(&mut nav, Command::DotClick(0));
        assert_eq!(request.target_index, 3);
        nav.complete(request.id);

        let request = accept(&mut nav, Command::DotClick(9));
        assert_eq!(request.target_index, 12);
        assert_eq!(nav.complete(request.id), CompletionOutcome::Settled);
    }

    #[test]
    fn test_dot_click_out_of_range_is_dropped() {
        let mut nav = controller(5, 2);
        assert_eq!(
            nav.handle(Command::DotClick(5)),
            CommandOutcome::Dropped(DropReason::OutOfRange)
        );
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_same_dot_animate_policy_locks_until_complete() {
        let mut nav = controller(5, 2);
        let request = accept(&mut nav, Command::DotClick(0));
        assert_eq!(request.target_index, 2);
        assert!(nav.is_animating());
        assert_eq!(nav.complete(request.id), CompletionOutcome::Settled);
    }

    #[test]
    fn test_same_dot_ignore_policy_drops_click() {
        let mut nav = NavigationController::new(&buffer(5, 2), SameDotPolicy::Ignore);
        assert_eq!(
            nav.handle(Command::DotClick(0)),
            CommandOutcome::Dropped(DropReason::AlreadyActive)
        );
        assert!(matches!(
            nav.handle(Command::DotClick(1)),
            CommandOutcome::Accepted(_)
        ));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut nav = controller(6, 2);
        let request = accept(&mut nav, Command::Next);
        assert_eq!(nav.complete(request.id + 100), CompletionOutcome::Ignored);
        assert!(nav.is_animating());
        assert_eq!(nav.complete(request.id), CompletionOutcome::Settled);
        assert_eq!(nav.complete(request.id), CompletionOutcome::Ignored);
    }

    #[test]
    fn test_reset_abandons_in_flight_move() {
        let mut nav = controller(10, 3);
        let request = accept(&mut nav, Command::Next);
        nav.reset(&buffer(10, 1));
        assert_eq!(nav.display_index(), 1);
        assert!(nav.is_settled());
        assert_eq!(nav.complete(request.id), CompletionOutcome::Ignored);
    }

    #[test]
    fn test_reposition_is_untracked() {
        let mut nav = controller(6, 2);
        let request = nav.reposition();
        assert_eq!(request.kind, MoveKind::Reposition);
        assert_eq!(request.target_index, 2);
        assert!(nav.is_settled());
        assert_eq!(nav.complete(request.id), CompletionOutcome::Ignored);
    }

    #[test]
    fn test_move_ids_are_unique() {
        let mut nav = controller(6, 2);
        let first = accept(&mut nav, Command::Next);
        nav.complete(first.id);
        let snap = nav.reposition();
        let second = accept(&mut nav, Command::Next);
        assert!(first.id < snap.id && snap.id < second.id);
    }
}
