pub mod animation;
pub mod card;
pub mod carousel;
pub mod dots;
pub mod gesture;
pub mod layout;
pub mod loop_buffer;
pub mod navigation;

pub use animation::{AnimationDirective, AnimationDriver, MoveMode};
pub use card::{CardId, CardRecord, PLACEHOLDER_IMAGE};
pub use carousel::{Carousel, CarouselEvent, Placement, RenderModel};
pub use dots::{active_dot, Dot};
pub use gesture::{DragRelease, GestureInterpreter, GestureOutcome};
pub use layout::{Breakpoint, LayoutGeometry, LayoutManager};
pub use loop_buffer::LoopBuffer;
pub use navigation::{
    Command, CommandOutcome, CompletionOutcome, DropReason, MoveId, MoveKind, MoveRequest,
    NavigationController, NavigationState,
};
