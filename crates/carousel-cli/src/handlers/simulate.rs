use crate::cli::{SimulateArgs, Step};
use crate::output;
use carousel_core::CarouselConfig;
use carousel_domain::{
    AnimationDirective, CardRecord, Carousel, CarouselEvent, Command, DragRelease, NavigationState,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: String,
    /// False when the input was dropped without moving the track.
    pub accepted: bool,
    /// Every move the step caused, in the order they were applied.
    pub moves: Vec<AnimationDirective>,
    pub state: NavigationState,
    pub active_dot: usize,
    pub offset_px: f32,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub initial: StepReport,
    pub steps: Vec<StepReport>,
}

pub async fn handle(config: &CarouselConfig, args: SimulateArgs) -> anyhow::Result<()> {
    let cards = super::load_cards(&args.file).await?;
    let mut config = config.clone();
    if let Some(policy) = args.same_dot {
        config.navigation.same_dot_policy = policy;
    }
    let container_width = args.container_width.unwrap_or(args.viewport_width);
    let report = simulate(&config, cards, args.viewport_width, container_width, &args.steps);
    output::output_success(report)
}

/// Feeds each step to a fresh carousel, letting every move finish before the next step.
pub fn simulate(
    config: &CarouselConfig,
    cards: Vec<CardRecord>,
    viewport_width: f32,
    container_width: f32,
    steps: &[Step],
) -> SimulationReport {
    let mut carousel = Carousel::new(config);
    let mut moves = Vec::new();
    let first = carousel.resize(viewport_width, container_width);
    moves.extend(carousel.drain(first));
    let first = carousel.set_cards(cards);
    moves.extend(carousel.drain(first));
    let initial = report(&carousel, "start".to_string(), true, moves);

    let steps = steps
        .iter()
        .map(|step| {
            let first = carousel.dispatch(event_for(*step));
            let accepted = first.is_some();
            let moves = carousel.drain(first);
            tracing::debug!(%step, accepted, moves = moves.len(), "Simulated step");
            report(&carousel, step.to_string(), accepted, moves)
        })
        .collect();

    SimulationReport { initial, steps }
}

fn event_for(step: Step) -> CarouselEvent {
    match step {
        Step::Next => CarouselEvent::Command(Command::Next),
        Step::Prev => CarouselEvent::Command(Command::Prev),
        Step::Dot(index) => CarouselEvent::Command(Command::DotClick(index)),
        Step::Drag { offset, velocity } => {
            CarouselEvent::DragRelease(DragRelease::new(offset, velocity))
        }
        Step::Resize {
            viewport,
            container,
        } => CarouselEvent::Resize {
            viewport_width: viewport,
            container_width: container,
        },
    }
}

fn report(
    carousel: &Carousel,
    step: String,
    accepted: bool,
    moves: Vec<AnimationDirective>,
) -> StepReport {
    StepReport {
        step,
        accepted,
        moves,
        state: carousel.state(),
        active_dot: carousel.active_dot(),
        offset_px: carousel.settled_offset(),
    }
}
