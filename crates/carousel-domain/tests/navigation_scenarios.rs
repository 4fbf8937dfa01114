use carousel_core::{CarouselConfig, SameDotPolicy};
use carousel_domain::{
    AnimationDirective, CardRecord, Carousel, CarouselEvent, Command, DragRelease, MoveMode,
};

const DESKTOP: f32 = 1280.0;
const MOBILE: f32 = 600.0;

fn cards(n: usize) -> Vec<CardRecord> {
    (0..n as u64)
        .map(|i| {
            CardRecord::new(
                i + 1,
                format!("Product {}", i + 1),
                format!("Description {}", i + 1),
                format!("https://cdn.example.com/{}.png", i + 1),
            )
        })
        .collect()
}

fn carousel(n: usize, viewport_width: f32) -> Carousel {
    Carousel::with_cards(&CarouselConfig::default(), cards(n), viewport_width, 960.0)
}

/// Issues a command and lets every resulting move finish.
fn step(carousel: &mut Carousel, command: Command) -> Vec<AnimationDirective> {
    let first = carousel.dispatch(CarouselEvent::Command(command));
    carousel.drain(first)
}

fn jumps(directives: &[AnimationDirective]) -> usize {
    directives
        .iter()
        .filter(|d| d.mode == MoveMode::Instant)
        .count()
}

#[test]
fn test_scenario_a_next_without_boundary() {
    let mut carousel = carousel(10, DESKTOP);
    assert_eq!(carousel.state().display_index, 3);

    let directive = carousel
        .dispatch(CarouselEvent::Command(Command::Next))
        .unwrap();
    assert_eq!(carousel.state().display_index, 4);
    assert!(carousel.state().is_animating);

    assert_eq!(
        carousel.dispatch(CarouselEvent::MoveCompleted(directive.id)),
        None
    );
    assert_eq!(carousel.state().display_index, 4);
    assert!(!carousel.state().is_animating);
    assert_eq!(carousel.active_dot(), 1);
}

#[test]
fn test_scenario_b_next_from_last_card_jumps() {
    let mut carousel = carousel(10, DESKTOP);
    step(&mut carousel, Command::DotClick(9));
    assert_eq!(carousel.state().display_index, 12);

    let directive = carousel
        .dispatch(CarouselEvent::Command(Command::Next))
        .unwrap();
    assert_eq!(carousel.state().display_index, 13);

    let jump = carousel
        .dispatch(CarouselEvent::MoveCompleted(directive.id))
        .unwrap();
    assert_eq!(jump.mode, MoveMode::Instant);
    assert_eq!(jump.target_offset_px, carousel.offset_for(3));
    assert_eq!(carousel.state().display_index, 3);
    assert!(carousel.state().is_jumping);
    assert_eq!(carousel.active_dot(), 0);

    carousel.dispatch(CarouselEvent::MoveCompleted(jump.id));
    assert!(!carousel.state().is_jumping);
}

#[test]
fn test_scenario_c_fewer_cards_than_slots() {
    let mut carousel = carousel(2, DESKTOP);
    let model = carousel.render_model();
    assert!(!model.can_navigate);
    assert!(!model.next_enabled);
    assert_eq!(model.active_dot, 0);
    assert_eq!(carousel.buffer().display_len(), 2);
    assert_eq!(carousel.buffer().clone_count(), 0);

    assert_eq!(carousel.dispatch(CarouselEvent::Command(Command::Next)), None);
    assert_eq!(carousel.dispatch(CarouselEvent::Command(Command::Prev)), None);
    assert_eq!(
        carousel.dispatch(CarouselEvent::DragRelease(DragRelease::new(-300.0, -900.0))),
        None
    );
    assert_eq!(carousel.state().display_index, 0);
}

#[test]
fn test_scenario_d_resize_changes_slot_count() {
    let mut carousel = carousel(10, DESKTOP);
    step(&mut carousel, Command::Next);
    step(&mut carousel, Command::Next);
    assert_eq!(carousel.state().display_index, 5);
    let wide_slot = carousel.geometry().unwrap().slot_width_px;

    let directive = carousel
        .dispatch(CarouselEvent::Resize {
            viewport_width: MOBILE,
            container_width: 560.0,
        })
        .unwrap();

    assert_eq!(carousel.visible_count(), 1);
    assert_eq!(carousel.buffer().display_len(), 12);
    assert_eq!(carousel.state().display_index, 1);
    assert_eq!(carousel.active_dot(), 0);

    let geometry = carousel.geometry().unwrap();
    assert_eq!(geometry.visible_count, 1);
    assert_eq!(geometry.slot_width_px, 560.0);
    assert_ne!(geometry.slot_width_px, wide_slot);
    assert_eq!(directive.mode, MoveMode::Instant);
    assert_eq!(directive.target_offset_px, -(560.0 + 16.0));
}

#[test]
fn test_resize_during_transition_discards_stale_completion() {
    let mut carousel = carousel(10, DESKTOP);
    let directive = carousel
        .dispatch(CarouselEvent::Command(Command::Prev))
        .unwrap();
    carousel.dispatch(CarouselEvent::Resize {
        viewport_width: MOBILE,
        container_width: 560.0,
    });
    assert_eq!(carousel.state().display_index, 1);
    assert!(!carousel.state().is_animating);

    // The completion of the abandoned move must neither jump nor settle anything.
    assert_eq!(
        carousel.dispatch(CarouselEvent::MoveCompleted(directive.id)),
        None
    );
    assert_eq!(carousel.state().display_index, 1);
}

#[test]
fn test_round_trip_returns_to_start() {
    for n in 2..=8 {
        for viewport in [MOBILE, 800.0, DESKTOP] {
            let mut carousel = carousel(n, viewport);
            if !carousel.can_navigate() {
                continue;
            }
            let (first, last) = carousel.buffer().real_range().unwrap();
            for start in first..=last {
                step(&mut carousel, Command::DotClick(start - first));
                assert_eq!(carousel.state().display_index, start);
                step(&mut carousel, Command::Next);
                step(&mut carousel, Command::Prev);
                assert_eq!(carousel.state().display_index, start);
                assert!(!carousel.state().is_animating);
            }
        }
    }
}

#[test]
fn test_full_loop_forward_closes_with_one_jump() {
    for n in 2..=10 {
        for viewport in [MOBILE, 800.0, DESKTOP] {
            let mut carousel = carousel(n, viewport);
            if !carousel.can_navigate() {
                continue;
            }
            let start = carousel.state().display_index;
            let mut applied = Vec::new();
            for _ in 0..n {
                applied.extend(step(&mut carousel, Command::Next));
            }
            assert_eq!(carousel.state().display_index, start);
            assert_eq!(jumps(&applied), 1, "n={} viewport={}", n, viewport);
        }
    }
}

#[test]
fn test_full_loop_backward_closes_with_one_jump() {
    let mut carousel = carousel(6, 800.0);
    let mut applied = Vec::new();
    for _ in 0..6 {
        applied.extend(step(&mut carousel, Command::Prev));
    }
    assert_eq!(carousel.state().display_index, 2);
    assert_eq!(jumps(&applied), 1);
}

#[test]
fn test_settled_index_stays_on_real_cards() {
    let mut carousel = carousel(5, DESKTOP);
    let (first, last) = carousel.buffer().real_range().unwrap();
    let script = [
        Command::Prev,
        Command::Prev,
        Command::Next,
        Command::DotClick(4),
        Command::Next,
        Command::Next,
        Command::Prev,
        Command::DotClick(0),
        Command::Prev,
    ];
    for command in script {
        step(&mut carousel, command);
        let index = carousel.state().display_index;
        assert!(index >= first && index <= last, "{} out of range", index);
        assert!(carousel.active_dot() < 5);
    }
}

#[test]
fn test_second_command_while_transitioning_has_no_effect() {
    let mut carousel = carousel(10, DESKTOP);
    let first = carousel
        .dispatch(CarouselEvent::Command(Command::Next))
        .unwrap();
    assert_eq!(carousel.dispatch(CarouselEvent::Command(Command::Next)), None);
    assert_eq!(
        carousel.dispatch(CarouselEvent::Command(Command::DotClick(8))),
        None
    );
    assert_eq!(carousel.state().display_index, 4);
    carousel.dispatch(CarouselEvent::MoveCompleted(first.id));
    assert_eq!(carousel.state().display_index, 4);
}

#[test]
fn test_drag_gestures_navigate() {
    let mut carousel = carousel(10, DESKTOP);
    let next = carousel
        .dispatch(CarouselEvent::DragRelease(DragRelease::new(-120.0, 0.0)))
        .unwrap();
    carousel.drain(Some(next));
    assert_eq!(carousel.state().display_index, 4);

    let prev = carousel
        .dispatch(CarouselEvent::DragRelease(DragRelease::new(10.0, 800.0)))
        .unwrap();
    carousel.drain(Some(prev));
    assert_eq!(carousel.state().display_index, 3);
}

#[test]
fn test_same_dot_policy() {
    let mut animate = carousel(5, DESKTOP);
    assert!(animate
        .dispatch(CarouselEvent::Command(Command::DotClick(0)))
        .is_some());
    assert!(animate.state().is_animating);

    let mut config = CarouselConfig::default();
    config.navigation.same_dot_policy = SameDotPolicy::Ignore;
    let mut ignore = Carousel::with_cards(&config, cards(5), DESKTOP, 960.0);
    assert_eq!(
        ignore.dispatch(CarouselEvent::Command(Command::DotClick(0))),
        None
    );
    assert!(!ignore.state().is_animating);
}

#[test]
fn test_empty_card_list() {
    let mut carousel = carousel(0, DESKTOP);
    let model = carousel.render_model();
    assert!(!model.can_navigate);
    assert_eq!(model.card_count, 0);
    assert!(carousel.placements(0.0).is_empty());
    assert_eq!(carousel.dispatch(CarouselEvent::Command(Command::Next)), None);
}

#[test]
fn test_reloading_cards_resets_position() {
    let mut carousel = carousel(10, DESKTOP);
    step(&mut carousel, Command::DotClick(6));
    carousel.dispatch(CarouselEvent::CardsLoaded(cards(4)));
    assert_eq!(carousel.state().display_index, 3);
    assert_eq!(carousel.buffer().display_len(), 10);
}

#[test]
fn test_render_model_serializes() {
    let carousel = carousel(4, DESKTOP);
    let json = serde_json::to_value(carousel.render_model()).unwrap();
    assert_eq!(json["can_navigate"], true);
    assert_eq!(json["active_dot"], 0);
    assert_eq!(json["state"]["display_index"], 3);
    assert_eq!(json["dots"].as_array().unwrap().len(), 4);
}
