//! Damped-spring animation of the track offset.

use carousel_core::AnimationConfig;
use carousel_domain::{AnimationDirective, AnimationDriver, MoveId, MoveMode};
use std::time::Duration;

/// Integration step; the spring is sub-stepped at this size for stability.
const STEP_SECS: f32 = 0.002;
/// Frames longer than this (e.g. after the process was suspended) are clamped.
const MAX_FRAME_SECS: f32 = 0.1;

/// Drives the track toward its target offset one frame at a time.
///
/// Completions are buffered and handed out by [`SpringAnimator::tick`], so an
/// instant move completes on the frame after it was requested and a move that
/// is replaced completes when its replacement arrives.
#[derive(Debug, Clone)]
pub struct SpringAnimator {
    config: AnimationConfig,
    /// False when the spring parameters could never come to rest.
    settles: bool,
    position: f32,
    velocity: f32,
    target: f32,
    active: Option<MoveId>,
    finished: Vec<MoveId>,
}

impl SpringAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        let settles = match config.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{}; moves will not be animated", e);
                false
            }
        };
        Self {
            config,
            settles,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            active: None,
            finished: Vec::new(),
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn active(&self) -> Option<MoveId> {
        self.active
    }

    /// Nothing moving and no completion waiting to be reported.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.finished.is_empty()
    }

    /// Puts the track under the pointer. Only meaningful while idle.
    pub fn grab(&mut self, position: f32) {
        self.position = position;
        self.velocity = 0.0;
    }

    /// Seeds the spring with the release speed of a drag.
    pub fn fling(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Advances by `dt` and returns every move that finished since the last call.
    pub fn tick(&mut self, dt: Duration) -> Vec<MoveId> {
        if let Some(id) = self.active {
            let mut remaining = dt.as_secs_f32().min(MAX_FRAME_SECS);
            while remaining > 0.0 {
                let h = remaining.min(STEP_SECS);
                self.step(h);
                remaining -= h;
            }

            if self.at_rest() {
                self.position = self.target;
                self.velocity = 0.0;
                self.active = None;
                self.finished.push(id);
            }
        }
        std::mem::take(&mut self.finished)
    }

    fn step(&mut self, h: f32) {
        let spring = -self.config.stiffness * (self.position - self.target);
        let damping = -self.config.damping * self.velocity;
        self.velocity += (spring + damping) * h;
        self.position += self.velocity * h;
    }

    fn at_rest(&self) -> bool {
        (self.position - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }
}

impl AnimationDriver for SpringAnimator {
    fn animate_to(&mut self, directive: AnimationDirective) {
        if let Some(previous) = self.active.take() {
            if previous != directive.id {
                self.finished.push(previous);
            }
        }

        self.target = directive.target_offset_px;
        let mode = if self.settles {
            directive.mode
        } else {
            MoveMode::Instant
        };
        match mode {
            MoveMode::Instant => {
                self.position = directive.target_offset_px;
                self.velocity = 0.0;
                self.finished.push(directive.id);
            }
            MoveMode::Interpolated => {
                self.active = Some(directive.id);
            }
        }
    }

    fn position(&self) -> f32 {
        self.position
    }
}
