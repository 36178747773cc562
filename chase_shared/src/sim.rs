//! Simulation step.
//!
//! One tick does, in order:
//! 1. steering (yaw) and throttle (velocity z) from the input flags,
//! 2. Euler integration of the player position,
//! 3. friction on velocity z,
//! 4. the chase rule for every follower, against the integrated position.
//!
//! Followers are independent: the player position is read once and each
//! follower only writes its own state, so iteration order never matters.

use tracing::{debug, trace, warn};

use crate::{
    config::SimConfig,
    input::InputState,
    math::Vec3,
    world::{Follower, FollowerState, PlayerState, World},
};

/// What the chase rule did to one follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseOutcome {
    /// At or beyond the threshold; left in place.
    OutOfRange,
    /// Moved toward the player.
    Moved,
    /// Sitting exactly on the player, so there is no direction to move in.
    /// Left in place.
    Degenerate,
}

/// Per-step tally of chase outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub moved: usize,
    pub degenerate: usize,
}

impl StepReport {
    fn record(&mut self, outcome: ChaseOutcome) {
        match outcome {
            ChaseOutcome::Moved => self.moved += 1,
            ChaseOutcome::Degenerate => self.degenerate += 1,
            ChaseOutcome::OutOfRange => {}
        }
    }
}

/// Advances the player and followers by exactly one tick.
pub fn step(
    cfg: &SimConfig,
    input: InputState,
    player: &mut PlayerState,
    followers: &mut [Follower],
) -> StepReport {
    step_scaled(cfg, input, player, followers, 1.0)
}

/// Advances by `ticks` frames' worth of time. Linear terms scale by `ticks`,
/// friction by `friction^ticks`; `ticks == 1.0` is the fixed step.
///
/// A negative or non-finite `ticks` would push followers away and make
/// friction accelerate, so such a step is skipped and nothing moves.
pub fn step_scaled(
    cfg: &SimConfig,
    input: InputState,
    player: &mut PlayerState,
    followers: &mut [Follower],
    ticks: f32,
) -> StepReport {
    if !is_valid_ticks(ticks) {
        warn!(ticks, "Skipping step with invalid elapsed ticks");
        return StepReport::default();
    }
    drive(cfg, input, player, ticks);

    let target = player.position;
    let mut report = StepReport::default();
    for follower in followers.iter_mut() {
        let outcome = chase(cfg, &mut follower.state, target, ticks);
        if outcome == ChaseOutcome::Degenerate {
            debug!(id = ?follower.id, kind = ?follower.kind, "Follower on top of player, not moved");
        }
        report.record(outcome);
    }
    report
}

/// Elapsed time a step can advance by.
pub fn is_valid_ticks(ticks: f32) -> bool {
    ticks.is_finite() && ticks >= 0.0
}

/// Applies steering, throttle, integration and friction to the player.
fn drive(cfg: &SimConfig, input: InputState, player: &mut PlayerState, ticks: f32) {
    if input.left() {
        player.yaw += cfg.turn_rate * ticks;
    }
    if input.right() {
        player.yaw -= cfg.turn_rate * ticks;
    }

    if input.forward() {
        player.velocity.z -= cfg.car_speed * ticks;
    }
    if input.backward() {
        player.velocity.z += cfg.car_speed * ticks;
    }

    player.position += player.velocity * ticks;
    player.velocity.z *= cfg.friction.powf(ticks);
}

/// Moves one follower toward `target` if it is strictly inside the chase
/// threshold.
fn chase(
    cfg: &SimConfig,
    follower: &mut FollowerState,
    target: Vec3,
    ticks: f32,
) -> ChaseOutcome {
    let offset = target - follower.position;
    // Written so that a NaN distance also counts as out of range.
    if !(offset.len() < cfg.chase_threshold) {
        return ChaseOutcome::OutOfRange;
    }
    match offset.try_normalize() {
        Some(direction) => {
            follower.position += direction * (cfg.chase_speed * ticks);
            ChaseOutcome::Moved
        }
        None => ChaseOutcome::Degenerate,
    }
}

/// Simulation stepper trait.
pub trait SimulationBackend: Send + Sync {
    fn step(&mut self, world: &mut World, input: InputState, ticks: f32) -> StepReport;
}

/// The drive-and-chase rules above, bound to a config.
#[derive(Debug, Clone, Default)]
pub struct ChaseSimulation {
    cfg: SimConfig,
}

impl ChaseSimulation {
    pub fn new(cfg: SimConfig) -> Self {
        Self { cfg }
    }
}

impl SimulationBackend for ChaseSimulation {
    fn step(&mut self, world: &mut World, input: InputState, ticks: f32) -> StepReport {
        let report = step_scaled(
            &self.cfg,
            input,
            &mut world.player,
            &mut world.followers,
            ticks,
        );
        trace!(
            ?input,
            position = %world.player.position,
            yaw = world.player.yaw,
            moved = report.moved,
            "Stepped"
        );
        report
    }
}

/// No-op simulation.
#[derive(Default)]
pub struct FrozenSimulation;

impl SimulationBackend for FrozenSimulation {
    fn step(&mut self, _world: &mut World, _input: InputState, _ticks: f32) -> StepReport {
        StepReport::default()
    }
}
