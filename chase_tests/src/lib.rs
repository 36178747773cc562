//! Shared helpers for the chase integration tests.

use chase_shared::{
    math::Vec3,
    world::{FollowerKind, PlayerState, World},
};

/// Absolute tolerance used for float comparisons.
pub const EPS: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

pub fn approx_vec(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

/// A world with the player at `player` and one NPC per entry of `npcs`.
pub fn world_with(player: Vec3, npcs: &[Vec3]) -> World {
    let mut world = World::new(PlayerState::at(player));
    for &p in npcs {
        world.spawn_follower(FollowerKind::Npc, p);
    }
    world
}

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}
