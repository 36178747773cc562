//! Scene population.
//!
//! Lays out the city on two square grids: buildings every
//! `building_spacing` units and NPC markers every `npc_spacing` units over
//! `[grid_min, grid_max)` on both ground axes. One cop car and the player car
//! sit at fixed spots.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::{
    config::SceneConfig,
    math::Vec3,
    world::{FollowerKind, PlayerState, World},
};

/// Height of the vehicles' centres above the ground.
pub const VEHICLE_Y: f32 = 1.0;
pub const PLAYER_START: Vec3 = Vec3::new(0.0, VEHICLE_Y, 0.0);
pub const COP_START: Vec3 = Vec3::new(50.0, VEHICLE_Y, 50.0);
pub const NPC_Y: f32 = 1.0;

/// Building heights are drawn from `[MIN_BUILDING_HEIGHT, MAX_BUILDING_HEIGHT)`.
pub const MIN_BUILDING_HEIGHT: f32 = 10.0;
pub const MAX_BUILDING_HEIGHT: f32 = 60.0;

/// Grid coordinates `min, min + spacing, ...` strictly below `max`.
pub fn grid_axis(min: i32, max: i32, spacing: i32) -> impl Iterator<Item = f32> + Clone {
    let spacing = spacing.max(1) as usize;
    (min..max).step_by(spacing).map(|v| v as f32)
}

fn grid(min: i32, max: i32, spacing: i32) -> impl Iterator<Item = (f32, f32)> {
    let zs = grid_axis(min, max, spacing);
    grid_axis(min, max, spacing).flat_map(move |x| zs.clone().map(move |z| (x, z)))
}

/// Builds the starting world: player, buildings, the cop and the NPC grid.
pub fn populate(cfg: &SceneConfig) -> World {
    let mut world = World::new(PlayerState::at(PLAYER_START));
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    for (x, z) in grid(cfg.grid_min, cfg.grid_max, cfg.building_spacing) {
        let height = rng.gen_range(MIN_BUILDING_HEIGHT..MAX_BUILDING_HEIGHT);
        world.spawn_building(x, z, height);
    }

    world.spawn_follower(FollowerKind::Cop, COP_START);

    for (x, z) in grid(cfg.grid_min, cfg.grid_max, cfg.npc_spacing) {
        world.spawn_follower(FollowerKind::Npc, Vec3::new(x, NPC_Y, z));
    }

    info!(
        buildings = world.buildings.len(),
        followers = world.followers.len(),
        seed = cfg.seed,
        "Scene populated"
    );
    world
}
