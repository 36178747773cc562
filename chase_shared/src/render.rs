//! Rendering abstraction.
//!
//! This crate intentionally does not depend on a graphics backend.
//! Define traits that a renderer implementation would satisfy, and walk the
//! world in a stable draw order.

use crate::{
    math::Vec3,
    world::{FollowerKind, World},
};

/// 0xRRGGBB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const GROUND: Self = Self(0xAAAAAA);
    pub const BUILDING: Self = Self(0x00FF00);
    pub const PLAYER: Self = Self(0x0000FF);
    pub const COP: Self = Self(0xFF0000);
    pub const NPC: Self = Self(0x00FFFF);
}

pub const GROUND_SIZE: f32 = 500.0;
pub const CAR_SIZE: Vec3 = Vec3::new(4.0, 2.0, 8.0);
pub const BUILDING_FOOTPRINT: f32 = 10.0;
pub const NPC_RADIUS: f32 = 1.0;

pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 10.0, 50.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 10.0, 0.0);

/// A minimal rendering API.
pub trait RenderBackend: Send + Sync {
    fn begin_frame(&mut self);
    fn set_camera(&mut self, eye: Vec3, target: Vec3);
    fn draw_ground(&mut self, size: f32, color: Color);
    fn draw_box(&mut self, center: Vec3, size: Vec3, yaw: f32, color: Color);
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color);
    fn end_frame(&mut self);
}

/// A no-op renderer useful for headless runs.
#[derive(Default)]
pub struct NullRenderer;

impl RenderBackend for NullRenderer {
    fn begin_frame(&mut self) {}
    fn set_camera(&mut self, _eye: Vec3, _target: Vec3) {}
    fn draw_ground(&mut self, _size: f32, _color: Color) {}
    fn draw_box(&mut self, _center: Vec3, _size: Vec3, _yaw: f32, _color: Color) {}
    fn draw_sphere(&mut self, _center: Vec3, _radius: f32, _color: Color) {}
    fn end_frame(&mut self) {}
}

/// Draws one frame: ground, buildings, the player, then followers.
pub fn render_world(world: &World, renderer: &mut dyn RenderBackend) {
    renderer.begin_frame();
    renderer.set_camera(CAMERA_EYE, CAMERA_TARGET);
    renderer.draw_ground(GROUND_SIZE, Color::GROUND);

    for b in &world.buildings {
        renderer.draw_box(
            b.position,
            Vec3::new(BUILDING_FOOTPRINT, b.height, BUILDING_FOOTPRINT),
            0.0,
            Color::BUILDING,
        );
    }

    let player = &world.player;
    renderer.draw_box(player.position, CAR_SIZE, player.yaw, Color::PLAYER);

    for f in &world.followers {
        match f.kind {
            FollowerKind::Cop => renderer.draw_box(f.position(), CAR_SIZE, 0.0, Color::COP),
            FollowerKind::Npc => renderer.draw_sphere(f.position(), NPC_RADIUS, Color::NPC),
        }
    }

    renderer.end_frame();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::PlayerState;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        colors: Vec<Color>,
    }

    impl RenderBackend for Recorder {
        fn begin_frame(&mut self) {
            self.calls.push("begin");
        }
        fn set_camera(&mut self, _eye: Vec3, _target: Vec3) {
            self.calls.push("camera");
        }
        fn draw_ground(&mut self, _size: f32, color: Color) {
            self.calls.push("ground");
            self.colors.push(color);
        }
        fn draw_box(&mut self, _center: Vec3, _size: Vec3, _yaw: f32, color: Color) {
            self.calls.push("box");
            self.colors.push(color);
        }
        fn draw_sphere(&mut self, _center: Vec3, _radius: f32, color: Color) {
            self.calls.push("sphere");
            self.colors.push(color);
        }
        fn end_frame(&mut self) {
            self.calls.push("end");
        }
    }

    #[test]
    fn draws_in_stable_order() {
        let mut world = World::new(PlayerState::default());
        world.spawn_building(0.0, 0.0, 20.0);
        world.spawn_follower(FollowerKind::Cop, Vec3::ZERO);
        world.spawn_follower(FollowerKind::Npc, Vec3::ZERO);

        let mut rec = Recorder::default();
        render_world(&world, &mut rec);
        assert_eq!(
            rec.calls,
            ["begin", "camera", "ground", "box", "box", "box", "sphere", "end"]
        );
        assert_eq!(
            rec.colors,
            [
                Color::GROUND,
                Color::BUILDING,
                Color::PLAYER,
                Color::COP,
                Color::NPC
            ]
        );
    }
}
