//! World state.
//!
//! The world keeps one typed collection per role instead of a single list of
//! scene objects: the player, the followers that chase it, and the static
//! buildings. The step only ever touches the first two.

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Opaque entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// The player-controlled car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerState {
    pub position: Vec3,
    /// Rotation around the vertical axis, in radians.
    pub yaw: f32,
    pub velocity: Vec3,
}

impl PlayerState {
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            velocity: Vec3::ZERO,
        }
    }
}

/// Position of anything that chases the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FollowerState {
    pub position: Vec3,
}

/// What a follower looks like. The step treats every kind the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowerKind {
    Cop,
    Npc,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub id: EntityId,
    pub kind: FollowerKind,
    pub state: FollowerState,
}

impl Follower {
    pub fn position(&self) -> Vec3 {
        self.state.position
    }
}

/// Static box placed on the ground. `position` is the box centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: EntityId,
    pub position: Vec3,
    pub height: f32,
}

/// Everything the frame loop simulates and draws.
#[derive(Debug, Clone, Default)]
pub struct World {
    next_id: u64,
    pub player: PlayerState,
    pub followers: Vec<Follower>,
    pub buildings: Vec<Building>,
}

impl World {
    /// Creates an empty world with the player at `player`.
    pub fn new(player: PlayerState) -> Self {
        Self {
            player,
            ..Default::default()
        }
    }

    fn next_entity(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a follower and returns its id.
    pub fn spawn_follower(&mut self, kind: FollowerKind, position: Vec3) -> EntityId {
        let id = self.next_entity();
        self.followers.push(Follower {
            id,
            kind,
            state: FollowerState { position },
        });
        id
    }

    /// Adds a building of the given height standing on the ground at `(x, z)`.
    pub fn spawn_building(&mut self, x: f32, z: f32, height: f32) -> EntityId {
        let id = self.next_entity();
        self.buildings.push(Building {
            id,
            position: Vec3::new(x, height / 2.0, z),
            height,
        });
        id
    }

    pub fn follower(&self, id: EntityId) -> Option<&Follower> {
        self.followers.iter().find(|f| f.id == id)
    }

    /// Iterates followers of one kind.
    pub fn followers_of(&self, kind: FollowerKind) -> impl Iterator<Item = &Follower> {
        self.followers.iter().filter(move |f| f.kind == kind)
    }
}
