//! `chase_shared`
//!
//! Simulation libraries for the city chase scene.
//!
//! Design goals:
//! - Deterministic stepping: same input and state, same result.
//! - Typed collections for player, followers and buildings.
//! - Rendering behind a trait so the step runs headless.
//! - No `unsafe`.

pub mod config;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;
pub mod sim;
pub mod world;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::input::*;
    pub use crate::math::*;
    pub use crate::sim::*;
    pub use crate::world::*;
}
