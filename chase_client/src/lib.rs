//! `chase_client`
//!
//! Client-side systems:
//! - Keyboard mapping (w/a/s/d to driving controls)
//! - Game driver: one simulation step and one render per frame
//! - Console commands for headless control
//! - Command-line flags for the `chase` binary

pub mod cli;
pub mod game;
pub mod input;

pub use game::Game;
