//! Game driver.
//!
//! The driver owns:
//! - The world (player, followers, buildings)
//! - The held-key input state, plus one-frame taps
//! - A simulation backend and a render backend
//! - A small command console for driving the scene headless
//!
//! Each `tick` samples input once, steps the simulation once and renders the
//! result, so input handling and stepping never overlap.

use anyhow::{bail, Context};
use chase_shared::{
    config::SimConfig,
    input::InputState,
    render::{render_world, NullRenderer, RenderBackend},
    scene,
    sim::{ChaseSimulation, SimulationBackend, StepReport},
    world::World,
};
use tracing::{debug, info};

use crate::input::{apply, Key, KeyEvent};

/// Driver run state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Stepping once per frame.
    Running,
    /// A `quit` was issued; the frame loop should exit.
    Stopped,
}

/// High-level game driver.
pub struct Game {
    pub world: World,
    pub state: GameState,
    held: InputState,
    /// Keys pressed for the next tick only.
    taps: InputState,
    sim: Box<dyn SimulationBackend>,
    renderer: Box<dyn RenderBackend>,
    frame: u64,
}

impl Game {
    /// Validates the config and builds the default scene, headless.
    pub fn new(cfg: &SimConfig) -> anyhow::Result<Self> {
        cfg.validate().context("invalid simulation config")?;
        let world = scene::populate(&cfg.scene);
        Ok(Self::with_backends(
            world,
            Box::new(ChaseSimulation::new(cfg.clone())),
            Box::new(NullRenderer),
        ))
    }

    pub fn with_backends(
        world: World,
        sim: Box<dyn SimulationBackend>,
        renderer: Box<dyn RenderBackend>,
    ) -> Self {
        Self {
            world,
            state: GameState::Running,
            held: InputState::empty(),
            taps: InputState::empty(),
            sim,
            renderer,
            frame: 0,
        }
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Keys currently held.
    pub fn input(&self) -> InputState {
        self.held
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        debug!(?event, "Key event");
        apply(&mut self.held, event);
    }

    /// Holds `key` for the next tick only.
    pub fn tap(&mut self, key: Key) {
        self.taps.insert(key.flag());
    }

    /// Advances one frame at the fixed tick.
    pub fn tick(&mut self) -> StepReport {
        self.tick_scaled(1.0)
    }

    /// Advances `ticks` frames' worth of time in one step.
    /// A negative or non-finite `ticks` leaves the world as it is, but the
    /// frame is still rendered and counted.
    pub fn tick_scaled(&mut self, ticks: f32) -> StepReport {
        let input = self.held | self.taps;
        self.taps = InputState::empty();

        let report = self.sim.step(&mut self.world, input, ticks);
        render_world(&self.world, self.renderer.as_mut());
        self.frame += 1;
        report
    }

    /// Runs `frames` ticks and sums the reports.
    pub fn run_frames(&mut self, frames: u64) -> StepReport {
        let mut total = StepReport::default();
        for _ in 0..frames {
            let r = self.tick();
            total.moved += r.moved;
            total.degenerate += r.degenerate;
        }
        total
    }

    pub fn status(&self) -> Vec<String> {
        let p = &self.world.player;
        vec![
            format!("State: {:?}", self.state),
            format!("Frame: {}", self.frame),
            format!("Input: {:?}", self.held),
            format!("Player: pos={} yaw={:.3} vel={}", p.position, p.yaw, p.velocity),
            format!(
                "Followers: {} (buildings {})",
                self.world.followers.len(),
                self.world.buildings.len()
            ),
        ]
    }

    /// Executes a console command.
    pub fn exec_console(&mut self, line: &str) -> anyhow::Result<Vec<String>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = tokens.split_first() else {
            return Ok(Vec::new());
        };

        match (cmd, args) {
            ("down" | "up" | "tap", [key]) => {
                let key = Key::parse(key)?;
                match cmd {
                    "down" => self.handle_key(KeyEvent::Down(key)),
                    "up" => self.handle_key(KeyEvent::Up(key)),
                    _ => self.tap(key),
                }
                Ok(Vec::new())
            }
            ("down" | "up" | "tap", _) => Ok(vec![format!("Usage: {cmd} <w|a|s|d>")]),
            ("status", _) => Ok(self.status()),
            ("quit" | "exit", _) => {
                info!(frame = self.frame, "Stopping");
                self.state = GameState::Stopped;
                Ok(vec!["Bye".to_string()])
            }
            _ => bail!("unknown command: {cmd}"),
        }
    }
}
