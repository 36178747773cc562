//! Configuration system.
//!
//! Loads simulation tunables and scene layout from JSON strings/files.
//! Every field has a default, so partial documents are accepted.

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Root configuration for the simulation and scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Frames per second of the driving loop. One frame is one tick.
    pub frame_hz: u32,
    /// Velocity added along z per tick while accelerating.
    pub car_speed: f32,
    /// Yaw change in radians per tick while steering.
    pub turn_rate: f32,
    /// Multiplicative decay of forward velocity per tick.
    pub friction: f32,
    /// Followers closer than this start chasing.
    pub chase_threshold: f32,
    /// Distance a chasing follower covers per tick.
    pub chase_speed: f32,
    pub scene: SceneConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_hz: 60,
            car_speed: 0.1,
            turn_rate: 0.05,
            friction: 0.95,
            chase_threshold: 20.0,
            chase_speed: 0.05,
            scene: SceneConfig::default(),
        }
    }
}

/// Grid layout for the procedurally placed scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Lower bound (inclusive) of both grid axes.
    pub grid_min: i32,
    /// Upper bound (exclusive) of both grid axes.
    pub grid_max: i32,
    pub building_spacing: i32,
    pub npc_spacing: i32,
    /// Seed for building heights.
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_min: -200,
            grid_max: 200,
            building_spacing: 50,
            npc_spacing: 40,
            seed: 0x00C0_FFEE,
        }
    }
}

impl SimConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg = Self::from_json_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects tunables the step cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.frame_hz == 0 {
            bail!("frame_hz must be positive");
        }
        for (name, value) in [
            ("car_speed", self.car_speed),
            ("turn_rate", self.turn_rate),
            ("chase_threshold", self.chase_threshold),
            ("chase_speed", self.chase_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be finite and non-negative, got {value}");
            }
        }
        if !(0.0..=1.0).contains(&self.friction) {
            bail!("friction must lie in [0, 1], got {}", self.friction);
        }
        self.scene.validate()
    }
}

impl SceneConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.building_spacing <= 0 || self.npc_spacing <= 0 {
            bail!(
                "grid spacing must be positive (buildings {}, npcs {})",
                self.building_spacing,
                self.npc_spacing
            );
        }
        if self.grid_min > self.grid_max {
            bail!(
                "grid_min {} exceeds grid_max {}",
                self.grid_min,
                self.grid_max
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SimConfig::from_json_str(r#"{ "chase_threshold": 35.0, "scene": { "seed": 7 } }"#)
            .unwrap();
        assert_eq!(cfg.chase_threshold, 35.0);
        assert_eq!(cfg.friction, 0.95);
        assert_eq!(cfg.scene.seed, 7);
        assert_eq!(cfg.scene.npc_spacing, 40);
    }

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_friction() {
        let cfg = SimConfig {
            friction: 1.5,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("friction"));
    }

    #[test]
    fn rejects_zero_spacing() {
        let mut cfg = SimConfig::default();
        cfg.scene.npc_spacing = 0;
        assert!(cfg.validate().is_err());
    }

    fn write_temp(name: &str, body: &str) -> std::path::PathBuf {
        let path =
            std::env::temp_dir().join(format!("chase_config_{}_{name}.json", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn load_reads_valid_file() {
        let path = write_temp("valid", r#"{ "friction": 0.9, "scene": { "npc_spacing": 80 } }"#);
        let cfg = SimConfig::load(&path).unwrap();
        assert_eq!(cfg.friction, 0.9);
        assert_eq!(cfg.scene.npc_spacing, 80);
        assert_eq!(cfg.chase_speed, 0.05);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn load_validates_parsed_file() {
        let path = write_temp("invalid", r#"{ "chase_speed": -1.0 }"#);
        let err = SimConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("chase_speed"), "{err:#}");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn load_reports_malformed_json() {
        let path = write_temp("malformed", "{ not json");
        let err = SimConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = SimConfig::load("does/not/exist.json").unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }
}
