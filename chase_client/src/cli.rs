//! Command-line flags for the `chase` binary.

use anyhow::{bail, Context};
use chase_shared::config::SimConfig;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub cfg: SimConfig,
    /// Stop after this many frames; `None` runs until `quit`.
    pub frames: Option<u64>,
}

impl Args {
    /// True once `frame` frames have run and no more should be stepped.
    pub fn frame_limit_reached(&self, frame: u64) -> bool {
        self.frames.is_some_and(|n| frame >= n)
    }
}

/// Parses `--config`, `--frame-hz`, `--frames` and `--seed`. `args` excludes
/// the program name.
pub fn parse_args<I>(args: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    // The config file is read first so flags can override it.
    let mut cfg = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config needs a path")?;
            SimConfig::load(path)?
        }
        None => SimConfig::default(),
    };
    let mut frames = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if !matches!(flag, "--config" | "--frame-hz" | "--frames" | "--seed") {
            bail!("unrecognised argument: {flag}");
        }
        let value = args
            .get(i + 1)
            .with_context(|| format!("{flag} needs a value"))?;
        match flag {
            "--frame-hz" => {
                cfg.frame_hz = value
                    .parse()
                    .with_context(|| format!("parse --frame-hz {value}"))?;
            }
            "--frames" => {
                frames = Some(
                    value
                        .parse()
                        .with_context(|| format!("parse --frames {value}"))?,
                );
            }
            "--seed" => {
                cfg.scene.seed = value
                    .parse()
                    .with_context(|| format!("parse --seed {value}"))?;
            }
            _ => {}
        }
        i += 2;
    }

    cfg.validate()?;
    Ok(Args { cfg, frames })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn temp_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("chase_cli_{}_{name}.json", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn no_flags_uses_defaults() {
        let parsed = parse_args(Vec::new()).unwrap();
        assert_eq!(parsed.cfg, SimConfig::default());
        assert_eq!(parsed.frames, None);
        assert!(!parsed.frame_limit_reached(1_000_000));
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = parse_args(args(&["--frames", "30", "--seed", "9", "--frame-hz", "30"])).unwrap();
        assert_eq!(parsed.frames, Some(30));
        assert_eq!(parsed.cfg.scene.seed, 9);
        assert_eq!(parsed.cfg.frame_hz, 30);
        assert!(!parsed.frame_limit_reached(29));
        assert!(parsed.frame_limit_reached(30));
    }

    #[test]
    fn zero_frames_is_reached_before_any_tick() {
        let parsed = parse_args(args(&["--frames", "0"])).unwrap();
        assert!(parsed.frame_limit_reached(0));
    }

    #[test]
    fn trailing_flag_reports_missing_value() {
        let err = parse_args(args(&["--frames"])).unwrap_err();
        assert!(err.to_string().contains("--frames needs a value"), "{err}");
        let err = parse_args(args(&["--seed", "1", "--config"])).unwrap_err();
        assert!(err.to_string().contains("--config needs"), "{err}");
    }

    #[test]
    fn unknown_and_malformed_flags_fail() {
        let err = parse_args(args(&["--turbo", "1"])).unwrap_err();
        assert!(err.to_string().contains("unrecognised argument: --turbo"));
        assert!(parse_args(args(&["--frames", "lots"])).is_err());
        assert!(parse_args(args(&["--frame-hz", "0"])).is_err());
    }

    #[test]
    fn config_file_is_loaded_then_overridden() {
        let path = temp_config("override", r#"{ "chase_threshold": 30.0, "frame_hz": 20 }"#);
        let path_str = path.to_string_lossy().into_owned();
        let parsed = parse_args(vec![
            "--config".to_string(),
            path_str,
            "--frame-hz".to_string(),
            "50".to_string(),
        ])
        .unwrap();
        assert_eq!(parsed.cfg.chase_threshold, 30.0);
        assert_eq!(parsed.cfg.frame_hz, 50);
        let _ = std::fs::remove_file(path);
    }
}
