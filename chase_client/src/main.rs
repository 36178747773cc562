//! Standalone driving binary.
//!
//! Usage:
//!   cargo run -p chase_client -- [--config sim.json] [--frame-hz 60] [--frames N] [--seed N]
//!
//! Populates the city, then steps the chase simulation once per frame until
//! `quit` or until `--frames` frames have run.
//!
//! Console commands:
//!   down <key>  - Hold a key (w, a, s, d)
//!   up <key>    - Release a key
//!   tap <key>   - Hold a key for one frame
//!   status      - Show player and frame info
//!   quit        - Exit

use std::env;
use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use chase_client::cli::parse_args;
use chase_client::game::{Game, GameState};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args(env::args().skip(1))?;
    let cfg = &args.cfg;
    info!(frame_hz = cfg.frame_hz, seed = cfg.scene.seed, frames = ?args.frames, "Starting");

    let mut game = Game::new(cfg).context("create game")?;

    // Set up console input channel.
    let (console_tx, mut console_rx) = mpsc::channel::<String>(32);

    // Spawn stdin reader thread.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            print!("] ");
            let _ = stdout.flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if !line.is_empty() && console_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    println!("Drive with 'down w' / 'up w' (keys w, a, s, d). 'status' for info, 'quit' to exit.");
    println!();

    let frame_interval = Duration::from_secs_f64(1.0 / f64::from(cfg.frame_hz));
    let mut next_frame = tokio::time::Instant::now();

    loop {
        // Process console commands.
        while let Ok(line) = console_rx.try_recv() {
            match game.exec_console(&line) {
                Ok(output) => {
                    for line in output {
                        println!("{}", line);
                    }
                }
                Err(e) => {
                    println!("Error: {}", e);
                }
            }
        }

        if game.state == GameState::Stopped {
            break;
        }

        if args.frame_limit_reached(game.frame()) {
            info!(frame = game.frame(), "Frame limit reached");
            break;
        }

        let report = game.tick();

        // Log once a second.
        if game.frame() % u64::from(cfg.frame_hz) == 0 {
            let p = &game.world.player;
            info!(
                frame = game.frame(),
                position = %p.position,
                yaw = p.yaw,
                chasing = report.moved,
                "Frame"
            );
        }

        // Wait for next frame.
        next_frame += frame_interval;
        tokio::time::sleep_until(next_frame).await;
    }

    Ok(())
}
