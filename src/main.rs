//! Paddle Rally headless entry point
//!
//! Plays an autopiloted player against the AI at a fixed 60 Hz frame delta,
//! logs every point and prints the final world snapshot as JSON. Rendering
//! and real keyboard input belong to a front end; this binary stands in for
//! both.

use std::path::PathBuf;
use std::process;

use paddle_rally::sim::{MatchPhase, Simulation, WorldSnapshot};
use paddle_rally::{ActionLatch, InputSnapshot, SimConfig};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;
/// Autopilot ignores misalignment smaller than this (px)
const AUTOPILOT_DEADZONE: f32 = 12.0;

struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    print_config: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config: None,
        seed: None,
        print_config: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid seed {value:?}: {e}"))?;
                args.seed = Some(seed);
            }
            "--print-config" => args.print_config = true,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> SimConfig {
    match path {
        Some(path) => SimConfig::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default config");
            SimConfig::default()
        }),
        None => {
            log::info!("Using default config");
            SimConfig::default()
        }
    }
}

/// Held keys for a player that chases the ball while it approaches
fn autopilot(world: &WorldSnapshot, field_center_y: f32) -> InputSnapshot {
    let target = if world.ball_velocity.x < 0.0 {
        world.ball.center_y()
    } else {
        field_center_y
    };
    let diff = target - world.player.center_y();

    InputSnapshot {
        up: diff < -AUTOPILOT_DEADZONE,
        down: diff > AUTOPILOT_DEADZONE,
        quit: world.finished,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();
    log::info!("Paddle Rally (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: paddle-rally [--config PATH] [--seed N] [--print-config]");
            process::exit(2);
        }
    };

    let config = load_config(args.config.as_ref());

    if args.print_config {
        match config.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    let field_center_y = config.playfield_height / 2.0;
    let mut sim = match args.seed {
        Some(seed) => Simulation::new(config, seed),
        None => Simulation::from_entropy(config),
    };

    let mut latch = ActionLatch::new();
    let mut world = sim.snapshot();
    let mut frames = 0;
    let mut rally_best: u32 = 0;

    while frames < MAX_FRAMES {
        let keys = autopilot(&world, field_center_y);
        if keys.quit {
            break;
        }

        let outcome = sim.step(&latch.latch(&keys), FRAME_DT);
        world = outcome.world;
        rally_best = rally_best.max(sim.state().rally_hits);
        frames += 1;
    }

    if sim.phase() != MatchPhase::Finished {
        log::warn!("Stopped after {} frames without a winner", frames);
    }
    log::info!(
        "Final score {} - {} after {:.1}s, longest rally {} hits",
        world.player_score,
        world.opponent_score,
        frames as f32 * FRAME_DT,
        rally_best
    );

    match serde_json::to_string_pretty(&world) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {e}");
            process::exit(1);
        }
    }
}
