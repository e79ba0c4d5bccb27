//! Pellet Chase entry point
//!
//! Headless native driver: runs one session at a fixed timestep with a
//! simple steering input source, then prints the final frame as JSON.
//!
//! Usage: `pellet-chase [--config PATH] [--seed N] [--max-ticks TICKS]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use glam::Vec2;

use pellet_chase::SimConfig;
use pellet_chase::consts::*;
use pellet_chase::sim::{GameEvent, Session, SessionStatus, TickInput, tick};

/// Simulated frame time of the host loop (slightly slower than the sim rate)
const FRAME_DT: f32 = 1.0 / 50.0;
/// Default cap on simulation ticks (two minutes)
const DEFAULT_MAX_TICKS: u64 = 120 * 60;
/// Ignore axis offsets smaller than this when steering
const STEER_DEADZONE: f32 = 2.0;

/// Headless pellet chase runner
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; defaults are used when omitted
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run seed (wall clock when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many simulation ticks
    #[arg(long, value_name = "TICKS", value_parser = clap::value_parser!(u64).range(1..))]
    max_ticks: Option<u64>,
}

/// Seed from the wall clock when none is given
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Steer toward the nearest pellet, one key per axis
fn steer(session: &Session) -> TickInput {
    let player = session.player.pos;
    let Some(target) = session
        .pellets
        .iter()
        .map(|p| p.pos)
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return TickInput::default();
    };

    let delta: Vec2 = target - player;
    TickInput {
        up: delta.y < -STEER_DEADZONE,
        down: delta.y > STEER_DEADZONE,
        left: delta.x < -STEER_DEADZONE,
        right: delta.x > STEER_DEADZONE,
    }
}

/// Game instance holding all state
struct Game {
    session: Session,
    accumulator: f32,
}

impl Game {
    fn new(session: Session) -> Self {
        Self {
            session,
            accumulator: 0.0,
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = steer(&self.session);
            let outcome = tick(&mut self.session, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            for event in &outcome.events {
                match event {
                    GameEvent::PelletConsumed { id, .. } => {
                        log::info!("Ate pellet {} (score {})", id, self.session.score);
                    }
                    GameEvent::RoamerContact { id, .. } => {
                        log::info!("Caught by roamer {}", id);
                    }
                    GameEvent::SessionWon { .. } | GameEvent::SessionLost { .. } => {}
                }
            }

            if outcome.status != SessionStatus::Active {
                break;
            }
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    let max_ticks = args.max_ticks.unwrap_or(DEFAULT_MAX_TICKS);

    let mut game = Game::new(Session::new(config, seed)?);
    while !game.session.is_over() && game.session.time_ticks < max_ticks {
        game.update(FRAME_DT);
    }

    match game.session.status {
        SessionStatus::Won => println!("You Win! Score: {}", game.session.score),
        SessionStatus::Lost => println!("Game Over! Score: {}", game.session.score),
        SessionStatus::Active => {
            log::warn!("Tick limit {} reached before the session ended", max_ticks);
            println!("Time up. Score: {}", game.session.score);
        }
    }
    println!("{}", serde_json::to_string_pretty(&game.session.view())?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pellet Chase (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_all_flags() {
        let args = Args::try_parse_from([
            "pellet-chase",
            "--config",
            "arena.json",
            "--seed",
            "42",
            "--max-ticks",
            "600",
        ])
        .expect("valid args");
        assert_eq!(args.config, Some(PathBuf::from("arena.json")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.max_ticks, Some(600));
    }

    #[test]
    fn test_flags_are_optional() {
        let args = Args::try_parse_from(["pellet-chase"]).expect("valid args");
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert!(args.max_ticks.is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["pellet-chase", "--seed", "abc"]).is_err());
        assert!(Args::try_parse_from(["pellet-chase", "--max-ticks", "0"]).is_err());
        assert!(Args::try_parse_from(["pellet-chase", "--speed", "3"]).is_err());
    }

    #[test]
    fn test_steer_idles_without_pellets() {
        let config = SimConfig {
            pellet_count: 0,
            ..Default::default()
        };
        let session = Session::new(config, 3).expect("valid config");
        assert_eq!(steer(&session), TickInput::default());
    }
}
