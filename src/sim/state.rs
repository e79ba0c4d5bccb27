//! Session state and core simulation types
//!
//! Everything needed to resume a run deterministically lives here,
//! including the RNG.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Pellet, Player, Roamer};
use super::rng::RandomSource;
use super::spawn::{spawn_pellets, spawn_player, spawn_roamers};
use super::wander::RerollRange;
use crate::config::{ConfigError, SimConfig};

/// Session status. Won and Lost are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Active,
    /// Every pellet consumed
    Won,
    /// Player touched a roamer
    Lost,
}

/// Discrete events raised during a tick, in the order they happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PelletConsumed { id: u32, pos: Vec2 },
    RoamerContact { id: u32, pos: Vec2 },
    SessionWon { score: u64 },
    SessionLost { score: u64 },
}

/// One play-through, from spawn to Won/Lost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Owns the run seed, see [`Session::seed`]
    pub rng: RandomSource,
    pub config: SimConfig,
    pub score: u64,
    pub status: SessionStatus,
    /// Simulation tick counter (Active ticks only)
    pub time_ticks: u64,
    /// Simulated seconds (Active ticks only)
    pub elapsed: f32,
    pub player: Player,
    /// Sorted by id
    pub roamers: Vec<Roamer>,
    /// Sorted by id
    pub pellets: Vec<Pellet>,
}

impl Session {
    /// Validate `config` and spawn a fresh session from `seed`
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = RandomSource::new(seed);
        let player = spawn_player(&config, &mut rng);

        // Ids: roamers from 1, pellets right after
        let roamers = spawn_roamers(config.roamer_count, 1, &config, &mut rng);
        let first_pellet = 1 + config.roamer_count as u32;
        let pellets = spawn_pellets(config.pellet_count, first_pellet, &config, &mut rng);

        let session = Self {
            rng,
            score: 0,
            status: SessionStatus::Active,
            time_ticks: 0,
            elapsed: 0.0,
            player,
            roamers,
            pellets,
            config,
        };

        log::info!(
            "Session started: seed={}, roamers={}, pellets={}",
            seed,
            session.roamers.len(),
            session.pellets.len()
        );

        Ok(session)
    }

    /// Run seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_over(&self) -> bool {
        self.status != SessionStatus::Active
    }

    /// Wrap bounds shared by every entity
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.config.window_width,
            height: self.config.window_height,
            offset: self.config.boundary_inset,
        }
    }

    pub fn reroll_range(&self) -> RerollRange {
        RerollRange {
            min: self.config.reroll_min,
            max: self.config.reroll_max,
        }
    }
}
