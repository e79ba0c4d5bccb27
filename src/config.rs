//! Simulation tunables
//!
//! Every knob the session reads lives here. Loaded from JSON on native,
//! missing fields fall back to the defaults in `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Game tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    /// Window width in world units
    pub window_width: f32,
    /// Window height in world units
    pub window_height: f32,
    /// Inset margin for spawning and wrap-around
    pub boundary_inset: f32,

    // === Population ===
    pub roamer_count: usize,
    pub pellet_count: usize,

    // === Movement ===
    /// Roamer speed (units/sec)
    pub base_speed: f32,
    /// Pellet speed as a fraction of `base_speed`
    pub pellet_speed_fraction: f32,
    /// Player speed as a multiple of `base_speed`
    pub player_speed_multiplier: f32,
    /// Lower bound of the wander re-roll duration (seconds)
    pub reroll_min: f32,
    /// Upper bound of the wander re-roll duration (seconds, exclusive)
    pub reroll_max: f32,

    // === Sizes ===
    pub player_radius: f32,
    /// Visual roamer radius (rendering only)
    pub roamer_radius: f32,
    /// Radius used for player/roamer contact
    pub roamer_collision_radius: f32,
    pub pellet_radius: f32,

    // === Rules ===
    pub score_per_pellet: u64,
    /// Stop updating roamers as soon as one touches the player
    pub strict_immediate_stop: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            boundary_inset: BOUNDARY_INSET,

            roamer_count: ROAMER_COUNT,
            pellet_count: PELLET_COUNT,

            base_speed: BASE_SPEED,
            pellet_speed_fraction: PELLET_SPEED_FRACTION,
            player_speed_multiplier: PLAYER_SPEED_MULTIPLIER,
            reroll_min: REROLL_MIN,
            reroll_max: REROLL_MAX,

            player_radius: PLAYER_RADIUS,
            roamer_radius: ROAMER_RADIUS,
            roamer_collision_radius: ROAMER_COLLISION_RADIUS,
            pellet_radius: PELLET_RADIUS,

            score_per_pellet: SCORE_PER_PELLET,
            strict_immediate_stop: false,
        }
    }
}

impl SimConfig {
    /// Roamer speed (units/sec)
    pub fn roamer_speed(&self) -> f32 {
        self.base_speed
    }

    /// Pellet speed (units/sec)
    pub fn pellet_speed(&self) -> f32 {
        self.base_speed * self.pellet_speed_fraction
    }

    /// Player speed (units/sec)
    pub fn player_speed(&self) -> f32 {
        self.base_speed * self.player_speed_multiplier
    }

    /// Check that the values describe a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.window_width,
            self.window_height,
            self.boundary_inset,
            self.base_speed,
            self.pellet_speed_fraction,
            self.player_speed_multiplier,
            self.reroll_min,
            self.reroll_max,
            self.player_radius,
            self.roamer_radius,
            self.roamer_collision_radius,
            self.pellet_radius,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("values must be finite"));
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(ConfigError::Invalid("window dimensions must be positive"));
        }
        if self.boundary_inset < 0.0 {
            return Err(ConfigError::Invalid("boundary_inset must not be negative"));
        }
        if 2.0 * self.boundary_inset > self.window_width.min(self.window_height) {
            return Err(ConfigError::Invalid("boundary_inset too large for window"));
        }
        if self.base_speed < 0.0
            || self.pellet_speed_fraction < 0.0
            || self.player_speed_multiplier < 0.0
        {
            return Err(ConfigError::Invalid("speeds must not be negative"));
        }
        if self.reroll_min < 0.0 || self.reroll_max < self.reroll_min {
            return Err(ConfigError::Invalid(
                "reroll range must be non-negative and ordered",
            ));
        }
        if self.player_radius <= 0.0
            || self.roamer_radius <= 0.0
            || self.roamer_collision_radius <= 0.0
            || self.pellet_radius <= 0.0
        {
            return Err(ConfigError::Invalid("radii must be positive"));
        }
        if self
            .score_per_pellet
            .checked_mul(self.pellet_count as u64)
            .is_none()
        {
            return Err(ConfigError::Invalid("score_per_pellet overflows the total score"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
