//! Seeded random source
//!
//! One generator per session. Never reach for `thread_rng` inside `sim`.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Color3;

/// Deterministic uniform sampler, serializable so a snapshot resumes exactly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSource {
    seed: u64,
    rng: Pcg32,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this source was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Color channel in [0, 1]
    pub fn uniform_color(&mut self) -> f32 {
        self.rng.random_range(0.0..=1.0)
    }

    pub fn uniform_color3(&mut self) -> Color3 {
        Color3::new(
            self.uniform_color(),
            self.uniform_color(),
            self.uniform_color(),
        )
    }

    /// Position component in [min, max]
    pub fn uniform_position(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Duration in [min, max), or `min` for an empty range
    pub fn uniform_duration(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// One of -1, 0, 1 with equal probability
    pub fn uniform_direction_component(&mut self) -> i32 {
        self.rng.random_range(-1..=1)
    }

    /// Both axes sampled independently
    pub fn uniform_direction(&mut self) -> IVec2 {
        let x = self.uniform_direction_component();
        let y = self.uniform_direction_component();
        IVec2::new(x, y)
    }
}
