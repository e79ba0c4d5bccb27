//! Timed random wandering
//!
//! Shared by roamers and pellets: count the timer down, re-roll direction
//! and duration when it runs out, move, wrap.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::entity::Bounds;
use super::rng::RandomSource;

/// Re-roll duration range in seconds, upper bound exclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RerollRange {
    pub min: f32,
    pub max: f32,
}

/// Wander state carried by each wandering entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wander {
    /// Components are always -1, 0 or 1
    pub direction: IVec2,
    /// Seconds until the next re-roll
    pub direction_timer: f32,
    /// Units per second
    pub speed: f32,
}

impl Wander {
    /// Stationary with an expired timer, so the first advance re-rolls
    pub fn new(speed: f32) -> Self {
        Self {
            direction: IVec2::ZERO,
            direction_timer: 0.0,
            speed,
        }
    }

    /// Advance one tick, moving `pos` in place
    pub fn advance(
        &mut self,
        pos: &mut Vec2,
        dt: f32,
        rng: &mut RandomSource,
        reroll: RerollRange,
        bounds: &Bounds,
    ) {
        self.direction_timer -= dt;
        if self.direction_timer <= 0.0 {
            self.direction = rng.uniform_direction();
            self.direction_timer = rng.uniform_duration(reroll.min, reroll.max);
        }

        *pos += self.direction.as_vec2() * self.speed * dt;
        *pos = bounds.wrap(*pos);
    }
}
