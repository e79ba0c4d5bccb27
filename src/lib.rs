//! Pellet Chase - a wandering-ghost pellet chase arcade toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wandering, collisions, session state)
//! - `config`: Data-driven game tunables

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the native driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;
    /// Inset margin used for spawning and wrap-around
    pub const BOUNDARY_INSET: f32 = 10.0;

    /// Population defaults
    pub const ROAMER_COUNT: usize = 4;
    pub const PELLET_COUNT: usize = 20;

    /// Roamer speed in units per second; everything else scales from it
    pub const BASE_SPEED: f32 = 50.0;
    pub const PELLET_SPEED_FRACTION: f32 = 1.0 / 3.0;
    pub const PLAYER_SPEED_MULTIPLIER: f32 = 1.25;

    pub const SCORE_PER_PELLET: u64 = 10;

    /// Wander re-roll duration range, seconds (upper bound exclusive)
    pub const REROLL_MIN: f32 = 0.0;
    pub const REROLL_MAX: f32 = 3.5;

    /// Entity radii
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const ROAMER_RADIUS: f32 = 25.0;
    /// Contact radius for roamers, deliberately smaller than the sprite
    pub const ROAMER_COLLISION_RADIUS: f32 = 15.0;
    pub const PELLET_RADIUS: f32 = 5.0;
}

/// Wrap a single coordinate into `[offset, max]`.
///
/// Crossing the far edge teleports to `offset`, crossing the near edge
/// teleports to `max`. Values inside the range are returned unchanged.
#[inline]
pub fn wrap_axis(value: f32, offset: f32, max: f32) -> f32 {
    if value > max {
        offset
    } else if value < offset {
        max
    } else {
        value
    }
}

/// Wrap a position against a `width` x `height` window with an inset margin
#[inline]
pub fn wrap_position(pos: Vec2, offset: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, offset, width),
        wrap_axis(pos.y, offset, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_axis_far_edge() {
        assert_eq!(wrap_axis(641.0, 10.0, 640.0), 10.0);
    }

    #[test]
    fn test_wrap_axis_near_edge() {
        assert_eq!(wrap_axis(9.5, 10.0, 640.0), 640.0);
    }

    #[test]
    fn test_wrap_axis_edges_are_inclusive() {
        assert_eq!(wrap_axis(640.0, 10.0, 640.0), 640.0);
        assert_eq!(wrap_axis(10.0, 10.0, 640.0), 10.0);
        assert_eq!(wrap_axis(320.0, 10.0, 640.0), 320.0);
    }

    #[test]
    fn test_wrap_position_axes_independent() {
        let wrapped = wrap_position(Vec2::new(700.0, 5.0), 10.0, 640.0, 480.0);
        assert_eq!(wrapped, Vec2::new(10.0, 480.0));

        let wrapped = wrap_position(Vec2::new(100.0, 490.0), 10.0, 640.0, 480.0);
        assert_eq!(wrapped, Vec2::new(100.0, 10.0));
    }
}
