//! Initial population generation
//!
//! Positions are sampled uniformly in `[offset, dimension - offset]` on each
//! axis. No overlap avoidance: entities may spawn on top of each other.

use glam::Vec2;

use super::entity::{Player, Pellet, Roamer};
use super::rng::RandomSource;
use super::wander::Wander;
use crate::config::SimConfig;

/// Random in-bounds spawn point
pub fn spawn_position(config: &SimConfig, rng: &mut RandomSource) -> Vec2 {
    let inset = config.boundary_inset;
    let x = rng.uniform_position(inset, config.window_width - inset);
    let y = rng.uniform_position(inset, config.window_height - inset);
    Vec2::new(x, y)
}

pub fn spawn_player(config: &SimConfig, rng: &mut RandomSource) -> Player {
    let pos = spawn_position(config, rng);
    Player::new(pos, config.player_radius, config.player_speed())
}

/// Spawn `count` roamers with random colors. Ids start at `first_id`.
pub fn spawn_roamers(
    count: usize,
    first_id: u32,
    config: &SimConfig,
    rng: &mut RandomSource,
) -> Vec<Roamer> {
    (0..count)
        .map(|i| {
            let color = rng.uniform_color3();
            let pos = spawn_position(config, rng);
            Roamer {
                id: first_id + i as u32,
                pos,
                radius: config.roamer_radius,
                collision_radius: config.roamer_collision_radius,
                color,
                wander: Wander::new(config.roamer_speed()),
            }
        })
        .collect()
}

/// Spawn `count` pellets. Ids start at `first_id`.
pub fn spawn_pellets(
    count: usize,
    first_id: u32,
    config: &SimConfig,
    rng: &mut RandomSource,
) -> Vec<Pellet> {
    (0..count)
        .map(|i| Pellet {
            id: first_id + i as u32,
            pos: spawn_position(config, rng),
            radius: config.pellet_radius,
            wander: Wander::new(config.pellet_speed()),
        })
        .collect()
}
