//! Entity types: the player, roamers and pellets
//!
//! Roamers and pellets share the [`Wander`] component; only the player is
//! driven by input.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::wander::Wander;
use crate::wrap_position;

/// RGB color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const YELLOW: Color3 = Color3::new(1.0, 1.0, 0.0);
    pub const PINK: Color3 = Color3::new(1.0, 105.0 / 255.0, 180.0 / 255.0);
}

/// Direction the player last moved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    None,
    PosX,
    NegX,
    PosY,
    NegY,
}

/// Facing priority, checked top to bottom; first axis with a positive
/// projection wins. Horizontal always beats vertical.
const FACING_PRIORITY: [(Vec2, Facing); 4] = [
    (Vec2::X, Facing::PosX),
    (Vec2::NEG_X, Facing::NegX),
    (Vec2::Y, Facing::PosY),
    (Vec2::NEG_Y, Facing::NegY),
];

impl Facing {
    /// Facing implied by a movement delta, `None` for a zero delta
    pub fn from_delta(delta: Vec2) -> Option<Facing> {
        FACING_PRIORITY
            .iter()
            .find(|(axis, _)| delta.dot(*axis) > 0.0)
            .map(|&(_, facing)| facing)
    }
}

/// Window bounds used for wrap-around
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    /// Inset margin
    pub offset: f32,
}

impl Bounds {
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        wrap_position(pos, self.offset, self.width, self.height)
    }
}

/// The input-driven player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub facing: Facing,
    /// Units per second per held direction
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            radius,
            facing: Facing::None,
            speed,
        }
    }

    /// Move by `delta`, update facing and wrap
    pub fn step(&mut self, delta: Vec2, bounds: &Bounds) {
        self.pos += delta;
        if let Some(facing) = Facing::from_delta(delta) {
            self.facing = facing;
        }
        self.pos = bounds.wrap(self.pos);
    }
}

/// A wandering enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roamer {
    pub id: u32,
    pub pos: Vec2,
    /// Visual radius
    pub radius: f32,
    /// Contact radius against the player
    pub collision_radius: f32,
    pub color: Color3,
    pub wander: Wander,
}

/// A wandering collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pellet {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub wander: Wander,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds {
            width: 640.0,
            height: 480.0,
            offset: 10.0,
        }
    }

    #[test]
    fn test_facing_priority() {
        assert_eq!(Facing::from_delta(Vec2::new(1.0, 0.0)), Some(Facing::PosX));
        assert_eq!(Facing::from_delta(Vec2::new(-1.0, 0.0)), Some(Facing::NegX));
        assert_eq!(Facing::from_delta(Vec2::new(0.0, 1.0)), Some(Facing::PosY));
        assert_eq!(Facing::from_delta(Vec2::new(0.0, -1.0)), Some(Facing::NegY));
        assert_eq!(Facing::from_delta(Vec2::ZERO), None);
    }

    #[test]
    fn test_horizontal_beats_vertical() {
        assert_eq!(Facing::from_delta(Vec2::new(-2.0, 5.0)), Some(Facing::NegX));
        assert_eq!(Facing::from_delta(Vec2::new(0.5, -5.0)), Some(Facing::PosX));
    }

    #[test]
    fn test_player_step_moves_and_faces() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 20.0, 62.5);
        player.step(Vec2::new(0.0, -3.0), &bounds());
        assert_eq!(player.pos, Vec2::new(100.0, 97.0));
        assert_eq!(player.facing, Facing::NegY);

        // Zero delta keeps the last facing
        player.step(Vec2::ZERO, &bounds());
        assert_eq!(player.facing, Facing::NegY);
    }

    #[test]
    fn test_player_step_wraps() {
        let mut player = Player::new(Vec2::new(639.0, 240.0), 20.0, 62.5);
        player.step(Vec2::new(2.0, 0.0), &bounds());
        assert_eq!(player.pos.x, 10.0);

        let mut player = Player::new(Vec2::new(11.0, 240.0), 20.0, 62.5);
        player.step(Vec2::new(-2.0, 0.0), &bounds());
        assert_eq!(player.pos.x, 640.0);
        assert_eq!(player.facing, Facing::NegX);
    }
}
