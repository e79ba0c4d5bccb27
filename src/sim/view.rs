//! Read-only frame snapshot for renderers
//!
//! Renderers draw from a `FrameView` and never touch `Session` directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Color3, Facing};
use super::state::{Session, SessionStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub facing: Facing,
    pub color: Color3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color3,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub player: PlayerView,
    pub roamers: Vec<EntityView>,
    pub pellets: Vec<EntityView>,
    pub score: u64,
    pub status: SessionStatus,
    pub time_ticks: u64,
}

impl Session {
    pub fn view(&self) -> FrameView {
        FrameView {
            player: PlayerView {
                pos: self.player.pos,
                radius: self.player.radius,
                facing: self.player.facing,
                color: Color3::YELLOW,
            },
            roamers: self
                .roamers
                .iter()
                .map(|r| EntityView {
                    id: r.id,
                    pos: r.pos,
                    radius: r.radius,
                    color: r.color,
                })
                .collect(),
            pellets: self
                .pellets
                .iter()
                .map(|p| EntityView {
                    id: p.id,
                    pos: p.pos,
                    radius: p.radius,
                    color: Color3::PINK,
                })
                .collect(),
            score: self.score,
            status: self.status,
            time_ticks: self.time_ticks,
        }
    }
}
