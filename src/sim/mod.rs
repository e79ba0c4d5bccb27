//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep
//! - Seeded RNG owned by the session
//! - Stable iteration order (by entity ID)
//! - No rendering, input or platform dependencies

pub mod collision;
pub mod entity;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;
pub mod wander;

pub use collision::collides;
pub use entity::{Bounds, Color3, Facing, Pellet, Player, Roamer};
pub use rng::RandomSource;
pub use spawn::{spawn_pellets, spawn_player, spawn_position, spawn_roamers};
pub use state::{GameEvent, Session, SessionStatus};
pub use tick::{TickInput, TickOutcome, tick};
pub use view::{EntityView, FrameView, PlayerView};
pub use wander::{RerollRange, Wander};
