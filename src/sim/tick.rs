//! Simulation tick
//!
//! Core game loop step: player input, pellets, roamers, terminal checks.

use glam::Vec2;

use super::collision::collides;
use super::state::{GameEvent, Session, SessionStatus};

/// Held-key state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Unit deltas for each held key, in application order: up, down, left,
    /// right. Screen space, so up is -y.
    pub fn held_directions(&self) -> impl Iterator<Item = Vec2> {
        [
            (self.up, Vec2::NEG_Y),
            (self.down, Vec2::Y),
            (self.left, Vec2::NEG_X),
            (self.right, Vec2::X),
        ]
        .into_iter()
        .filter(|&(held, _)| held)
        .map(|(_, dir)| dir)
    }
}

/// What a tick did
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub status: SessionStatus,
    pub score_delta: u64,
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    fn frozen(status: SessionStatus) -> Self {
        Self {
            status,
            score_delta: 0,
            events: Vec::new(),
        }
    }
}

/// Advance the session by `dt` seconds.
///
/// `dt` must be finite and non-negative. Once the session is Won or Lost
/// this is a no-op.
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) -> TickOutcome {
    debug_assert!(
        dt.is_finite() && dt >= 0.0,
        "dt must be finite and non-negative, got {dt}"
    );

    if session.is_over() {
        return TickOutcome::frozen(session.status);
    }

    session.time_ticks += 1;
    session.elapsed += dt;

    let bounds = session.bounds();
    let reroll = session.reroll_range();
    let mut events = Vec::new();

    // Player: each held key applied in turn, so opposite keys cancel
    let step = session.player.speed * dt;
    for dir in input.held_directions() {
        session.player.step(dir * step, &bounds);
    }
    let player_pos = session.player.pos;
    let player_radius = session.player.radius;

    // Pellets: consumed ones are dropped before they move
    let per_pellet = session.config.score_per_pellet;
    let mut score_delta: u64 = 0;
    let rng = &mut session.rng;
    session.pellets.retain_mut(|pellet| {
        if collides(player_pos, player_radius, pellet.pos, pellet.radius) {
            log::debug!("Pellet {} consumed at {:?}", pellet.id, pellet.pos);
            score_delta = score_delta.saturating_add(per_pellet);
            events.push(GameEvent::PelletConsumed {
                id: pellet.id,
                pos: pellet.pos,
            });
            false
        } else {
            pellet.wander.advance(&mut pellet.pos, dt, rng, reroll, &bounds);
            true
        }
    });
    session.score = session.score.saturating_add(score_delta);

    // Roamers: first contact loses; the rest keep moving this tick unless
    // strict_immediate_stop is set
    let strict = session.config.strict_immediate_stop;
    let mut lost = false;
    for roamer in session.roamers.iter_mut() {
        if !lost && collides(player_pos, player_radius, roamer.pos, roamer.collision_radius) {
            log::debug!("Roamer {} touched player at {:?}", roamer.id, roamer.pos);
            lost = true;
            events.push(GameEvent::RoamerContact {
                id: roamer.id,
                pos: roamer.pos,
            });
            if strict {
                break;
            }
        }
        roamer
            .wander
            .advance(&mut roamer.pos, dt, &mut session.rng, reroll, &bounds);
    }

    if lost {
        session.status = SessionStatus::Lost;
        log::info!(
            "Game over: score={}, ticks={}",
            session.score,
            session.time_ticks
        );
        events.push(GameEvent::SessionLost {
            score: session.score,
        });
    } else if session.pellets.is_empty() {
        session.status = SessionStatus::Won;
        log::info!(
            "You win: score={}, ticks={}",
            session.score,
            session.time_ticks
        );
        events.push(GameEvent::SessionWon {
            score: session.score,
        });
    }

    TickOutcome {
        status: session.status,
        score_delta,
        events,
    }
}

impl Session {
    /// Advance this session by `dt` seconds, see [`tick`]
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> TickOutcome {
        tick(self, input, dt)
    }
}
