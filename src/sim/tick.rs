//! Single simulation substep
//!
//! Advances an active (not paused, not finished) match by one bounded `dt`.
//! The order is fixed: paddles move first so the collision pass sees this
//! substep's paddle positions, then the ball moves and is resolved against
//! the walls, the player paddle, the AI paddle, and finally the goal lines.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scoring::{ScoreEvent, check_scoring};
use super::state::{GameState, Side};
use super::{ai, collision, motion};
use crate::config::SimConfig;
use crate::input::PaddleIntent;

/// Contacts that happened during one or more substeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvents {
    pub wall_bounces: u32,
    pub paddle_hits: u32,
}

impl TickEvents {
    pub fn merge(&mut self, other: TickEvents) {
        self.wall_bounces += other.wall_bounces;
        self.paddle_hits += other.paddle_hits;
    }

    pub fn any(&self) -> bool {
        self.wall_bounces > 0 || self.paddle_hits > 0
    }
}

/// Advance the game state by one substep
pub fn tick<R: Rng>(
    state: &mut GameState,
    intent: PaddleIntent,
    config: &SimConfig,
    dt: f32,
    rng: &mut R,
) -> (TickEvents, Option<ScoreEvent>) {
    let mut events = TickEvents::default();
    state.time_ticks += 1;

    // Paddles
    motion::move_player(&mut state.player, intent, config, dt);
    let ai_y = ai::track(&state.ball, &state.opponent, config, dt);
    motion::move_opponent(&mut state.opponent, ai_y, config, dt);

    // Ball
    motion::move_ball(&mut state.ball, dt);

    if collision::resolve_walls(&mut state.ball, config.playfield_height).is_some() {
        events.wall_bounces += 1;
    }

    for side in [Side::Player, Side::Opponent] {
        let paddle = *state.paddle(side);
        if let Some(hit) = collision::resolve_paddle(&mut state.ball, &paddle, side, config) {
            state.rally_hits += 1;
            events.paddle_hits += 1;
            log::trace!(
                "{:?} hit: offset {:.2}, speed {:.1}, rally {}",
                hit.side,
                hit.offset,
                hit.speed_x,
                state.rally_hits
            );
        }
    }

    let score = check_scoring(state, config, rng);
    (events, score)
}
