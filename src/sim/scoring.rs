//! Scoring and serves

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, GameState, Side};
use crate::config::SimConfig;

/// A point was scored during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub scorer: Side,
    pub player_score: u32,
    pub opponent_score: u32,
    /// This point ended the match
    pub match_won: bool,
}

/// Side that scored if the ball has fully left the playfield
pub fn check_exit(ball: &Ball, playfield_width: f32) -> Option<Side> {
    if ball.rect.right() < 0.0 {
        // Player missed
        Some(Side::Opponent)
    } else if ball.rect.left() > playfield_width {
        // AI missed
        Some(Side::Player)
    } else {
        None
    }
}

/// Random vertical serve factor in `[-serve_angle, serve_angle]`
pub fn serve_angle<R: Rng>(config: &SimConfig, rng: &mut R) -> f32 {
    rng.random_range(-config.serve_angle..=config.serve_angle)
}

/// New ball from the center, heading toward the side that just scored
pub fn serve<R: Rng>(config: &SimConfig, scorer: Side, rng: &mut R) -> Ball {
    Ball::served(config, scorer, serve_angle(config, rng))
}

/// Opening serve toward a random side
pub fn serve_random<R: Rng>(config: &SimConfig, rng: &mut R) -> Ball {
    let toward = if rng.random_bool(0.5) {
        Side::Player
    } else {
        Side::Opponent
    };
    serve(config, toward, rng)
}

/// Award a point if the ball left the playfield, then serve again
pub fn check_scoring<R: Rng>(
    state: &mut GameState,
    config: &SimConfig,
    rng: &mut R,
) -> Option<ScoreEvent> {
    let scorer = check_exit(&state.ball, config.playfield_width)?;

    state.score.award(scorer);
    let event = ScoreEvent {
        scorer,
        player_score: state.score.player_score,
        opponent_score: state.score.opponent_score,
        match_won: state.score.is_finished(),
    };

    state.put_in_play(serve(config, scorer, rng));
    Some(event)
}
