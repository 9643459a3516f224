//! Game state and core simulation types
//!
//! Everything the simulation mutates between steps lives in `GameState`.
//! Renderers read `WorldSnapshot` and never touch the state directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::clamp;
use crate::config::SimConfig;

/// Which paddle a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle on the left wall
    Player,
    /// AI-controlled paddle on the right wall
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Sign of `vx` for a ball travelling toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Current phase of the match, derived from `MatchState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball is live
    Playing,
    /// Frozen until the pause action fires again
    Paused,
    /// Someone reached the win score; frozen until reset
    Finished,
}

/// A paddle entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Vertical velocity this substep (px/s, positive is down)
    pub velocity_y: f32,
}

impl Paddle {
    /// Paddle for `side`, vertically centered against its wall
    pub fn new(side: Side, config: &SimConfig) -> Self {
        let x = match side {
            Side::Player => config.paddle_margin,
            Side::Opponent => config.playfield_width - config.paddle_margin - config.paddle_width,
        };
        let y = config.playfield_height / 2.0 - config.paddle_height / 2.0;
        Self {
            rect: Rect::new(x, y, config.paddle_width, config.paddle_height),
            velocity_y: 0.0,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.pos.y
    }

    /// Place the paddle at `y`, kept inside `[0, playfield_height - paddle_height]`
    pub fn set_y_clamped(&mut self, y: f32, playfield_height: f32) {
        self.rect.pos.y = clamp(y, 0.0, playfield_height - self.rect.size.y);
    }
}

/// The ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity (px/s)
    pub vel: Vec2,
}

impl Ball {
    pub fn new(center: Vec2, size: f32, vel: Vec2) -> Self {
        Self {
            rect: Rect::centered_at(center, Vec2::splat(size)),
            vel,
        }
    }

    /// Fresh ball at the playfield center heading toward `toward`
    ///
    /// `angle` is the vertical component as a fraction of the serve speed.
    pub fn served(config: &SimConfig, toward: Side, angle: f32) -> Self {
        let center = Vec2::new(config.playfield_width / 2.0, config.playfield_height / 2.0);
        let vel = Vec2::new(
            toward.direction() * config.ball_speed,
            config.ball_speed * angle,
        );
        Self::new(center, config.ball_size, vel)
    }

    /// Horizontal speed magnitude
    #[inline]
    pub fn speed_x(&self) -> f32 {
        self.vel.x.abs()
    }
}

/// Scores and pause flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub opponent_score: u32,
    pub paused: bool,
    win_score: u32,
}

impl MatchState {
    pub fn new(win_score: u32) -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            paused: false,
            win_score,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    /// Add a point for `side`, returning its new score
    pub fn award(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Player => &mut self.player_score,
            Side::Opponent => &mut self.opponent_score,
        };
        *score = score.saturating_add(1);
        *score
    }

    pub fn reset_scores(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
    }

    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    /// Side that reached the win score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= self.win_score {
            Some(Side::Player)
        } else if self.opponent_score >= self.win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_finished() {
            MatchPhase::Finished
        } else if self.paused {
            MatchPhase::Paused
        } else {
            MatchPhase::Playing
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: MatchState,
    /// Substeps simulated since creation
    pub time_ticks: u64,
    /// Paddle hits since the last serve
    pub rally_hits: u32,
}

impl GameState {
    /// Fresh match with both paddles centered and `ball` in play
    pub fn new(config: &SimConfig, ball: Ball) -> Self {
        Self {
            player: Paddle::new(Side::Player, config),
            opponent: Paddle::new(Side::Opponent, config),
            ball,
            score: MatchState::new(config.win_score),
            time_ticks: 0,
            rally_hits: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Replace the ball and start a new rally
    pub fn put_in_play(&mut self, ball: Ball) {
        self.ball = ball;
        self.rally_hits = 0;
    }

    /// Everything a renderer needs to draw the frame
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            player: self.player.rect,
            opponent: self.opponent.rect,
            ball: self.ball.rect,
            ball_velocity: self.ball.vel,
            player_score: self.score.player_score,
            opponent_score: self.score.opponent_score,
            paused: self.score.paused,
            finished: self.score.is_finished(),
            winner: self.score.winner(),
        }
    }
}

/// Read-only view of the world handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub player: Rect,
    pub opponent: Rect,
    pub ball: Rect,
    pub ball_velocity: Vec2,
    pub player_score: u32,
    pub opponent_score: u32,
    pub paused: bool,
    pub finished: bool,
    pub winner: Option<Side>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_layout() {
        let config = SimConfig::default();
        let player = Paddle::new(Side::Player, &config);
        let opponent = Paddle::new(Side::Opponent, &config);

        assert_eq!(player.rect.left(), 30.0);
        assert_eq!(opponent.rect.right(), 770.0);
        assert_eq!(player.y(), 255.0);
        assert_eq!(opponent.y(), 255.0);
    }

    #[test]
    fn test_paddle_clamp() {
        let config = SimConfig::default();
        let mut paddle = Paddle::new(Side::Player, &config);

        paddle.set_y_clamped(-50.0, config.playfield_height);
        assert_eq!(paddle.y(), 0.0);
        paddle.set_y_clamped(1000.0, config.playfield_height);
        assert_eq!(paddle.y(), 510.0);
        paddle.set_y_clamped(123.0, config.playfield_height);
        assert_eq!(paddle.y(), 123.0);
    }

    #[test]
    fn test_served_ball_is_centered() {
        let config = SimConfig::default();
        let ball = Ball::served(&config, Side::Opponent, 0.5);

        assert_eq!(ball.rect.center(), Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.x, 360.0);
        assert_eq!(ball.vel.y, 180.0);

        let ball = Ball::served(&config, Side::Player, -0.9);
        assert_eq!(ball.vel.x, -360.0);
        assert!((ball.vel.y - -324.0).abs() < 1e-3);
    }

    #[test]
    fn test_match_state_winner() {
        let mut score = MatchState::new(7);
        assert_eq!(score.phase(), MatchPhase::Playing);

        for _ in 0..6 {
            score.award(Side::Opponent);
        }
        assert!(!score.is_finished());
        assert_eq!(score.award(Side::Opponent), 7);
        assert_eq!(score.winner(), Some(Side::Opponent));
        assert_eq!(score.phase(), MatchPhase::Finished);

        score.reset_scores();
        assert_eq!(score.winner(), None);
        assert_eq!(score.score(Side::Player), 0);
    }

    #[test]
    fn test_finished_takes_precedence_over_paused() {
        let mut score = MatchState::new(1);
        score.paused = true;
        assert_eq!(score.phase(), MatchPhase::Paused);
        score.award(Side::Player);
        assert_eq!(score.phase(), MatchPhase::Finished);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Player.direction(), -1.0);
        assert_eq!(Side::Opponent.direction(), 1.0);
    }
}
