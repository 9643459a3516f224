//! Kinematic integration for paddles and the ball

use super::state::{Ball, Paddle};
use crate::config::SimConfig;
use crate::input::PaddleIntent;

/// Drive the player paddle from input and clamp it to the playfield
pub fn move_player(paddle: &mut Paddle, intent: PaddleIntent, config: &SimConfig, dt: f32) {
    paddle.velocity_y = intent.axis() * config.player_speed;
    let y = paddle.y() + paddle.velocity_y * dt;
    paddle.set_y_clamped(y, config.playfield_height);
}

/// Place the AI paddle at the position chosen by the controller
///
/// Velocity is the actual displacement over `dt`, so a clamped paddle reads 0.
pub fn move_opponent(paddle: &mut Paddle, target_y: f32, config: &SimConfig, dt: f32) {
    let before = paddle.y();
    paddle.set_y_clamped(target_y, config.playfield_height);
    paddle.velocity_y = (paddle.y() - before) / dt;
}

/// Advance the ball along its velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.rect.pos += ball.vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::Vec2;

    #[test]
    fn test_player_moves_with_intent() {
        let config = SimConfig::default();
        let mut paddle = Paddle::new(Side::Player, &config);
        let start = paddle.y();

        move_player(&mut paddle, PaddleIntent::Down, &config, 0.1);
        assert_eq!(paddle.velocity_y, 420.0);
        assert!((paddle.y() - (start + 42.0)).abs() < 1e-3);

        move_player(&mut paddle, PaddleIntent::Idle, &config, 0.1);
        assert_eq!(paddle.velocity_y, 0.0);
        assert!((paddle.y() - (start + 42.0)).abs() < 1e-3);
    }

    #[test]
    fn test_player_stops_at_edges() {
        let config = SimConfig::default();
        let mut paddle = Paddle::new(Side::Player, &config);

        for _ in 0..100 {
            move_player(&mut paddle, PaddleIntent::Up, &config, 1.0 / 60.0);
        }
        assert_eq!(paddle.y(), 0.0);

        for _ in 0..200 {
            move_player(&mut paddle, PaddleIntent::Down, &config, 1.0 / 60.0);
        }
        assert_eq!(paddle.y(), config.paddle_max_y());
    }

    #[test]
    fn test_opponent_velocity_from_displacement() {
        let config = SimConfig::default();
        let mut paddle = Paddle::new(Side::Opponent, &config);

        move_opponent(&mut paddle, 260.0, &config, 0.5);
        assert_eq!(paddle.y(), 260.0);
        assert_eq!(paddle.velocity_y, 10.0);

        // Clamped: only the legal part of the move counts
        move_opponent(&mut paddle, 9999.0, &config, 1.0);
        assert_eq!(paddle.y(), config.paddle_max_y());
        assert_eq!(paddle.velocity_y, config.paddle_max_y() - 260.0);
    }

    #[test]
    fn test_ball_integration() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), 14.0, Vec2::new(-360.0, 120.0));
        move_ball(&mut ball, 0.5);
        assert_eq!(ball.rect.center(), Vec2::new(220.0, 360.0));
    }
}
