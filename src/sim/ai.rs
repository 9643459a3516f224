//! Scripted opponent
//!
//! The AI centers its paddle on the ball but closes the gap no faster than
//! `ai_max_speed`. Anything within one substep of reach is tracked exactly.
//! There is no memory beyond the paddle's current position.

use super::state::{Ball, Paddle};
use crate::clamp;
use crate::config::SimConfig;

/// Paddle `y` that would center the paddle on the ball
#[inline]
pub fn target_y(ball: &Ball, paddle: &Paddle) -> f32 {
    ball.rect.center_y() - paddle.rect.size.y / 2.0
}

/// Next AI paddle `y` after `dt` of reaction-capped tracking
pub fn track(ball: &Ball, paddle: &Paddle, config: &SimConfig, dt: f32) -> f32 {
    let target = target_y(ball, paddle);
    let dy = target - paddle.y();
    let max_step = config.ai_max_speed * dt;

    let next = if dy.abs() > max_step {
        paddle.y() + max_step * dy.signum()
    } else {
        target
    };

    clamp(next, 0.0, config.playfield_height - paddle.rect.size.y)
}
