//! Collision detection and response
//!
//! Walls reflect the ball without damping. Paddles reverse and speed up the
//! ball, and add spin from the contact offset (and, for the player, from
//! paddle motion). Every response leaves the ball exactly on the surface it
//! hit, never inside it.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};
use crate::config::SimConfig;

/// Which horizontal wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Details of a resolved paddle hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleHit {
    pub side: Side,
    /// Contact offset from the paddle center, roughly in [-1, 1]
    pub offset: f32,
    /// Horizontal speed after the hit
    pub speed_x: f32,
}

/// Reflect the ball off the top or bottom wall
pub fn resolve_walls(ball: &mut Ball, playfield_height: f32) -> Option<Wall> {
    if ball.rect.top() <= 0.0 {
        ball.rect.set_top(0.0);
        ball.vel.y = -ball.vel.y;
        Some(Wall::Top)
    } else if ball.rect.bottom() >= playfield_height {
        ball.rect.set_bottom(playfield_height);
        ball.vel.y = -ball.vel.y;
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Whether a ball with this velocity is heading toward `side`'s paddle
#[inline]
pub fn approaching(ball: &Ball, side: Side) -> bool {
    ball.vel.x * side.direction() > 0.0
}

/// Bounce the ball off `paddle` if it overlaps while approaching
///
/// The direction gate keeps a ball that was just pushed out from
/// re-triggering on the next substep.
pub fn resolve_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    config: &SimConfig,
) -> Option<PaddleHit> {
    if !approaching(ball, side) || !ball.rect.overlaps(&paddle.rect) {
        return None;
    }

    // Leading edge onto the facing edge
    match side {
        Side::Player => ball.rect.set_left(paddle.rect.right()),
        Side::Opponent => ball.rect.set_right(paddle.rect.left()),
    }

    ball.vel.x = -ball.vel.x * config.paddle_speedup;

    let offset = (ball.rect.center_y() - paddle.rect.center_y()) / (paddle.rect.size.y / 2.0);
    let mut spin = offset * config.spin;
    if side == Side::Player {
        spin += paddle.velocity_y * config.player_spin_transfer;
    }
    ball.vel.y += spin;

    Some(PaddleHit {
        side,
        offset,
        speed_x: ball.speed_x(),
    })
}
