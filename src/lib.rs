//! Paddle Rally - a two-paddle ball-and-wall arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, AI, match rules)
//! - `input`: Held-key snapshot to per-step actions
//! - `config`: Immutable simulation constants, loadable from JSON

pub mod config;
pub mod input;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use input::{ActionLatch, InputSnapshot, PaddleIntent, TickInput};
pub use sim::{Simulation, StepOutcome, WorldSnapshot};

/// Default game constants (the values `SimConfig::default()` uses)
pub mod consts {
    /// Fixed simulation substep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame; longer frame deltas are clamped
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (px)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_MARGIN: f32 = 30.0;
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PLAYER_SPEED: f32 = 420.0; // px/s
    pub const AI_MAX_SPEED: f32 = 360.0; // px/s

    /// Ball defaults
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED: f32 = 360.0; // base px/s
    /// Horizontal speed multiplier on every paddle hit
    pub const PADDLE_SPEEDUP: f32 = 1.04;
    /// Vertical velocity added per unit of contact offset (px/s)
    pub const SPIN: f32 = 120.0;
    /// Share of the player's paddle velocity passed to the ball
    pub const PLAYER_SPIN_TRANSFER: f32 = 0.25;
    /// Serve vy is BALL_SPEED * uniform(-SERVE_ANGLE, SERVE_ANGLE)
    pub const SERVE_ANGLE: f32 = 0.9;

    /// First to this many points wins
    pub const WIN_SCORE: u32 = 7;
}

/// Clamp `n` into `[lo, hi]`, favouring `lo` if the range is inverted
#[inline]
pub fn clamp(n: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        // Inverted range never panics
        assert_eq!(clamp(5.0, 4.0, 2.0), 4.0);
    }
}
