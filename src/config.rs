//! Simulation configuration
//!
//! Fixed at startup and threaded through the simulation. Can be loaded from a
//! JSON file; missing fields fall back to the defaults in `crate::consts`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Every tunable constant of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Paddles ===
    /// Gap between a side wall and its paddle
    pub paddle_margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Player paddle speed (px/s)
    pub player_speed: f32,
    /// AI reaction cap (px/s)
    pub ai_max_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Serve speed (px/s)
    pub ball_speed: f32,
    /// Horizontal speed multiplier per paddle hit
    pub paddle_speedup: f32,
    /// Spin per unit of contact offset (px/s)
    pub spin: f32,
    /// Fraction of the player paddle velocity added to the ball on contact
    pub player_spin_transfer: f32,
    /// Serve angle bound, as a fraction of `ball_speed`
    pub serve_angle: f32,

    // === Match ===
    pub win_score: u32,

    // === Stepping ===
    /// Longest substep the simulation will integrate (seconds)
    pub sim_dt: f32,
    /// Substeps per frame before the frame delta gets clamped
    pub max_substeps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_margin: PADDLE_MARGIN,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            player_speed: PLAYER_SPEED,
            ai_max_speed: AI_MAX_SPEED,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            paddle_speedup: PADDLE_SPEEDUP,
            spin: SPIN,
            player_spin_transfer: PLAYER_SPIN_TRANSFER,
            serve_angle: SERVE_ANGLE,

            win_score: WIN_SCORE,

            sim_dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty JSON, suitable for writing a starter config file
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("player_speed", self.player_speed),
            ("ai_max_speed", self.ai_max_speed),
            ("ball_speed", self.ball_speed),
            ("sim_dt", self.sim_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} exceeds playfield_height {}",
                self.paddle_height, self.playfield_height
            )));
        }
        if self.ball_size > self.playfield_height || self.ball_size > self.playfield_width {
            return Err(ConfigError::Invalid(format!(
                "ball_size {} does not fit the playfield",
                self.ball_size
            )));
        }
        if !(self.paddle_margin >= 0.0
            && self.paddle_margin + self.paddle_width <= self.playfield_width / 2.0)
        {
            return Err(ConfigError::Invalid(format!(
                "paddle_margin {} places the paddles outside their half",
                self.paddle_margin
            )));
        }
        // Rally speed must never drop on a hit
        if !(self.paddle_speedup.is_finite() && self.paddle_speedup >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "paddle_speedup must be >= 1.0, got {}",
                self.paddle_speedup
            )));
        }
        if !(self.serve_angle.is_finite() && self.serve_angle >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "serve_angle must be >= 0, got {}",
                self.serve_angle
            )));
        }
        if !self.spin.is_finite() || !self.player_spin_transfer.is_finite() {
            return Err(ConfigError::Invalid("spin factors must be finite".into()));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be at least 1".into()));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Invalid(
                "max_substeps must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Largest frame delta a single step will simulate
    #[inline]
    pub fn max_frame_dt(&self) -> f32 {
        self.sim_dt * self.max_substeps as f32
    }

    /// Lowest legal paddle `y`
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.playfield_height - self.paddle_height
    }
}
