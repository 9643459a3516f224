//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded substeps only
//! - Injected, seedable RNG only (serve angles and the opening serve side)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod driver;
pub mod motion;
pub mod rect;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{PaddleHit, Wall, resolve_paddle, resolve_walls};
pub use driver::{Simulation, StepOutcome};
pub use rect::Rect;
pub use scoring::ScoreEvent;
pub use state::{Ball, GameState, MatchPhase, MatchState, Paddle, Side, WorldSnapshot};
pub use tick::{TickEvents, tick};
