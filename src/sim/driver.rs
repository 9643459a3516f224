//! Simulation driver
//!
//! `Simulation` owns the game state, the config and the serve RNG. Callers
//! feed it one `TickInput` and the elapsed frame time per frame, and render
//! the `WorldSnapshot` it returns.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::scoring::{self, ScoreEvent};
use super::state::{GameState, MatchPhase, Side, WorldSnapshot};
use super::tick::{TickEvents, tick};
use crate::config::SimConfig;
use crate::input::TickInput;

/// Result of one `Simulation::step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub world: WorldSnapshot,
    /// Point scored this step, if any
    pub score: Option<ScoreEvent>,
    pub events: TickEvents,
}

/// The match, advanced one frame at a time
#[derive(Debug, Clone)]
pub struct Simulation<R: Rng = Pcg32> {
    config: SimConfig,
    state: GameState,
    rng: R,
}

impl Simulation<Pcg32> {
    /// Deterministic simulation: same seed and inputs give the same match
    pub fn new(config: SimConfig, seed: u64) -> Self {
        log::info!("Simulation seeded with {}", seed);
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Simulation seeded from the thread RNG
    pub fn from_entropy(config: SimConfig) -> Self {
        Self::with_rng(config, Pcg32::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Simulation<R> {
    /// Start a match with the given serve RNG; the opening serve side is random
    pub fn with_rng(config: SimConfig, mut rng: R) -> Self {
        let ball = scoring::serve_random(&config, &mut rng);
        let state = GameState::new(&config, ball);
        Self { config, state, rng }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.state.snapshot()
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.score.phase()
    }

    pub fn toggle_pause(&mut self) {
        self.state.score.paused = !self.state.score.paused;
        log::debug!("Paused: {}", self.state.score.paused);
    }

    /// Zero the scores and serve toward the player; works in every phase
    pub fn reset(&mut self) {
        self.state.score.reset_scores();
        let ball = scoring::serve(&self.config, Side::Player, &mut self.rng);
        self.state.put_in_play(ball);
        log::info!("Match reset");
    }

    /// Advance the match by one frame of `dt` seconds
    ///
    /// Pause and reset actions apply first. Motion only runs while playing,
    /// and a non-positive or non-finite `dt` simulates nothing.
    pub fn step(&mut self, input: &TickInput, dt: f32) -> StepOutcome {
        if input.pause {
            self.toggle_pause();
        }
        if input.reset {
            self.reset();
        }

        let mut events = TickEvents::default();
        let mut score = None;

        if self.phase() == MatchPhase::Playing {
            if let Some((substeps, sub_dt)) = self.substeps(dt) {
                for _ in 0..substeps {
                    let (tick_events, tick_score) =
                        tick(&mut self.state, input.intent, &self.config, sub_dt, &mut self.rng);
                    events.merge(tick_events);

                    if let Some(point) = tick_score {
                        log::info!(
                            "{:?} scores: {} - {}",
                            point.scorer,
                            point.player_score,
                            point.opponent_score
                        );
                        score = Some(point);
                    }

                    if self.state.score.is_finished() {
                        log::info!("Match won by {:?}", self.state.score.winner());
                        break;
                    }
                }
            }
        }

        StepOutcome {
            world: self.state.snapshot(),
            score,
            events,
        }
    }

    /// Split a frame delta into equal substeps no longer than `sim_dt`
    fn substeps(&self, dt: f32) -> Option<(u32, f32)> {
        if !(dt.is_finite() && dt > 0.0) {
            log::debug!("Ignoring frame delta {}", dt);
            return None;
        }

        let max_dt = self.config.max_frame_dt();
        let dt = if dt > max_dt {
            log::debug!("Clamping frame delta {:.3}s to {:.3}s", dt, max_dt);
            max_dt
        } else {
            dt
        };

        // Epsilon keeps an exact multiple of sim_dt from rounding up a substep
        let count = ((dt / self.config.sim_dt) - 1e-4).ceil() as u32;
        let count = count.clamp(1, self.config.max_substeps);
        Some((count, dt / count as f32))
    }
}
