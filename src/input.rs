//! Input normalization
//!
//! Whatever polls the keyboard fills an `InputSnapshot` with held-key flags
//! once per frame. `ActionLatch` turns the held pause/reset flags into
//! one-shot actions, so holding a key fires it exactly once.

use serde::{Deserialize, Serialize};

/// Vertical intent for the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Up,
    #[default]
    Idle,
    Down,
}

impl PaddleIntent {
    /// From held up/down keys; both or neither cancel out
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => PaddleIntent::Up,
            (false, true) => PaddleIntent::Down,
            _ => PaddleIntent::Idle,
        }
    }

    /// -1, 0 or +1 (screen y grows downward)
    pub fn axis(self) -> f32 {
        match self {
            PaddleIntent::Up => -1.0,
            PaddleIntent::Idle => 0.0,
            PaddleIntent::Down => 1.0,
        }
    }
}

/// Commands for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Player paddle direction
    pub intent: PaddleIntent,
    /// Pause toggle
    pub pause: bool,
    /// Zero the scores and serve again
    pub reset: bool,
}

/// Raw held-key state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub pause: bool,
    pub reset: bool,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn intent(&self) -> PaddleIntent {
        PaddleIntent::from_keys(self.up, self.down)
    }
}

/// Rising-edge detector for the discrete actions
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionLatch {
    pause_held: bool,
    reset_held: bool,
}

impl ActionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step input for this frame; pause/reset fire only on the frame they go down
    pub fn latch(&mut self, snapshot: &InputSnapshot) -> TickInput {
        let input = TickInput {
            intent: snapshot.intent(),
            pause: snapshot.pause && !self.pause_held,
            reset: snapshot.reset && !self.reset_held,
        };
        self.pause_held = snapshot.pause;
        self.reset_held = snapshot.reset;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_from_keys() {
        assert_eq!(PaddleIntent::from_keys(true, false), PaddleIntent::Up);
        assert_eq!(PaddleIntent::from_keys(false, true), PaddleIntent::Down);
        assert_eq!(PaddleIntent::from_keys(true, true), PaddleIntent::Idle);
        assert_eq!(PaddleIntent::from_keys(false, false), PaddleIntent::Idle);
        assert_eq!(PaddleIntent::Up.axis(), -1.0);
        assert_eq!(PaddleIntent::Down.axis(), 1.0);
    }

    #[test]
    fn test_pause_fires_once_per_press() {
        let mut latch = ActionLatch::new();
        let held = InputSnapshot {
            pause: true,
            ..Default::default()
        };

        assert!(latch.latch(&held).pause);
        assert!(!latch.latch(&held).pause);
        assert!(!latch.latch(&held).pause);

        // Release, then press again
        assert!(!latch.latch(&InputSnapshot::default()).pause);
        assert!(latch.latch(&held).pause);
    }

    #[test]
    fn test_reset_and_pause_latch_independently() {
        let mut latch = ActionLatch::new();
        let both = InputSnapshot {
            pause: true,
            reset: true,
            ..Default::default()
        };
        let input = latch.latch(&both);
        assert!(input.pause && input.reset);

        let pause_still_held = InputSnapshot {
            pause: true,
            reset: false,
            ..Default::default()
        };
        let input = latch.latch(&pause_still_held);
        assert!(!input.pause && !input.reset);
    }

    #[test]
    fn test_movement_is_not_latched() {
        let mut latch = ActionLatch::new();
        let held = InputSnapshot {
            down: true,
            ..Default::default()
        };
        assert_eq!(latch.latch(&held).intent, PaddleIntent::Down);
        assert_eq!(latch.latch(&held).intent, PaddleIntent::Down);
    }
}
