//! Timed on-screen labels.

use deadsky_core::constants::{LABEL_DELAY_SECS, LOSE_TEXT, START_TEXT, WIN_TEXT};
use deadsky_core::enums::Outcome;

/// Centered text shown for a while. A `close_after` label ends the game
/// once it expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub time_left: f64,
    pub close_after: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, lifetime: f64, close_after: bool) -> Self {
        Self {
            text: text.into(),
            time_left: lifetime,
            close_after,
        }
    }

    pub fn start() -> Self {
        Self::new(START_TEXT, LABEL_DELAY_SECS, false)
    }

    /// Closing label for a terminal outcome, `None` while running.
    pub fn for_outcome(outcome: Outcome) -> Option<Self> {
        let text = match outcome {
            Outcome::Running => return None,
            Outcome::PlayerDefeated => LOSE_TEXT,
            Outcome::LevelCompleted => WIN_TEXT,
        };
        Some(Self::new(text, LABEL_DELAY_SECS, true))
    }

    pub fn is_alive(&self) -> bool {
        self.time_left > 0.0
    }

    pub fn update(&mut self, dt: f64) {
        if self.is_alive() {
            self.time_left -= dt;
        }
    }
}
