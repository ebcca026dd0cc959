//! Engine configuration: transition timing and reset semantics.
//!
//! Persisted as `config.json` in the game directory (see `utils::persistence`).

use super::constants::{
    DEFAULT_TIME_UNIT_MS, FEEDBACK_DELAY_UNITS, MOVE_DELAY_UNITS, NEXT_QUESTION_DELAY_UNITS,
    RESET_QUESTION_DELAY_UNITS,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of one time unit in milliseconds.
    pub time_unit_ms: u64,
    /// Answer → position resolved.
    pub move_delay_units: f64,
    /// Answer → feedback cleared. Measured from the answer, not from the move.
    pub feedback_delay_units: f64,
    /// Feedback cleared → next question.
    pub next_question_delay_units: f64,
    /// Reset → first question.
    pub reset_question_delay_units: f64,
    /// Drop in-flight transitions on reset. Off by default: a reset during
    /// the feedback window lets the old answer's transitions still fire.
    pub cancel_pending_on_reset: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: DEFAULT_TIME_UNIT_MS,
            move_delay_units: MOVE_DELAY_UNITS,
            feedback_delay_units: FEEDBACK_DELAY_UNITS,
            next_question_delay_units: NEXT_QUESTION_DELAY_UNITS,
            reset_question_delay_units: RESET_QUESTION_DELAY_UNITS,
            cancel_pending_on_reset: false,
        }
    }
}

impl GameConfig {
    /// Convert a delay in time units to whole milliseconds. Negative or NaN delays become 0.
    pub fn units_to_ms(&self, units: f64) -> u64 {
        let ms = units * self.time_unit_ms as f64;
        if ms.is_finite() && ms > 0.0 {
            ms.round() as u64
        } else {
            0
        }
    }

    pub fn move_delay_ms(&self) -> u64 {
        self.units_to_ms(self.move_delay_units)
    }

    pub fn feedback_delay_ms(&self) -> u64 {
        self.units_to_ms(self.feedback_delay_units)
    }

    pub fn next_question_delay_ms(&self) -> u64 {
        self.units_to_ms(self.next_question_delay_units)
    }

    pub fn reset_question_delay_ms(&self) -> u64 {
        self.units_to_ms(self.reset_question_delay_units)
    }
}
