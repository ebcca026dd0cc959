use super::constants::START_CELL;
use crate::catalog::Resource;
use serde::{Deserialize, Serialize};

/// Whether the game is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
}

/// Coarse state-machine view derived from a [`GameState`].
///
/// `Advancing` and `ShowingFeedback` overlap in time; while both hold the
/// phase reports `Advancing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No question on screen and nothing to show.
    Idle,
    AwaitingAnswer,
    Advancing,
    ShowingFeedback,
    Won,
}

/// All mutable game data. Only the engine writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: u8,
    /// Always a multiple of 10.
    pub score: u32,
    pub questions_answered: u32,
    pub current_question: Option<Resource>,
    pub status: GameStatus,
    pub feedback_visible: bool,
    pub feedback_text: String,
    /// Verdict on the most recent answer, kept until the next one.
    pub last_answer_correct: Option<bool>,
    /// True between an answer and the position/win resolution.
    pub is_advancing: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            position: START_CELL,
            score: 0,
            questions_answered: 0,
            current_question: None,
            status: GameStatus::Playing,
            feedback_visible: false,
            feedback_text: String::new(),
            last_answer_correct: None,
            is_advancing: false,
        }
    }

    pub fn has_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn phase(&self) -> Phase {
        if self.has_won() {
            Phase::Won
        } else if self.is_advancing {
            Phase::Advancing
        } else if self.feedback_visible {
            Phase::ShowingFeedback
        } else if self.current_question.is_some() {
            Phase::AwaitingAnswer
        } else {
            Phase::Idle
        }
    }

    /// Whether the answer controls should accept input.
    ///
    /// Only a question that is actually on screen can be answered: the keys
    /// stay off while the player moves, while feedback covers the question,
    /// and after a win. The engine itself does not enforce this.
    pub fn accepts_answers(&self) -> bool {
        self.current_question.is_some()
            && !self.is_advancing
            && !self.feedback_visible
            && !self.has_won()
    }
}
