//! The game engine: answer evaluation, movement, and timed transitions.
//!
//! The engine owns the single [`GameState`] and a virtual clock. Operations
//! that take time (`submit_answer`, `reset`) apply their immediate effects and
//! queue the rest on a [`TimerQueue`]; the host drives the clock with
//! [`GameEngine::advance_by`], which fires due transitions in order and
//! returns an [`EngineEvent`] for every change so the UI can redraw.

use super::board::{advance_capped, Board, TileKind};
use super::config::GameConfig;
use super::constants::{CORRECT_STEP, FINISH_CELL, INCORRECT_STEP, POINTS_PER_CORRECT};
use super::game_state::{GameState, GameStatus};
use super::scheduler::{TimerQueue, Transition};
use crate::catalog::{self, Resource, ResourceKind};
use rand::Rng;
use std::time::Duration;

/// Something observable that happened inside the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    QuestionPresented {
        resource: Resource,
    },
    /// Question generation fired after the game was already won.
    QuestionSkipped,
    AnswerJudged {
        resource: Resource,
        chosen: ResourceKind,
        correct: bool,
        /// Landing cell before special-tile redirection.
        raw_position: u8,
    },
    Moved {
        from: u8,
        landed: u8,
        to: u8,
        tile: Option<TileKind>,
    },
    Won {
        score: u32,
        questions_answered: u32,
    },
    FeedbackCleared {
        next_question_scheduled: bool,
    },
    Reset {
        cancelled_transitions: usize,
    },
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    config: GameConfig,
    board: Board,
    timers: TimerQueue,
    now_ms: u64,
}

impl GameEngine {
    /// Fresh engine with no question on screen and nothing scheduled.
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(GameState::new(), config)
    }

    /// Fresh engine with its first question presented immediately.
    pub fn start<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let mut engine = Self::new(config);
        engine.present_question(rng);
        log::info!("Game started");
        engine
    }

    /// Engine resuming from an arbitrary state, with an empty timer queue.
    pub fn from_state(state: GameState, config: GameConfig) -> Self {
        Self {
            state,
            config,
            board: Board::default(),
            timers: TimerQueue::new(),
            now_ms: 0,
        }
    }

    /// Play on `board` instead of the standard tile layout.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for the presentation layer.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_transitions(&self) -> usize {
        self.timers.len()
    }

    /// Milliseconds until the next scheduled transition, if any.
    pub fn next_transition_in(&self) -> Option<u64> {
        self.timers
            .next_due_ms()
            .map(|due| due.saturating_sub(self.now_ms))
    }

    /// Put `resource` on screen as the current question.
    ///
    /// Same effect as a catalog draw; used by scripted sessions and tests.
    pub fn present(&mut self, resource: Resource) -> Vec<EngineEvent> {
        if self.state.status != GameStatus::Playing {
            log::debug!("Skipping question {}: game already won", resource.name);
            return vec![EngineEvent::QuestionSkipped];
        }
        log::debug!("Presenting question: {}", resource.name);
        self.state.current_question = Some(resource);
        vec![EngineEvent::QuestionPresented { resource }]
    }

    /// Replace the state with a zeroed game and queue the first question.
    ///
    /// Transitions queued by an earlier answer keep running unless
    /// `cancel_pending_on_reset` is set.
    pub fn reset(&mut self) -> Vec<EngineEvent> {
        let cancelled_transitions = if self.config.cancel_pending_on_reset {
            self.timers.cancel_all()
        } else {
            0
        };
        self.state = GameState::new();
        self.schedule_after(self.config.reset_question_delay_ms(), Transition::PresentQuestion);
        log::info!(
            "Game reset ({} pending transitions kept, {} cancelled)",
            self.timers.len() - 1,
            cancelled_transitions
        );
        vec![EngineEvent::Reset {
            cancelled_transitions,
        }]
    }

    /// Judge `chosen` against the current question and start the move sequence.
    ///
    /// No-op when no question is on screen.
    pub fn submit_answer(&mut self, chosen: ResourceKind) -> Vec<EngineEvent> {
        let Some(resource) = self.state.current_question else {
            log::debug!("Ignoring {} answer: no question pending", chosen);
            return Vec::new();
        };

        let correct = resource.is_classified_as(chosen);
        let step = if correct { CORRECT_STEP } else { INCORRECT_STEP };
        let raw_position = advance_capped(self.state.position, step);

        self.state.is_advancing = true;
        if correct {
            self.state.score += POINTS_PER_CORRECT;
        }
        self.state.questions_answered += 1;
        self.state.feedback_visible = true;
        self.state.feedback_text = feedback_message(&resource, chosen, correct);
        self.state.last_answer_correct = Some(correct);

        self.schedule_after(
            self.config.move_delay_ms(),
            Transition::ResolveMove { raw_position },
        );
        self.schedule_after(
            self.config.feedback_delay_ms(),
            Transition::ClearFeedback { raw_position },
        );

        log::debug!(
            "Answer {} for {}: {} (raw landing {})",
            chosen,
            resource.name,
            if correct { "correct" } else { "incorrect" },
            raw_position
        );

        vec![EngineEvent::AnswerJudged {
            resource,
            chosen,
            correct,
            raw_position,
        }]
    }

    /// Move the clock forward by `dt_ms`, firing every transition that comes due.
    pub fn advance_by<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Vec<EngineEvent> {
        let target = self.now_ms.saturating_add(dt_ms);
        self.advance_to(target, rng)
    }

    /// Move the clock to `target_ms` (never backwards), firing due transitions.
    pub fn advance_to<R: Rng>(&mut self, target_ms: u64, rng: &mut R) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Some(scheduled) = self.timers.pop_due(target_ms) {
            self.now_ms = self.now_ms.max(scheduled.due_ms);
            events.extend(self.apply(scheduled.transition, rng));
        }
        self.now_ms = self.now_ms.max(target_ms);
        events
    }

    /// Catch the clock up to `elapsed` wall time since the engine started.
    ///
    /// Frame loops should pass the total elapsed time, not per-frame deltas,
    /// so sub-millisecond remainders never accumulate as drift.
    pub fn sync_to_elapsed<R: Rng>(
        &mut self,
        elapsed: Duration,
        rng: &mut R,
    ) -> Vec<EngineEvent> {
        let target_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.advance_to(target_ms, rng)
    }

    /// Fire every pending transition, however far in the future, and return
    /// the events. Follow-up transitions queued along the way fire too.
    pub fn settle<R: Rng>(&mut self, rng: &mut R) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Some(due) = self.timers.next_due_ms() {
            events.extend(self.advance_to(due, rng));
        }
        events
    }

    fn schedule_after(&mut self, delay_ms: u64, transition: Transition) {
        self.timers
            .schedule(self.now_ms.saturating_add(delay_ms), transition);
    }

    fn apply<R: Rng>(&mut self, transition: Transition, rng: &mut R) -> Vec<EngineEvent> {
        match transition {
            Transition::ResolveMove { raw_position } => self.resolve_move(raw_position),
            Transition::ClearFeedback { raw_position } => self.clear_feedback(raw_position),
            Transition::PresentQuestion => self.present_question(rng),
        }
    }

    fn present_question<R: Rng>(&mut self, rng: &mut R) -> Vec<EngineEvent> {
        let resource = catalog::pick_random_resource(rng);
        self.present(resource)
    }

    fn resolve_move(&mut self, raw_position: u8) -> Vec<EngineEvent> {
        let from = self.state.position;
        let tile = self.board.tile_at(raw_position).copied();
        let final_position = tile.map_or(raw_position, |t| t.destination);

        self.state.position = final_position;
        self.state.is_advancing = false;
        let won = final_position >= FINISH_CELL;
        self.state.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };

        let mut events = vec![EngineEvent::Moved {
            from,
            landed: raw_position,
            to: final_position,
            tile: tile.map(|t| t.kind),
        }];
        if let Some(t) = tile {
            log::debug!(
                "Landed on {:?} at {}, moved to {}",
                t.kind,
                raw_position,
                final_position
            );
        }
        if won {
            log::info!(
                "Game won with score {} after {} questions",
                self.state.score,
                self.state.questions_answered
            );
            events.push(EngineEvent::Won {
                score: self.state.score,
                questions_answered: self.state.questions_answered,
            });
        }
        events
    }

    fn clear_feedback(&mut self, raw_position: u8) -> Vec<EngineEvent> {
        self.state.feedback_visible = false;
        self.state.current_question = None;

        // Decided on the pre-redirect cell, unlike the win check.
        let next_question_scheduled = raw_position < FINISH_CELL;
        if next_question_scheduled {
            self.schedule_after(
                self.config.next_question_delay_ms(),
                Transition::PresentQuestion,
            );
        }
        vec![EngineEvent::FeedbackCleared {
            next_question_scheduled,
        }]
    }
}

/// Feedback line shown after an answer.
pub fn feedback_message(resource: &Resource, chosen: ResourceKind, correct: bool) -> String {
    if correct {
        format!("Correct! {} is {}! 🎉", resource.name, chosen)
    } else {
        format!(
            "Oops! {} is actually {}. Keep learning! 💪",
            resource.name, resource.kind
        )
    }
}
