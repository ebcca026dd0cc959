//! Input handling for the game screen.
//!
//! Keys are first mapped to a UI-agnostic [`GameInput`], then dispatched to
//! the engine according to what the current state allows.

use crate::catalog::ResourceKind;
use crate::core::engine::{EngineEvent, GameEngine};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Answer(ResourceKind),
    Reset,
    Quit,
    Other,
}

/// Result of handling a game input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing changed.
    Continue,
    /// The engine changed; redraw.
    Changed(Vec<EngineEvent>),
    Quit,
}

pub fn map_key(key: KeyEvent) -> GameInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameInput::Quit;
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('1') | KeyCode::Left => {
            GameInput::Answer(ResourceKind::Renewable)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('2') | KeyCode::Right => {
            GameInput::Answer(ResourceKind::NonRenewable)
        }
        KeyCode::Char('x') | KeyCode::Char('X') => GameInput::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Dispatch one input to the engine.
///
/// Answer keys are dropped while the controls are disabled (no question,
/// advancing, feedback on screen, or game won). The engine itself would also
/// ignore an answer with no question pending.
pub fn handle_game_input(input: GameInput, engine: &mut GameEngine) -> InputResult {
    match input {
        GameInput::Quit => InputResult::Quit,
        GameInput::Reset => InputResult::Changed(engine.reset()),
        GameInput::Answer(kind) => {
            if !engine.state().accepts_answers() {
                return InputResult::Continue;
            }
            let events = engine.submit_answer(kind);
            if events.is_empty() {
                InputResult::Continue
            } else {
                InputResult::Changed(events)
            }
        }
        GameInput::Other => InputResult::Continue,
    }
}
