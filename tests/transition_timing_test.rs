//! Behavior-locking tests for the delayed transition sequence and reset.
//!
//! These lock down timing quirks that are kept on purpose:
//! - reset does not cancel an earlier answer's transitions (unless configured)
//! - the "next question" decision looks at the pre-redirect landing cell
//! - the engine takes a second answer during feedback; only the controls refuse it

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use resource_explorer::catalog::{self, Resource};
use resource_explorer::core::board::{Board, SpecialTile, TileKind};
use resource_explorer::{
    EngineEvent, GameConfig, GameEngine, GameState, GameStatus, Phase, ResourceKind,
};

// =============================================================================
// Helpers
// =============================================================================

fn resource(name: &str) -> Resource {
    catalog::find_by_name(name).expect("resource should be in the catalog")
}

fn engine_at(position: u8, question: &str, config: GameConfig) -> GameEngine {
    let mut state = GameState::new();
    state.position = position;
    state.current_question = Some(resource(question));
    GameEngine::from_state(state, config)
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(77)
}

// =============================================================================
// Sequencing
// =============================================================================

#[test]
fn test_phases_follow_the_transition_timeline() {
    let mut rng = rng();
    let mut engine = engine_at(3, "Oil", GameConfig::default());
    assert_eq!(engine.state().phase(), Phase::AwaitingAnswer);

    engine.submit_answer(ResourceKind::NonRenewable);
    assert_eq!(engine.state().phase(), Phase::Advancing);

    engine.advance_by(1000, &mut rng);
    assert_eq!(engine.state().phase(), Phase::ShowingFeedback);
    assert_eq!(engine.state().position, 5);

    engine.advance_by(2000, &mut rng);
    assert_eq!(engine.state().phase(), Phase::Idle);

    engine.advance_by(500, &mut rng);
    assert_eq!(engine.state().phase(), Phase::AwaitingAnswer);
}

#[test]
fn test_no_question_while_transition_pending() {
    let mut rng = rng();
    let mut engine = engine_at(0, "Coal", GameConfig::default());
    engine.submit_answer(ResourceKind::NonRenewable);

    // Step through the window in 100ms slices
    for _ in 0..35 {
        let state = engine.state();
        if state.is_advancing || state.feedback_visible {
            // The answered question stays attached until feedback clears,
            // but no new question is drawn
            assert_eq!(state.current_question.map(|r| r.id), Some(3));
        }
        engine.advance_by(100, &mut rng);
    }
    assert!(engine.state().current_question.is_some());
    assert!(!engine.state().feedback_visible);
}

#[test]
fn test_time_unit_scales_the_whole_sequence() {
    let mut rng = rng();
    let config = GameConfig {
        time_unit_ms: 10,
        ..GameConfig::default()
    };
    let mut engine = engine_at(0, "Biomass", config);
    engine.submit_answer(ResourceKind::Renewable);

    engine.advance_by(10, &mut rng);
    assert_eq!(engine.state().position, 2);
    engine.advance_by(20, &mut rng);
    assert!(!engine.state().feedback_visible);
    engine.advance_by(5, &mut rng);
    assert!(engine.state().current_question.is_some());
}

#[test]
fn test_answer_accepted_during_feedback_window() {
    let mut rng = rng();
    let mut engine = engine_at(0, "Solar Energy", GameConfig::default());
    engine.submit_answer(ResourceKind::Renewable);
    engine.advance_by(1500, &mut rng);

    // The controls are off while feedback covers the question...
    assert!(!engine.state().accepts_answers());
    // ...but the engine itself still takes the answer
    let events = engine.submit_answer(ResourceKind::Renewable);
    assert_eq!(events.len(), 1);
    assert_eq!(engine.state().questions_answered, 2);
    assert_eq!(engine.state().score, 20);

    engine.settle(&mut rng);
    assert_eq!(engine.state().position, 4);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_is_idempotent() {
    let mut engine = engine_at(17, "Oil", GameConfig::default());
    engine.submit_answer(ResourceKind::NonRenewable);

    engine.reset();
    let first = engine.snapshot();
    engine.reset();
    engine.reset();
    assert_eq!(engine.snapshot(), first);
    assert_eq!(first, GameState::new());
}

#[test]
fn test_reset_presents_question_after_one_unit() {
    let mut rng = rng();
    let mut engine = GameEngine::new(GameConfig::default());
    let events = engine.reset();
    assert_eq!(
        events,
        vec![EngineEvent::Reset {
            cancelled_transitions: 0
        }]
    );

    engine.advance_by(999, &mut rng);
    assert!(engine.state().current_question.is_none());
    let events = engine.advance_by(1, &mut rng);
    assert!(matches!(events[0], EngineEvent::QuestionPresented { .. }));
}

#[test]
fn test_reset_mid_transition_keeps_stale_transitions() {
    let mut rng = rng();
    let mut engine = engine_at(0, "Solar Energy", GameConfig::default());
    engine.submit_answer(ResourceKind::Renewable);

    engine.advance_by(500, &mut rng);
    engine.reset();
    assert_eq!(engine.state().position, 0);
    assert_eq!(engine.pending_transitions(), 3);

    // t=1000: the old answer's move lands on the freshly reset board
    let events = engine.advance_by(500, &mut rng);
    assert!(matches!(events[0], EngineEvent::Moved { from: 0, to: 2, .. }));
    assert_eq!(engine.state().position, 2);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().questions_answered, 0);

    // t=1500: the reset's question arrives
    engine.advance_by(500, &mut rng);
    assert!(engine.state().current_question.is_some());

    // t=3000: the old feedback timer wipes that question
    let events = engine.advance_by(1500, &mut rng);
    assert_eq!(
        events,
        vec![EngineEvent::FeedbackCleared {
            next_question_scheduled: true
        }]
    );
    assert!(engine.state().current_question.is_none());

    // t=3500: and queues a replacement
    engine.advance_by(500, &mut rng);
    assert!(engine.state().current_question.is_some());
    assert_eq!(engine.pending_transitions(), 0);
}

#[test]
fn test_reset_can_cancel_pending_transitions_when_configured() {
    let mut rng = rng();
    let config = GameConfig {
        cancel_pending_on_reset: true,
        ..GameConfig::default()
    };
    let mut engine = engine_at(0, "Solar Energy", config);
    engine.submit_answer(ResourceKind::Renewable);

    engine.advance_by(500, &mut rng);
    let events = engine.reset();
    assert_eq!(
        events,
        vec![EngineEvent::Reset {
            cancelled_transitions: 2
        }]
    );

    let events = engine.settle(&mut rng);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], EngineEvent::QuestionPresented { .. }));
    assert_eq!(engine.state().position, 0);
    assert!(!engine.state().feedback_visible);
}

// =============================================================================
// Redirect vs. next-question decision
// =============================================================================

#[test]
fn test_ladder_onto_finish_still_schedules_question_then_skips_it() {
    let mut rng = rng();
    let board = Board::new(vec![SpecialTile {
        position: 22,
        kind: TileKind::Ladder,
        destination: 24,
    }])
    .expect("valid board");
    let mut engine = engine_at(20, "Wind Energy", GameConfig::default()).with_board(board);

    engine.submit_answer(ResourceKind::Renewable);
    let events = engine.settle(&mut rng);

    assert!(events.contains(&EngineEvent::Moved {
        from: 20,
        landed: 22,
        to: 24,
        tile: Some(TileKind::Ladder),
    }));
    assert_eq!(engine.state().status, GameStatus::Won);
    // Pre-redirect cell 22 < 24, so a question is queued...
    assert!(events.contains(&EngineEvent::FeedbackCleared {
        next_question_scheduled: true
    }));
    // ...but generation refuses to run on a won game
    assert_eq!(events.last(), Some(&EngineEvent::QuestionSkipped));
    assert!(engine.state().current_question.is_none());
}

#[test]
fn test_snake_from_high_cell_schedules_next_question() {
    let mut rng = rng();
    let mut engine = engine_at(19, "Oil", GameConfig::default());
    engine.submit_answer(ResourceKind::Renewable);
    let events = engine.settle(&mut rng);

    assert!(events.contains(&EngineEvent::Moved {
        from: 19,
        landed: 20,
        to: 13,
        tile: Some(TileKind::Snake),
    }));
    assert!(matches!(
        events.last(),
        Some(EngineEvent::QuestionPresented { .. })
    ));
}
