pub mod board_scene;
pub mod game_common;
pub mod question_panel;
mod throbber;

use crate::core::board::Board;
use crate::core::game_state::GameState;
use game_common::{render_status_bar, render_win_overlay};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function. Reads the engine state and the board it plays on.
pub fn draw_ui(frame: &mut Frame, state: &GameState, board: &Board) {
    let size = frame.size();

    if state.has_won() {
        render_win_overlay(frame, size, state.score, state.questions_answered);
        return;
    }

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Stats
            Constraint::Min(0),    // Board + question
            Constraint::Length(2), // Status bar
        ])
        .split(size);

    draw_header(frame, v_chunks[0]);
    draw_stats(frame, v_chunks[1], state);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[2]);

    board_scene::render_board(frame, h_chunks[0], state, board);
    question_panel::render_question_panel(frame, h_chunks[1], state);
    draw_footer(frame, v_chunks[3], state);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Resource Explorer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Learn about renewable and non-renewable resources!",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_stats(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = [
        ("Score", state.score.to_string(), Color::Magenta),
        ("Position", state.position.to_string(), Color::Blue),
        ("Questions", state.questions_answered.to_string(), Color::Green),
    ];
    for (chunk, (label, value, color)) in chunks.iter().zip(stats) {
        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text = Paragraph::new(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(text, *chunk);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &GameState) {
    let answers_enabled = state.accepts_answers();
    let status = if state.is_advancing {
        "Moving..."
    } else if state.feedback_visible {
        "Get ready for the next question"
    } else if state.current_question.is_some() {
        "Your turn"
    } else {
        "Waiting for a question"
    };
    render_status_bar(
        frame,
        area,
        status,
        Color::Yellow,
        &[
            ("[R]", "Renewable", answers_enabled),
            ("[N]", "Non-renewable", answers_enabled),
            ("[X]", "Reset Game", true),
            ("[Q]", "Quit", true),
        ],
    );
}
