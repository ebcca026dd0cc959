//! Question card, answer feedback, and the how-to-play panel.

use super::game_common::{card_color, render_panel_frame};
use super::throbber::spinner_char;
use crate::catalog::{Resource, ResourceKind};
use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// What the question panel is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<'a> {
    Feedback { text: &'a str, correct: bool },
    Question(Resource),
    Loading,
}

/// Pick the panel content. Feedback wins over the question.
pub fn panel_view(state: &GameState) -> PanelView<'_> {
    if state.feedback_visible {
        PanelView::Feedback {
            text: &state.feedback_text,
            correct: state.last_answer_correct == Some(true),
        }
    } else if let Some(resource) = state.current_question {
        PanelView::Question(resource)
    } else {
        PanelView::Loading
    }
}

pub const HOW_TO_PLAY: [&str; 6] = [
    "Classify each resource as renewable or non-renewable",
    "Correct answers move you 2 spaces forward (+10 points)",
    "Wrong answers move you 1 space forward (keep learning!)",
    "Land on renewable ladders to climb up!",
    "Avoid non-renewable snakes that slide you down!",
    "Reach the finish line to win!",
];

pub fn render_question_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(8)])
        .split(area);

    let inner = render_panel_frame(frame, chunks[0], " Question ", Color::Magenta);
    match panel_view(state) {
        PanelView::Feedback { text, correct } => render_feedback(frame, inner, text, correct),
        PanelView::Question(resource) => {
            render_question(frame, inner, &resource, state.is_advancing)
        }
        PanelView::Loading => render_loading(frame, inner),
    }

    render_how_to_play(frame, chunks[1]);
}

fn render_question(frame: &mut Frame, area: Rect, resource: &Resource, disabled: bool) {
    let color = card_color(resource.color);
    let answer_style = |kind: ResourceKind| {
        let fg = match (disabled, kind) {
            (true, _) => Color::DarkGray,
            (false, ResourceKind::Renewable) => Color::Green,
            (false, ResourceKind::NonRenewable) => Color::Red,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            "Classify this resource!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(resource.glyph, Style::default().fg(color))),
        Line::from(Span::styled(
            resource.name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Is this resource renewable or non-renewable?",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[R] {}", ResourceKind::Renewable.button_label()),
                answer_style(ResourceKind::Renewable),
            ),
            Span::raw("    "),
            Span::styled(
                format!("[N] {}", ResourceKind::NonRenewable.button_label()),
                answer_style(ResourceKind::NonRenewable),
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_feedback(frame: &mut Frame, area: Rect, text: &str, correct: bool) {
    let color = if correct { Color::Green } else { Color::Yellow };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            spinner_char().to_string(),
            Style::default().fg(Color::Magenta),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            spinner_char().to_string(),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            "Loading next question...",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_how_to_play(frame: &mut Frame, area: Rect) {
    let inner = render_panel_frame(frame, area, " How to Play ", Color::DarkGray);
    let lines: Vec<Line> = HOW_TO_PLAY
        .iter()
        .map(|rule| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::styled(*rule, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_panel_view_loading_when_idle() {
        assert_eq!(panel_view(&GameState::new()), PanelView::Loading);
    }

    #[test]
    fn test_panel_view_question() {
        let mut state = GameState::new();
        let oil = catalog::find_by_name("Oil").expect("Oil");
        state.current_question = Some(oil);
        assert_eq!(panel_view(&state), PanelView::Question(oil));
    }

    #[test]
    fn test_feedback_takes_priority() {
        let mut state = GameState::new();
        state.current_question = catalog::find_by_name("Oil");
        state.feedback_visible = true;
        state.feedback_text = "Oops! Oil is actually nonrenewable. Keep learning! 💪".to_string();
        state.last_answer_correct = Some(false);
        assert!(matches!(
            panel_view(&state),
            PanelView::Feedback { correct: false, .. }
        ));

        state.last_answer_correct = Some(true);
        assert!(matches!(
            panel_view(&state),
            PanelView::Feedback { correct: true, .. }
        ));
    }

    #[test]
    fn test_feedback_verdict_ignores_message_wording() {
        let mut state = GameState::new();
        state.feedback_visible = true;
        state.feedback_text = "Correctly classified? Not quite.".to_string();
        state.last_answer_correct = Some(false);
        assert_eq!(
            panel_view(&state),
            PanelView::Feedback {
                text: "Correctly classified? Not quite.",
                correct: false,
            }
        );
    }
}
