//! Shared UI components: status bar, win overlay, panel frames.

use crate::catalog::CardColor;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[R]", "Renewable")]`.
/// Disabled controls are drawn dimmed.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str, bool)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action, enabled)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            let (key_color, action_color) = if *enabled {
                (Color::White, Color::Gray)
            } else {
                (Color::DarkGray, Color::DarkGray)
            };
            spans.push(Span::styled(*key, Style::default().fg(key_color)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(action_color),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a full-screen overlay announcing the win.
pub fn render_win_overlay(frame: &mut Frame, area: Rect, score: u32, questions_answered: u32) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height: u16 = 9;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;

    let lines = vec![
        Line::from(Span::styled(
            "You Won!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Amazing job learning about resources!",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", score),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" points", Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            format!("Questions answered: {}", questions_answered),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[X] Play Again   [Q] Quit",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(
            inner.x,
            y_offset,
            inner.width,
            content_height.min(inner.height),
        ),
    );
}

/// Bordered panel with a title. Returns the inner Rect.
pub fn render_panel_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Terminal colour for a resource card.
pub fn card_color(color: CardColor) -> Color {
    match color {
        CardColor::Yellow => Color::Yellow,
        CardColor::LightBlue => Color::LightBlue,
        CardColor::Blue => Color::Blue,
        CardColor::Gray => Color::Gray,
        CardColor::Orange => Color::Rgb(255, 140, 0),
        CardColor::Green => Color::Green,
        CardColor::LightGreen => Color::LightGreen,
        CardColor::Black => Color::DarkGray,
        CardColor::Red => Color::LightRed,
        CardColor::Purple => Color::Magenta,
    }
}
