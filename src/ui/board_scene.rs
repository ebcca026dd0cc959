//! Board rendering: the 25-cell track laid out as a 5×5 grid.

use super::game_common::render_panel_frame;
use super::throbber::player_token;
use crate::core::board::{Board, TileKind};
use crate::core::constants::{BOARD_CELLS, BOARD_COLUMNS, FINISH_CELL, START_CELL};
use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 4;

/// Label printed in the top line of a cell.
pub fn cell_label(cell: u8) -> String {
    match cell {
        START_CELL => "START".to_string(),
        FINISH_CELL => "WIN!".to_string(),
        n => n.to_string(),
    }
}

/// Marker for a special tile, e.g. `⇑14` for a ladder up to 14.
pub fn tile_marker(board: &Board, cell: u8) -> Option<String> {
    board.tile_at(cell).map(|t| match t.kind {
        TileKind::Ladder => format!("⇑{}", t.destination),
        TileKind::Snake => format!("⇓{}", t.destination),
    })
}

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Ladder => Color::Green,
        TileKind::Snake => Color::Red,
    }
}

pub fn render_board(frame: &mut Frame, area: Rect, state: &GameState, board: &Board) {
    let inner = render_panel_frame(frame, area, " Game Board ", Color::Blue);

    let rows = BOARD_CELLS / BOARD_COLUMNS;
    let mut row_constraints: Vec<Constraint> =
        (0..rows).map(|_| Constraint::Length(CELL_HEIGHT)).collect();
    row_constraints.push(Constraint::Length(1));
    row_constraints.push(Constraint::Min(0));

    let grid_width = CELL_WIDTH * BOARD_COLUMNS as u16;
    let grid_area = Rect {
        x: inner.x + inner.width.saturating_sub(grid_width) / 2,
        width: grid_width.min(inner.width),
        ..inner
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(grid_area);

    for row in 0..rows {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                (0..BOARD_COLUMNS)
                    .map(|_| Constraint::Length(CELL_WIDTH))
                    .collect::<Vec<_>>(),
            )
            .split(v_chunks[row as usize]);

        for col in 0..BOARD_COLUMNS {
            let cell = row * BOARD_COLUMNS + col;
            render_cell(frame, h_chunks[col as usize], cell, state, board);
        }
    }

    render_legend(frame, v_chunks[rows as usize], inner);
}

fn render_cell(frame: &mut Frame, area: Rect, cell: u8, state: &GameState, board: &Board) {
    let is_player_here = state.position == cell;

    let base_color = match cell {
        START_CELL => Color::Green,
        FINISH_CELL => Color::Yellow,
        _ => Color::LightBlue,
    };
    let border_style = if is_player_here {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(base_color)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Line::from(Span::styled(
        cell_label(cell),
        Style::default().fg(base_color).add_modifier(Modifier::BOLD),
    ));

    let mut marks = Vec::new();
    if is_player_here {
        marks.push(Span::styled(
            player_token(state.is_advancing).to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let (Some(marker), Some(tile)) = (tile_marker(board, cell), board.tile_at(cell)) {
        if !marks.is_empty() {
            marks.push(Span::raw(" "));
        }
        marks.push(Span::styled(marker, Style::default().fg(tile_color(tile.kind))));
    }

    let text = Paragraph::new(vec![label, Line::from(marks)]).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

fn render_legend(frame: &mut Frame, area: Rect, panel: Rect) {
    let legend = Line::from(vec![
        Span::styled("⇑ ", Style::default().fg(tile_color(TileKind::Ladder))),
        Span::styled(
            TileKind::Ladder.label(),
            Style::default().fg(tile_color(TileKind::Ladder)),
        ),
        Span::raw("   "),
        Span::styled("⇓ ", Style::default().fg(tile_color(TileKind::Snake))),
        Span::styled(
            TileKind::Snake.label(),
            Style::default().fg(tile_color(TileKind::Snake)),
        ),
    ]);
    let legend_area = Rect {
        x: panel.x,
        width: panel.width,
        ..area
    };
    frame.render_widget(
        Paragraph::new(legend).alignment(Alignment::Center),
        legend_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::SpecialTile;

    #[test]
    fn test_cell_labels() {
        assert_eq!(cell_label(0), "START");
        assert_eq!(cell_label(24), "WIN!");
        assert_eq!(cell_label(13), "13");
    }

    #[test]
    fn test_tile_markers() {
        let board = Board::default();
        assert_eq!(tile_marker(&board, 7).as_deref(), Some("⇑14"));
        assert_eq!(tile_marker(&board, 12).as_deref(), Some("⇓5"));
        assert_eq!(tile_marker(&board, 18).as_deref(), Some("⇑22"));
        assert_eq!(tile_marker(&board, 20).as_deref(), Some("⇓13"));
        assert!(tile_marker(&board, 8).is_none());
    }

    #[test]
    fn test_tile_markers_follow_custom_board() {
        let board = Board::new(vec![SpecialTile {
            position: 22,
            kind: TileKind::Ladder,
            destination: 24,
        }])
        .expect("valid board");
        assert_eq!(tile_marker(&board, 22).as_deref(), Some("⇑24"));
        assert!(tile_marker(&board, 7).is_none());
        assert!(tile_marker(&board, 12).is_none());
    }
}
