//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Player, Position, Square};

use super::app::App;

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders title, board, status line, and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title, board, status, help] = screen_layout(frame.area());

    let title_text = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title_text, title);

    draw_board(frame, board, app);

    let status_text = Paragraph::new(app.game().status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status);

    let help_text = Paragraph::new("arrows move · 1-9/enter place · r reset · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help_text, help);
}

/// Finds the board cell under a terminal coordinate.
///
/// `area` is the full frame area used for the last draw.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let [_, board, _, _] = screen_layout(area);
    let cells = cell_areas(board);
    Position::ALL.into_iter().zip(cells).find_map(|(pos, cell)| {
        let inside = column >= cell.x
            && column < cell.x + cell.width
            && row >= cell.y
            && row < cell.y + cell.height;
        inside.then_some(pos)
    })
}

fn screen_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Cell rectangles in index order, centered in `area`.
fn cell_areas(area: Rect) -> [Rect; 9] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        cells[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area);
    }
    cells
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let grid = Style::default().fg(Color::DarkGray);

    for sep in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let line = Rect::new(board.x, board.y + sep, board.width, 1).intersection(area);
        frame.render_widget(Paragraph::new("─".repeat(BOARD_WIDTH as usize)).style(grid), line);
    }
    for sep in [CELL_WIDTH, CELL_WIDTH * 2 + 1] {
        let column = Rect::new(board.x + sep, board.y, 1, board.height).intersection(area);
        let bars: Vec<Line> = (0..BOARD_HEIGHT)
            .map(|i| Line::from(if i == CELL_HEIGHT || i == CELL_HEIGHT * 2 + 1 { "┼" } else { "│" }))
            .collect();
        frame.render_widget(Paragraph::new(bars).style(grid), column);
    }

    let winning = app.game().outcome().line();
    for (pos, cell) in Position::ALL.into_iter().zip(cell_areas(area)) {
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            Some(Style::default().bg(Color::Green).fg(Color::Black))
        } else if pos == app.cursor() && winning.is_none() {
            Some(Style::default().bg(Color::White).fg(Color::Black))
        } else {
            None
        };
        draw_cell(frame, cell, app, pos, highlight);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlight: Option<Style>) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty if app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match highlight {
        Some(h) => base_style.patch(h),
        None => base_style,
    };

    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(highlight.unwrap_or_default());

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_do_not_overlap() {
        let cells = cell_areas(Rect::new(0, 0, 80, 24));
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_at_finds_each_cell() {
        let area = Rect::new(0, 0, 80, 24);
        let [_, board, _, _] = screen_layout(area);
        for (pos, cell) in Position::ALL.into_iter().zip(cell_areas(board)) {
            assert_eq!(cell_at(area, cell.x + 1, cell.y + 1), Some(pos));
        }
    }

    #[test]
    fn test_click_on_grid_line_misses() {
        let area = Rect::new(0, 0, 80, 24);
        let [_, board, _, _] = screen_layout(area);
        let top_left = cell_areas(board)[0];
        assert_eq!(cell_at(area, top_left.x + CELL_WIDTH, top_left.y), None);
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
