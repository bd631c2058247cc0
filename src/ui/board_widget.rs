use crate::game::{Board, Cell, Player};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Occupied(Player::One) => (" \u{25cf} ", Color::Red),
        Cell::Occupied(Player::Two) => (" \u{25cf} ", Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color))
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// One line per board row, top row first, three columns per cell.
pub fn board_lines(board: &Board) -> Vec<Line<'static>> {
    (0..board.height())
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..board.width())
                .filter_map(|col| board.get(row, col))
                .map(cell_span)
                .collect();
            Line::from(spans)
        })
        .collect()
}
