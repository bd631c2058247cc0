use std::fmt;

use super::direction::{Coord, Direction, RUN_LENGTH};
use super::player::Player;
use crate::error::{EngineError, MoveError};

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A `height` x `width` grid. Row 0 is the top, row `height - 1` the bottom.
///
/// Cells are only ever filled through [`Board::drop_piece`], so every column
/// fills strictly bottom-up and an occupied cell always sits on an occupied
/// cell (or the floor).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let invalid = EngineError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid)?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, `None` when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    fn cell(&self, (row, col): Coord) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.cell((0, col)).is_empty()
    }

    /// Lowest empty row in `col`, scanning up from the bottom
    pub fn find_spot(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cell((row, col)).is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        let row = self
            .find_spot(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row * self.width + col] = Cell::Occupied(player);
        debug_assert!(self.is_settled());
        Ok(row)
    }

    /// Whether every cell in row 0 is occupied.
    ///
    /// Since columns fill bottom-up, a full top row means a full board.
    pub fn is_top_row_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// True when no occupied cell floats above an empty one.
    pub fn is_settled(&self) -> bool {
        (0..self.width).all(|col| {
            let mut seen_empty_below = false;
            for row in (0..self.height).rev() {
                match self.cell((row, col)) {
                    Cell::Empty => seen_empty_below = true,
                    Cell::Occupied(_) if seen_empty_below => return false,
                    Cell::Occupied(_) => {}
                }
            }
            true
        })
    }

    /// Scan every cell for a run of four belonging to `player`.
    ///
    /// Row-major over start cells, then [`Direction::ALL`] order; stops at
    /// the first winning run.
    pub fn check_for_win(&self, player: Player) -> bool {
        self.find_winning_run(player).is_some()
    }

    /// The first winning run for `player` in scan order, if any
    pub fn find_winning_run(&self, player: Player) -> Option<[Coord; RUN_LENGTH]> {
        let target = Cell::Occupied(player);
        for row in 0..self.height {
            for col in 0..self.width {
                for dir in Direction::ALL {
                    let Some(run) = dir.run_from((row, col), self.width, self.height) else {
                        continue;
                    };
                    if run.iter().all(|&coord| self.cell(coord) == target) {
                        return Some(run);
                    }
                }
            }
        }
        None
    }

    /// Check if the piece at (row, col) is part of a run of four.
    ///
    /// Only looks at the four lines through that cell. On any board reached
    /// by play this agrees with [`Board::check_for_win`] for the player who
    /// just moved, since a win must include the newest piece.
    pub fn check_win_at(&self, row: usize, col: usize) -> bool {
        let Some(Cell::Occupied(player)) = self.get(row, col) else {
            return false;
        };
        Direction::ALL
            .iter()
            .any(|&dir| self.line_length(dir, (row, col), player) >= RUN_LENGTH)
    }

    /// Contiguous `player` cells along `dir` through `origin`, both ways.
    fn line_length(&self, dir: Direction, origin: Coord, player: Player) -> usize {
        let target = Cell::Occupied(player);
        let mut count = 1;
        for sign in [1, -1] {
            let mut steps = sign;
            while let Some(coord) = dir.step(origin, steps, self.width, self.height) {
                if self.cell(coord) != target {
                    break;
                }
                count += 1;
                steps += sign;
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = match self.cell((row, col)) {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => '1',
                    Cell::Occupied(Player::Two) => '2',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
