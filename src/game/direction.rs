/// Number of same-player cells in a row needed to win.
pub const RUN_LENGTH: usize = 4;

/// A board coordinate as `(row, column)`, row 0 at the top.
pub type Coord = (usize, usize);

/// The four directions a winning run can take, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Step as `(row delta, column delta)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Move `steps` times from `(row, col)`, or `None` if that leaves the board.
    pub fn step(
        self,
        (row, col): Coord,
        steps: isize,
        width: usize,
        height: usize,
    ) -> Option<Coord> {
        let (dr, dc) = self.delta();
        let r = row as isize + dr * steps;
        let c = col as isize + dc * steps;
        if r < 0 || c < 0 || r >= height as isize || c >= width as isize {
            return None;
        }
        Some((r as usize, c as usize))
    }

    /// The run of four coordinates starting at `start`.
    ///
    /// Returns `None` when any coordinate of the run is out of bounds, so a
    /// partial run never reaches the board indexer.
    pub fn run_from(
        self,
        start: Coord,
        width: usize,
        height: usize,
    ) -> Option<[Coord; RUN_LENGTH]> {
        let mut run = [start; RUN_LENGTH];
        for (i, slot) in run.iter_mut().enumerate() {
            *slot = self.step(start, i as isize, width, height)?;
        }
        Some(run)
    }
}
