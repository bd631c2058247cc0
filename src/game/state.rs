use super::Player;
use crate::error::MoveError;

/// Where a game stands. `Win` and `Tie` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Win(Player),
    Tie,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// The cell filled by an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Result of a single `drop_piece` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// One cell was filled and the game moved to `outcome`.
    Accepted {
        placement: Placement,
        outcome: GameState,
    },
    /// Nothing changed. The reason is for diagnostics only.
    Rejected(MoveError),
}

impl MoveResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    pub fn placement(&self) -> Option<Placement> {
        match self {
            MoveResult::Accepted { placement, .. } => Some(*placement),
            MoveResult::Rejected(_) => None,
        }
    }

    /// Outcome after an accepted move, `None` when rejected
    pub fn outcome(&self) -> Option<GameState> {
        match self {
            MoveResult::Accepted { outcome, .. } => Some(*outcome),
            MoveResult::Rejected(_) => None,
        }
    }
}
