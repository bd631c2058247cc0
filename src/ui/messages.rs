use crate::error::MoveError;
use crate::game::{GameEngine, GameState};

/// End-of-game notice, `None` while the game is still running
pub fn outcome_message(state: GameState) -> Option<String> {
    match state {
        GameState::InProgress => None,
        GameState::Win(player) => Some(format!("{player} won!")),
        GameState::Tie => Some("Tied".to_string()),
    }
}

pub fn rejection_message(reason: &MoveError) -> String {
    match reason {
        MoveError::InvalidColumn { .. } => "Invalid column!".to_string(),
        MoveError::ColumnFull { .. } => "Column is full!".to_string(),
        MoveError::GameAlreadyOver => "Game over! Press 'r' to restart.".to_string(),
    }
}

/// Header line describing whose turn it is
pub fn status_line(engine: &GameEngine) -> String {
    if engine.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("Current: {}", engine.current_player())
    }
}
