use tracing::{debug, info, instrument};

use super::{Board, Cell, GameState, MoveResult, Placement, Player};
use crate::error::{EngineError, MoveError};

/// One Connect Four game: board, whose turn it is, and the outcome so far.
///
/// Each instance is a single game. It is not shared between callers; wrap it
/// in whatever per-game ownership the caller needs. A new game means a new
/// engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    state: GameState,
}

impl GameEngine {
    /// Create a game on an empty `width` x `height` board, player one to move.
    #[instrument]
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let board = Board::new(width, height)?;
        debug!("new game created");
        Ok(GameEngine {
            board,
            current_player: Player::One,
            state: GameState::InProgress,
        })
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Invalid columns, full columns and finished games are rejected without
    /// touching any state.
    pub fn drop_piece(&mut self, column: usize) -> MoveResult {
        match self.apply(column) {
            Ok((placement, outcome)) => MoveResult::Accepted { placement, outcome },
            Err(reason) => {
                debug!(column, %reason, "move rejected");
                MoveResult::Rejected(reason)
            }
        }
    }

    fn apply(&mut self, column: usize) -> Result<(Placement, GameState), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        let placement = Placement { row, column, player };
        debug!(row, column, player = player.id(), "piece placed");

        // The previous position had no win, so any new run passes through
        // this piece.
        if self.board.check_win_at(row, column) {
            self.state = GameState::Win(player);
            info!(player = player.id(), "game won");
        } else if self.board.is_top_row_full() {
            self.state = GameState::Tie;
            info!("game tied");
        } else {
            self.current_player = player.other();
        }

        Ok((placement, self.state))
    }

    /// Get the cell at (row, column), row 0 being the top
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.get(row, column)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns that would accept a piece right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine {
            board: Board::default(),
            current_player: Player::One,
            state: GameState::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use proptest::prelude::*;

    /// Plays a legal 42-move game that fills the board without a winner.
    const TIE_SEQUENCE: [usize; 42] = [
        1, 3, 1, 1, 1, 1, 1, 3, 5, 2, 3, 0, 4, 3, 2, 5, 5, 2, 6, 0, 6, 4, 0, 0, 0, 4, 2, 6, 3,
        0, 5, 4, 2, 2, 4, 4, 6, 5, 5, 6, 6, 3,
    ];

    fn occupied(engine: &GameEngine) -> usize {
        let mut count = 0;
        for row in 0..engine.height() {
            for col in 0..engine.width() {
                if engine.get(row, col) != Some(Cell::Empty) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new(7, 6).unwrap();
        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.state(), GameState::InProgress);
        assert!(!engine.is_terminal());
        assert_eq!((engine.width(), engine.height()), (7, 6));
        assert_eq!(engine.legal_columns().len(), 7);
        assert_eq!(occupied(&engine), 0);
        assert_eq!(engine, GameEngine::default());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            GameEngine::new(0, 6),
            Err(EngineError::InvalidDimensions { width: 0, height: 6 })
        );
        assert!(GameEngine::new(7, 0).is_err());
    }

    #[test]
    fn test_new_accepts_large_dimensions() {
        let engine = GameEngine::new(65, 6).unwrap();
        assert_eq!((engine.width(), engine.height()), (65, 6));
        assert_eq!(engine.legal_columns().len(), 65);
    }

    #[test]
    fn test_drop_piece() {
        let mut engine = GameEngine::default();
        let result = engine.drop_piece(3);

        assert_eq!(
            result,
            MoveResult::Accepted {
                placement: Placement {
                    row: 5,
                    column: 3,
                    player: Player::One
                },
                outcome: GameState::InProgress,
            }
        );
        assert_eq!(engine.current_player(), Player::Two);
        assert_eq!(engine.get(5, 3), Some(Cell::Occupied(Player::One)));
    }

    #[test]
    fn test_horizontal_win_sequence() {
        let mut engine = GameEngine::default();
        let outcomes: Vec<_> = [0, 0, 1, 1, 2, 2, 3]
            .into_iter()
            .map(|col| engine.drop_piece(col).outcome())
            .collect();

        let mut expected = vec![Some(GameState::InProgress); 6];
        expected.push(Some(GameState::Win(Player::One)));
        assert_eq!(outcomes, expected);
        assert_eq!(engine.state(), GameState::Win(Player::One));
        // No switch after a win
        assert_eq!(engine.current_player(), Player::One);
    }

    #[test]
    fn test_diagonal_win_for_player_two() {
        let mut engine = GameEngine::default();
        let moves = [1, 0, 2, 1, 3, 2, 3, 2, 3];
        for col in moves {
            assert_eq!(engine.drop_piece(col).outcome(), Some(GameState::InProgress));
        }

        let result = engine.drop_piece(3);
        assert_eq!(result.outcome(), Some(GameState::Win(Player::Two)));
        assert_eq!(
            result.placement(),
            Some(Placement {
                row: 2,
                column: 3,
                player: Player::Two
            })
        );
        assert_eq!(
            engine.board().find_winning_run(Player::Two),
            Some([(2, 3), (3, 2), (4, 1), (5, 0)])
        );
    }

    #[test]
    fn test_staircase_win_for_each_last_cell() {
        // Each game ends with player two filling a different cell of the
        // staircase (5,0), (4,1), (3,2), (2,3).
        let games: [(&[usize], usize); 4] = [
            (&[1, 6, 2, 1, 2, 2, 3, 6, 3, 5, 3, 3, 5, 0], 5),
            (&[1, 0, 2, 6, 2, 2, 3, 6, 3, 5, 3, 3, 5, 1], 4),
            (&[1, 0, 2, 1, 2, 6, 3, 6, 3, 5, 3, 3, 5, 2], 3),
            (&[1, 0, 2, 1, 2, 2, 3, 6, 3, 6, 3, 3], 2),
        ];

        for (moves, last_row) in games {
            let mut engine = GameEngine::default();
            let (&last_col, opening) = moves.split_last().unwrap();
            for &col in opening {
                assert_eq!(engine.drop_piece(col).outcome(), Some(GameState::InProgress));
            }

            assert_eq!(
                engine.drop_piece(last_col),
                MoveResult::Accepted {
                    placement: Placement {
                        row: last_row,
                        column: last_col,
                        player: Player::Two
                    },
                    outcome: GameState::Win(Player::Two),
                }
            );
            assert!(engine.board().check_win_at(last_row, last_col));
            assert_eq!(
                engine.board().find_winning_run(Player::Two),
                Some([(2, 3), (3, 2), (4, 1), (5, 0)])
            );
        }
    }

    #[test]
    fn test_tie_only_when_top_row_fills() {
        let mut engine = GameEngine::default();
        for (i, &col) in TIE_SEQUENCE.iter().enumerate() {
            let result = engine.drop_piece(col);
            if i + 1 < TIE_SEQUENCE.len() {
                assert_eq!(result.outcome(), Some(GameState::InProgress), "move {i}");
                assert!(!engine.board().is_top_row_full());
            } else {
                assert_eq!(result.outcome(), Some(GameState::Tie));
            }
        }
        assert!(engine.board().is_full());
        assert!(!engine.board().check_for_win(Player::One));
        assert!(!engine.board().check_for_win(Player::Two));
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut engine = GameEngine::default();
        for _ in 0..DEFAULT_HEIGHT {
            assert!(engine.drop_piece(0).is_accepted());
        }
        let before = engine.clone();

        assert_eq!(
            engine.drop_piece(0),
            MoveResult::Rejected(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(
            engine.drop_piece(DEFAULT_WIDTH),
            MoveResult::Rejected(MoveError::InvalidColumn {
                column: DEFAULT_WIDTH,
                width: DEFAULT_WIDTH
            })
        );
        assert_eq!(engine, before);
        assert!(!engine.legal_columns().contains(&0));
    }

    #[test]
    fn test_terminal_immutability() {
        let mut engine = GameEngine::default();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            engine.drop_piece(col);
        }
        assert!(engine.is_terminal());
        let before = engine.clone();

        for col in 0..DEFAULT_WIDTH + 2 {
            assert_eq!(
                engine.drop_piece(col),
                MoveResult::Rejected(MoveError::GameAlreadyOver)
            );
        }
        assert_eq!(engine, before);
        assert!(engine.legal_columns().is_empty());
    }

    #[test]
    fn test_single_cell_board_ties() {
        let mut engine = GameEngine::new(1, 1).unwrap();
        assert_eq!(engine.drop_piece(0).outcome(), Some(GameState::Tie));
        assert_eq!(engine.current_player(), Player::One);
    }

    proptest! {
        #[test]
        fn prop_moves_keep_invariants(
            width in 1usize..=9,
            height in 1usize..=8,
            moves in prop::collection::vec(0usize..11, 0..120),
        ) {
            let mut engine = GameEngine::new(width, height).unwrap();

            for col in moves {
                let before = engine.clone();
                let expected_row = before.board().find_spot(col);
                let result = engine.drop_piece(col);

                match result {
                    MoveResult::Rejected(_) => {
                        prop_assert_eq!(&engine, &before);
                    }
                    MoveResult::Accepted { placement, outcome } => {
                        prop_assert!(!before.is_terminal());
                        prop_assert_eq!(Some(placement.row), expected_row);
                        prop_assert_eq!(placement.player, before.current_player());
                        prop_assert_eq!(occupied(&engine), occupied(&before) + 1);
                        for row in placement.row + 1..height {
                            prop_assert_ne!(engine.get(row, col), Some(Cell::Empty));
                        }
                        prop_assert!(engine.board().is_settled());

                        // Incremental check agrees with the full scan
                        let exhaustive = engine.board().check_for_win(placement.player);
                        prop_assert_eq!(
                            engine.board().check_win_at(placement.row, placement.column),
                            exhaustive
                        );

                        match outcome {
                            GameState::InProgress => {
                                prop_assert_eq!(engine.current_player(), placement.player.other());
                            }
                            GameState::Win(p) => {
                                prop_assert_eq!(p, placement.player);
                                prop_assert_eq!(engine.current_player(), placement.player);
                            }
                            GameState::Tie => {
                                prop_assert!(!exhaustive);
                                prop_assert!(engine.board().is_full());
                                prop_assert_eq!(engine.current_player(), placement.player);
                            }
                        }
                        prop_assert_eq!(engine.state(), outcome);
                    }
                }
            }
        }
    }
}
