//! Core Connect Four rules: board with gravity, players, win and tie
//! detection, and the per-game engine that ties them together.

mod board;
mod direction;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use direction::{Coord, Direction, RUN_LENGTH};
pub use engine::GameEngine;
pub use player::Player;
pub use state::{GameState, MoveResult, Placement};
