//! Terminal front end: turns key presses into column selections for the
//! engine and renders the board and outcome it reports back.

mod app;
pub mod board_widget;
mod game_view;
pub mod messages;

pub use app::App;
