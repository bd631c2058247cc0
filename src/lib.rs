//! # Connect Four
//!
//! Rules engine for two-player Connect Four, plus a small terminal front end.
//! The engine owns a board of configurable size, applies gravity when a piece
//! is dropped, and reports win or tie after every move. Front ends only send
//! column selections in and render the results that come back.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, engine
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
