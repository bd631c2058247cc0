use crate::config::AppConfig;
use crate::error::EngineError;
use crate::game::{GameEngine, MoveResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

use super::messages;

pub struct App {
    engine: GameEngine,
    start_column: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, EngineError> {
        let engine = GameEngine::new(config.board.width, config.board.height)?;
        let start_column = config.first_selected_column().min(engine.width() - 1);
        Ok(App {
            engine,
            start_column,
            selected_column: start_column,
            should_quit: false,
            message: None,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_column(self.selected_column);
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Forward a column selection to the engine and describe the result.
    fn select_column(&mut self, column: usize) {
        match self.engine.drop_piece(column) {
            MoveResult::Accepted { outcome, .. } => {
                self.message = messages::outcome_message(outcome);
            }
            MoveResult::Rejected(reason) => {
                self.message = Some(messages::rejection_message(&reason));
            }
        }
    }

    fn new_game(&mut self) {
        match GameEngine::new(self.engine.width(), self.engine.height()) {
            Ok(engine) => {
                self.engine = engine;
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            // Dimensions were already accepted once; keep the old game.
            Err(err) => debug!(%err, "could not start a new game"),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}
