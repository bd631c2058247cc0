use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest board width or height the terminal UI will lay out.
pub const MAX_DIMENSION: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the cursor starts on; the middle column when unset
    pub first_selected_column: Option<usize>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.board.width), ("height", self.board.height)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "board.{name} must be in [1, {MAX_DIMENSION}]"
                )));
            }
        }
        if let Some(col) = self.ui.first_selected_column {
            if col >= self.board.width {
                return Err(ConfigError::Validation(
                    "ui.first_selected_column must be < board.width".into(),
                ));
            }
        }
        Ok(())
    }

    /// Starting cursor column for the terminal UI.
    pub fn first_selected_column(&self) -> usize {
        self.ui
            .first_selected_column
            .unwrap_or(self.board.width / 2)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
