//! Game configuration
//!
//! Settings that shape how the game is launched and presented. None of these
//! touch combat rules: stats live in the roster, and the exchange formula is
//! fixed.

use crate::core::error::{ArenaError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for the game binaries
///
/// Loaded from a TOML file when one is given, otherwise built from defaults.
/// Command-line flags are applied on top by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === ROSTER ===
    /// Optional roster file replacing the built-in catalog
    ///
    /// When unset the four built-in fighters are used. A roster file must
    /// still satisfy the roster validation rules (unique ids, positive stats).
    pub roster_path: Option<PathBuf>,

    // === LOGGING ===
    /// Default tracing directive, used when `RUST_LOG` is not set
    ///
    /// `jedi_arena=debug` shows every accepted transition;
    /// `jedi_arena=trace` also shows ignored input.
    pub log_filter: String,

    // === PRESENTATION ===
    /// Whether the terminal front end prints the exchange log under the fight
    pub show_exchange_log: bool,

    /// Maximum exchange log entries kept by the terminal front end
    ///
    /// Older entries are evicted first. Must be at least 1.
    pub max_log_entries: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            log_filter: "jedi_arena=info".to_string(),
            show_exchange_log: true,
            max_log_entries: 8,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_log_entries == 0 {
            return Err(ArenaError::InvalidConfig(
                "max_log_entries must be at least 1".into(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ArenaError::InvalidConfig("log_filter must not be empty".into()));
        }

        Ok(())
    }
}
