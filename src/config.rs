//! Runtime settings
//!
//! Read from a JSON file named by `DETECTIVE_QUEST_CONFIG`; every field is
//! optional and falls back to its default.

use crate::{GameError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "DETECTIVE_QUEST_CONFIG";

/// Environment variable holding the log file path
pub const LOG_ENV: &str = "DETECTIVE_QUEST_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Accusations are cut to this many characters
    pub accusation_max_len: usize,

    /// Where to write logs. No file, no logs.
    pub log_file: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            accusation_max_len: 49,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Load from the file named by [`CONFIG_ENV`], or defaults if unset.
    ///
    /// [`LOG_ENV`] overrides `log_file` either way.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(log) = std::env::var_os(LOG_ENV) {
            config.log_file = Some(PathBuf::from(log));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), GameError> {
        if self.accusation_max_len == 0 {
            return Err(GameError::Config("accusation_max_len must be at least 1".to_string()));
        }
        Ok(())
    }
}
