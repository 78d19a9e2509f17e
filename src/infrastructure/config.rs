//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the configuration history file
    pub history_path: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(".actionforge/history.json"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Default configuration with environment overrides applied:
    /// `ACTIONFORGE_HISTORY` for the history path, `ACTIONFORGE_LOG` for
    /// the log level.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("ACTIONFORGE_HISTORY") {
            config.history_path = PathBuf::from(path);
        }
        if let Ok(level) = std::env::var("ACTIONFORGE_LOG") {
            config.log_level = level;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(
            config.history_path,
            PathBuf::from(".actionforge/history.json")
        );
        assert_eq!(config.log_level, "info");
    }
}
