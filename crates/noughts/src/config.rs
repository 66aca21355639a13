//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::GameMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// Game mode at startup.
    #[serde(default)]
    mode: GameMode,

    /// Bot seed. Entropy-seeded when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the command help when the game starts.
    #[serde(default = "default_show_help")]
    show_help: bool,
}

fn default_show_help() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            seed: None,
            show_help: default_show_help(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, mode: Option<GameMode>, seed: Option<u64>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(*config.mode(), GameMode::Local);
        assert!(*config.show_help());
    }

    #[test]
    fn test_loads_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"bot-easy\"\nseed = 99\nshow_help = false").unwrap();

        let config = HostConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.mode(), GameMode::BotEasy);
        assert_eq!(*config.seed(), Some(99));
        assert!(!*config.show_help());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"bot-medium\"").unwrap();

        let config = HostConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.mode(), GameMode::BotMedium);
        assert_eq!(*config.seed(), None);
        assert!(*config.show_help());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"chess\"").unwrap();

        let err = HostConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = HostConfig::default().with_overrides(Some(GameMode::BotEasy), Some(3));
        assert_eq!(*config.mode(), GameMode::BotEasy);
        assert_eq!(*config.seed(), Some(3));

        let kept = config.clone().with_overrides(None, None);
        assert_eq!(kept, config);
    }
}
