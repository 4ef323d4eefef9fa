//! Configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File consulted when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tiles.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TilesConfig {
    /// File the interactive UI writes its logs to.
    log_file: PathBuf,

    /// Sound cue settings.
    audio: AudioSettings,

    /// Display settings.
    ui: UiSettings,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tiles.log"),
            audio: AudioSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// Sound cue settings.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master switch for all cues.
    enabled: bool,
    /// Volume of the per-move click, 0.0 to 1.0.
    click_volume: f32,
    /// Volume of the game-over cue, 0.0 to 1.0.
    game_over_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            click_volume: 0.5,
            game_over_volume: 1.0,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Show the key legend under the board.
    show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

impl TilesConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present in the working directory, otherwise defaults apply.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, volume) in [
            ("click_volume", self.audio.click_volume),
            ("game_over_volume", self.audio.game_over_volume),
        ] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::new(format!(
                    "audio.{} must be between 0.0 and 1.0, got {}",
                    name, volume
                )));
            }
        }
        Ok(())
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
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = TilesConfig::from_toml("").unwrap();
        assert_eq!(config, TilesConfig::default());
        assert!(*config.audio().enabled());
        assert_eq!(*config.audio().click_volume(), 0.5);
        assert_eq!(*config.audio().game_over_volume(), 1.0);
        assert!(*config.ui().show_hints());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = TilesConfig::from_toml(
            r#"
            log_file = "game.log"

            [audio]
            click_volume = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
        assert_eq!(*config.audio().click_volume(), 0.2);
        assert!(*config.audio().enabled());
        assert_eq!(*config.audio().game_over_volume(), 1.0);
    }

    #[test]
    fn test_volume_out_of_range_rejected() {
        let err = TilesConfig::from_toml("[audio]\ngame_over_volume = 1.5\n").unwrap_err();
        assert!(err.message.contains("game_over_volume"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = TilesConfig::from_toml("[audio\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[audio]\nenabled = false\n\n[ui]\nshow_hints = false").unwrap();

        let config = TilesConfig::load(Some(file.path())).unwrap();
        assert!(!*config.audio().enabled());
        assert!(!*config.ui().show_hints());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = TilesConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
