//! Engine configuration loaded from YAML.
//!
//! Every field has a default, so an empty or missing file yields a
//! playable game. The `balance` section nests the full
//! [`BalanceConfig`] and may be given partially.

use std::path::{Path, PathBuf};
use std::time::Duration;

use alchemy_game::{BalanceConfig, DEFAULT_PLAYER_NAME};
use alchemy_types::Language;
use serde::Deserialize;

/// Config file looked up in the working directory when
/// `ALCHEMY_CONFIG` is not set.
pub const CONFIG_FILE: &str = "alchemy.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Directory holding `save.json` and `leaderboard.json`.
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,

    /// Seconds between autosaves; `0` disables autosave.
    #[serde(default = "default_autosave_secs")]
    pub autosave_secs: u64,

    /// Display and reply language.
    #[serde(default)]
    pub language: Language,

    /// Name used when starting a new game.
    #[serde(default = "default_player_name")]
    pub player_name: String,

    /// Game balance.
    #[serde(default)]
    pub balance: BalanceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            autosave_secs: default_autosave_secs(),
            language: Language::default(),
            player_name: default_player_name(),
            balance: BalanceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `ALCHEMY_SAVE_DIR` overrides `save_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override fields with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        if let Some(val) = std::env::var("ALCHEMY_SAVE_DIR").ok().filter(|v| !v.is_empty()) {
            self.save_dir = PathBuf::from(val);
        }
    }

    /// Autosave period, `None` when disabled.
    pub const fn autosave_interval(&self) -> Option<Duration> {
        if self.autosave_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.autosave_secs))
        }
    }
}

fn default_save_dir() -> PathBuf {
    PathBuf::from("saves")
}

const fn default_autosave_secs() -> u64 {
    30
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = EngineConfig::parse("");
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.autosave_interval(), Some(Duration::from_secs(30)));
        assert_eq!(config.balance.start.coins, 50);
    }

    #[test]
    fn partial_balance_keeps_other_defaults() {
        let yaml = r"
save_dir: /tmp/alchemy
autosave_secs: 0
language: ru
player_name: Ada
balance:
  start:
    coins: 500
  shop:
    meat_price: 3
";
        let config = EngineConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.unwrap_or_default();
        assert_eq!(config.save_dir, PathBuf::from("/tmp/alchemy"));
        assert_eq!(config.autosave_interval(), None);
        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.player_name, "Ada");
        assert_eq!(config.balance.start.coins, 500);
        assert_eq!(config.balance.start.meat, 3);
        assert_eq!(config.balance.shop.meat_price, 3);
        assert_eq!(config.balance.shop.bone_price, 7);
        assert_eq!(config.balance.craft.discovery_exp, 50);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let result = EngineConfig::parse("autosave_secs: [not, a, number]");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = EngineConfig::from_file(Path::new("/definitely/not/here/alchemy.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
