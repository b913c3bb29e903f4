//! Error types for the session and the terminal front end.
//!
//! [`EngineError`] wraps every subsystem failure that can surface while
//! starting or running a session. Gameplay failures are not here: intents
//! return [`GameError`](alchemy_game::GameError) directly, since they are
//! expected outcomes rather than faults.

use crate::config::ConfigError;

/// Top-level error for the session and binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The built-in reference data failed validation.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: alchemy_catalog::CatalogError,
    },

    /// Saving or loading failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: alchemy_store::StoreError,
    },

    /// The companion client could not be set up or a prompt failed to
    /// render.
    #[error("companion error: {source}")]
    Companion {
        /// The underlying companion error.
        #[from]
        source: alchemy_companion::CompanionError,
    },
}

/// A line of input that is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[error("empty command")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    /// The command was recognised but its arguments were not.
    #[error("usage: {0}")]
    Usage(&'static str),
}
