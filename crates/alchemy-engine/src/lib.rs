//! Session orchestration for the Alchemy idle game.
//!
//! Wires the reference data, the game rules, persistence, and the
//! companion client into a [`Session`] with one method per player intent.
//! The `alchemy` binary drives a session from text commands on stdin.
//!
//! ```text
//! stdin --> Command --> Session --> GameState (alchemy-game)
//!                          |  \---> StateStore / Leaderboard (alchemy-store)
//!                          |
//!                          +--> RenderedPrompt --> ChatClient task
//!                          ^                              |
//!                          +------ reply (mpsc) <---------+
//! ```
//!
//! # Modules
//!
//! - [`session`] -- [`Session`] and its intents
//! - [`config`] -- [`EngineConfig`] from YAML
//! - [`commands`] -- [`Command`] parsing
//! - [`view`] -- Text rendering of outcomes
//! - [`error`] -- [`EngineError`], [`CommandError`]

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod view;

pub use commands::{Command, DEFAULT_EXPORT_FILE, HELP, MAX_BUY_QUANTITY};
pub use config::{CONFIG_FILE, ConfigError, EngineConfig};
pub use error::{CommandError, EngineError};
pub use session::Session;
