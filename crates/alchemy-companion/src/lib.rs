//! The Alchemy companion: a chaotic alchemist dog the player can talk to.
//!
//! Conversations go to an OpenAI-compatible chat API when a key is
//! configured. Without one, or when a call fails, the local voice in
//! [`fallback`] answers instead.
//!
//! ```text
//! GameState --> ChatContext --> PromptEngine --> ChatClient --> reply
//!                                                    |
//!                                      (no key / failure)
//!                                                    v
//!                                         fallback_reply (local)
//! ```
//!
//! # Modules
//!
//! - [`config`] -- [`CompanionConfig`] from environment variables
//! - [`prompt`] -- [`PromptEngine`], [`ChatContext`], [`RenderedPrompt`]
//! - [`llm`] -- [`ChatClient`] for chat completions
//! - [`fallback`] -- Local voice lines and hint phrasing
//! - [`error`] -- [`CompanionError`]

pub mod config;
pub mod error;
pub mod fallback;
pub mod llm;
pub mod prompt;

pub use config::{CompanionConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use error::CompanionError;
pub use fallback::{describe_hint, fallback_reply, voice_line};
pub use llm::ChatClient;
pub use prompt::{ChatContext, PromptEngine, RenderedPrompt};
