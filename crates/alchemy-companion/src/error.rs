//! Error types for the companion client.
//!
//! Every failure here is non-fatal for the game: the session reports it as
//! a notice and falls back to the local voice.

/// Errors raised while configuring or talking to the chat API.
#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    /// The chat API could not be reached or returned an unusable reply.
    #[error("companion API unavailable: {0}")]
    ApiUnavailable(String),

    /// No API key is configured.
    #[error("companion API unavailable: no credential configured")]
    MissingCredential,

    /// A prompt template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl CompanionError {
    /// Whether this is the "companion didn't respond" case rather than a
    /// local setup problem.
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::ApiUnavailable(_) | Self::MissingCredential)
    }
}
