//! Configuration for the companion chat client.
//!
//! All configuration is loaded from environment variables. The API key is
//! only ever read from the environment and is never written to a save
//! file; when it is absent the session uses the local fallback voice.

use std::fmt;
use std::time::Duration;

use crate::error::CompanionError;

/// Default OpenAI-compatible base URL.
pub const DEFAULT_API_URL: &str = "https://api.fireworks.ai/inference/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "accounts/sentientfoundation/models/dobby-unhinged-llama-3-3-70b-new";

/// Companion chat configuration.
#[derive(Clone)]
pub struct CompanionConfig {
    /// Base API URL; requests go to `{api_url}/chat/completions`.
    pub api_url: String,
    /// API key, `None` when no credential is configured.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Deadline for a single chat call.
    pub timeout: Duration,
    /// Completion length limit.
    pub max_tokens: u32,
    /// Sampling temperature, `0.0..=2.0`.
    pub temperature: f32,
    /// Directory with `system.j2` and `user.j2` overriding the built-in
    /// templates.
    pub templates_dir: Option<String>,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            timeout: Duration::from_millis(15_000),
            max_tokens: 200,
            temperature: 0.9,
            templates_dir: None,
        }
    }
}

impl fmt::Debug for CompanionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanionConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("templates_dir", &self.templates_dir)
            .finish()
    }
}

impl CompanionConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ALCHEMY_CHAT_API_URL` -- base API URL (default [`DEFAULT_API_URL`])
    /// - `ALCHEMY_CHAT_API_KEY` -- API key (default: none, local voice only)
    /// - `ALCHEMY_CHAT_MODEL` -- model name (default [`DEFAULT_MODEL`])
    /// - `ALCHEMY_CHAT_TIMEOUT_MS` -- call deadline in milliseconds (default 15000)
    /// - `ALCHEMY_CHAT_MAX_TOKENS` -- completion limit (default 200)
    /// - `ALCHEMY_CHAT_TEMPERATURE` -- sampling temperature (default 0.9)
    /// - `ALCHEMY_TEMPLATES_DIR` -- prompt template override directory
    pub fn from_env() -> Result<Self, CompanionError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CompanionError> {
        let api_url = lookup("ALCHEMY_CHAT_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let api_key = lookup("ALCHEMY_CHAT_API_KEY")
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty());

        let model = lookup("ALCHEMY_CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        let timeout_ms: u64 = lookup("ALCHEMY_CHAT_TIMEOUT_MS")
            .unwrap_or_else(|| "15000".to_owned())
            .parse()
            .map_err(|e| CompanionError::Config(format!("invalid ALCHEMY_CHAT_TIMEOUT_MS: {e}")))?;

        let max_tokens: u32 = lookup("ALCHEMY_CHAT_MAX_TOKENS")
            .unwrap_or_else(|| "200".to_owned())
            .parse()
            .map_err(|e| CompanionError::Config(format!("invalid ALCHEMY_CHAT_MAX_TOKENS: {e}")))?;

        let temperature: f32 = lookup("ALCHEMY_CHAT_TEMPERATURE")
            .unwrap_or_else(|| "0.9".to_owned())
            .parse()
            .map_err(|e| CompanionError::Config(format!("invalid ALCHEMY_CHAT_TEMPERATURE: {e}")))?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(CompanionError::Config(format!(
                "ALCHEMY_CHAT_TEMPERATURE out of range: {temperature}"
            )));
        }

        let templates_dir = lookup("ALCHEMY_TEMPLATES_DIR").filter(|d| !d.is_empty());

        Ok(Self {
            api_url,
            api_key,
            model,
            timeout: Duration::from_millis(timeout_ms),
            max_tokens,
            temperature,
            templates_dir,
        })
    }

    /// Whether an API key is configured.
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = CompanionConfig::from_lookup(lookup(&[]));
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 200);
        assert_eq!(config.timeout, Duration::from_millis(15_000));
        assert!((config.temperature - 0.9).abs() < f32::EPSILON);
        assert!(!config.has_credential());
    }

    #[test]
    fn blank_key_means_no_credential() {
        let config = CompanionConfig::from_lookup(lookup(&[("ALCHEMY_CHAT_API_KEY", "  ")]));
        assert!(config.is_ok_and(|c| !c.has_credential()));
    }

    #[test]
    fn overrides_are_applied() {
        let config = CompanionConfig::from_lookup(lookup(&[
            ("ALCHEMY_CHAT_API_URL", "http://localhost:11434/v1/"),
            ("ALCHEMY_CHAT_API_KEY", "secret"),
            ("ALCHEMY_CHAT_TIMEOUT_MS", "500"),
            ("ALCHEMY_TEMPLATES_DIR", "prompts"),
        ]))
        .unwrap_or_default();
        assert_eq!(config.api_url, "http://localhost:11434/v1");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_millis(500));
        assert_eq!(config.templates_dir.as_deref(), Some("prompts"));
    }

    #[test]
    fn invalid_numbers_are_config_errors() {
        let bad_timeout = CompanionConfig::from_lookup(lookup(&[("ALCHEMY_CHAT_TIMEOUT_MS", "soon")]));
        assert!(matches!(bad_timeout, Err(CompanionError::Config(_))));

        let hot = CompanionConfig::from_lookup(lookup(&[("ALCHEMY_CHAT_TEMPERATURE", "7.5")]));
        assert!(matches!(hot, Err(CompanionError::Config(_))));
    }

    #[test]
    fn debug_redacts_key() {
        let config = CompanionConfig {
            api_key: Some("secret".to_owned()),
            ..CompanionConfig::default()
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("redacted"));
    }
}
