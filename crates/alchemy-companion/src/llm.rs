//! Chat API client.
//!
//! Talks to any OpenAI-compatible chat completions endpoint over HTTP via
//! `reqwest`. One call per player message, no retries: a failure is
//! reported once and the session moves on.

use std::time::Duration;

use tracing::debug;

use crate::config::CompanionConfig;
use crate::error::CompanionError;
use crate::prompt::RenderedPrompt;

/// Client for an OpenAI-compatible chat completions API.
///
/// Sends requests to `{api_url}/chat/completions`. Cloning is cheap; the
/// underlying connection pool is shared.
#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// - [`CompanionError::MissingCredential`] if no API key is configured.
    /// - [`CompanionError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &CompanionConfig) -> Result<Self, CompanionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(CompanionError::MissingCredential)?;
        let client = build_http_client(config.timeout)?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Model name, for logging.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`CompanionError::ApiUnavailable`] if the call fails, times
    /// out, returns a non-success status, or carries no reply text.
    pub async fn ask(&self, prompt: &RenderedPrompt) -> Result<String, CompanionError> {
        let url = format!("{}/chat/completions", self.api_url);

        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user}
            ]
        });

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| CompanionError::ApiUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(CompanionError::ApiUnavailable(format!(
                "API returned {status}: {error_body}"
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompanionError::ApiUnavailable(format!("response parse failed: {e}")))?;

        let reply = extract_content(&json)?;
        debug!(model = %self.model, chars = reply.chars().count(), "chat reply received");
        Ok(reply)
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, CompanionError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| CompanionError::Config(format!("failed to build HTTP client: {e}")))
}

/// Extract the reply text from a chat completions response.
///
/// Blank replies count as missing.
fn extract_content(json: &serde_json::Value) -> Result<String, CompanionError> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            CompanionError::ApiUnavailable("response missing choices[0].message.content".to_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> RenderedPrompt {
        RenderedPrompt {
            system: "You are a dog.".to_owned(),
            user: "hi".to_owned(),
        }
    }

    #[test]
    fn extract_content_valid() {
        let json = serde_json::json!({
            "choices": [{
                "message": {"role": "assistant", "content": "  Woof! *sniffs the fire*  "}
            }]
        });
        assert_eq!(extract_content(&json).ok().as_deref(), Some("Woof! *sniffs the fire*"));
    }

    #[test]
    fn extract_content_missing_choices() {
        let json = serde_json::json!({"error": {"message": "rate limited"}});
        assert!(matches!(extract_content(&json), Err(CompanionError::ApiUnavailable(_))));
    }

    #[test]
    fn extract_content_blank_reply() {
        let json = serde_json::json!({"choices": [{"message": {"content": "   "}}]});
        assert!(extract_content(&json).is_err());
    }

    #[test]
    fn client_requires_credential() {
        let result = ChatClient::new(&CompanionConfig::default());
        assert!(matches!(result, Err(CompanionError::MissingCredential)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_unavailable() {
        let config = CompanionConfig {
            api_url: "http://127.0.0.1:9".to_owned(),
            api_key: Some("test".to_owned()),
            timeout: Duration::from_millis(500),
            ..CompanionConfig::default()
        };
        let Ok(client) = ChatClient::new(&config) else {
            panic!("client must build with a key");
        };
        assert_eq!(client.model(), crate::config::DEFAULT_MODEL);

        let result = client.ask(&prompt()).await;
        assert!(result.as_ref().is_err_and(CompanionError::is_unavailable));
    }
}
