//! Free provider: OpenAI-compatible chat completion
//!
//! Authenticates with a server-side secret read from the environment, so the
//! user never supplies a key for it.

use crate::error::ProviderError;
use crate::provider::{ExplanationProvider, ProviderKind};
use crate::reasoning::normalize_content;
use crate::transport::{content_at, http_client, post_json};
use crate::types::{ChatCompletionRequest, ChatMessage};
use async_trait::async_trait;
use explain_config::{resolve_secret, AppConfig};

const LABEL: &str = "Groq";

/// Chat completion provider using a server-side secret
pub struct FreeProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    /// Name of the env var the secret came from (for error messages)
    secret_env: String,
    secret: Option<String>,
}

impl FreeProvider {
    /// Create a provider from config, resolving the secret from the environment
    pub fn from_config(config: &AppConfig) -> Self {
        let secret = resolve_secret(&config.free_api_key_env);
        if secret.is_none() {
            log::warn!(
                "{} is not set; the free provider is unavailable",
                config.free_api_key_env
            );
        }
        Self::with_secret(config, secret)
    }

    /// Create a provider from config with an explicitly supplied secret
    pub fn with_secret(config: &AppConfig, secret: Option<String>) -> Self {
        Self {
            client: http_client(config.request_timeout()),
            endpoint: config.free_endpoint.clone(),
            model: config.free_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            secret_env: config.free_api_key_env.clone(),
            secret: secret.filter(|s| !s.trim().is_empty()),
        }
    }
}

#[async_trait]
impl ExplanationProvider for FreeProvider {
    async fn explain(
        &self,
        prompt: &str,
        _credential: Option<&str>,
    ) -> Result<String, ProviderError> {
        let secret = self.secret.as_deref().ok_or_else(|| {
            ProviderError::MissingConfiguration(format!(
                "The free provider is not configured. Set {} and restart.",
                self.secret_env
            ))
        })?;

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        log::debug!(
            "Requesting explanation from {} (model {}, prompt {} chars)",
            LABEL,
            self.model,
            prompt.chars().count()
        );

        let request = self.client.post(&self.endpoint).bearer_auth(secret);
        let json = post_json(request, &body, LABEL).await?;

        let raw = content_at(&json, "/choices/0/message/content").unwrap_or_default();
        normalize_content(raw, LABEL)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Free
    }

    fn is_available(&self) -> bool {
        self.secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[tokio::test]
    async fn test_missing_secret_fails_fast() {
        let config = AppConfig {
            // Unroutable: a request would fail with a transport error instead
            free_endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            free_api_key_env: "DIFF_EXPLAIN_UNSET_KEY".to_string(),
            ..AppConfig::default()
        };
        let provider = FreeProvider::with_secret(&config, None);

        assert!(!provider.is_available());
        let err = provider.explain("prompt", None).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::MissingConfiguration);
        assert!(err.message().contains("DIFF_EXPLAIN_UNSET_KEY"));
    }

    #[test]
    fn test_blank_secret_is_unavailable() {
        let provider = FreeProvider::with_secret(&AppConfig::default(), Some("  ".to_string()));
        assert!(!provider.is_available());
        assert_eq!(provider.kind(), ProviderKind::Free);
    }
}
