//! Keyed provider: generateContent with a user-supplied API key

use crate::error::ProviderError;
use crate::provider::{ExplanationProvider, ProviderKind};
use crate::reasoning::normalize_content;
use crate::transport::{content_at, http_client, post_json};
use crate::types::GenerateContentRequest;
use async_trait::async_trait;
use explain_config::AppConfig;

const LABEL: &str = "Gemini";

/// generateContent provider authenticated by the caller's credential
pub struct KeyedProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl KeyedProvider {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: http_client(config.request_timeout()),
            base_url: config.keyed_base_url.trim_end_matches('/').to_string(),
            model: config.keyed_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Endpoint URL without the key (the key travels as a query parameter)
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ExplanationProvider for KeyedProvider {
    async fn explain(
        &self,
        prompt: &str,
        credential: Option<&str>,
    ) -> Result<String, ProviderError> {
        let key = credential
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ProviderError::MissingCredential(format!(
                    "Please enter your {} API key first.",
                    LABEL
                ))
            })?;

        let body = GenerateContentRequest::single_text(prompt, self.max_tokens, self.temperature);

        log::debug!(
            "Requesting explanation from {} (model {}, prompt {} chars)",
            LABEL,
            self.model,
            prompt.chars().count()
        );

        let request = self.client.post(self.endpoint()).query(&[("key", key)]);
        let json = post_json(request, &body, LABEL).await?;

        let raw = content_at(&json, "/candidates/0/content/parts/0/text").unwrap_or_default();
        normalize_content(raw, LABEL)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Keyed
    }

    fn is_available(&self) -> bool {
        true
    }
}
