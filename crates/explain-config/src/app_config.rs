//! Application configuration
//!
//! Configuration loaded from `.diff-explain.toml`. Every field has a default,
//! so a partial file (or no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .diff-explain.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Chat-completion endpoint used by the free provider
    #[serde(default = "default_free_endpoint")]
    pub free_endpoint: String,

    /// Model identifier sent to the free provider
    #[serde(default = "default_free_model")]
    pub free_model: String,

    /// Environment variable holding the free provider's server-side secret
    #[serde(default = "default_free_api_key_env")]
    pub free_api_key_env: String,

    /// Base URL of the keyed (generateContent) provider
    #[serde(default = "default_keyed_base_url")]
    pub keyed_base_url: String,

    /// Model identifier used by the keyed provider
    #[serde(default = "default_keyed_model")]
    pub keyed_model: String,

    /// Upper bound on generated tokens for both providers
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for both providers
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Transport timeout for a single explanation request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Character budget applied to each text embedded in a prompt
    #[serde(default = "default_prompt_char_budget")]
    pub prompt_char_budget: usize,
}

fn default_free_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_free_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_free_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_keyed_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_keyed_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_max_tokens() -> u32 {
    512
}

fn default_temperature() -> f32 {
    0.3
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_prompt_char_budget() -> usize {
    2000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            free_endpoint: default_free_endpoint(),
            free_model: default_free_model(),
            free_api_key_env: default_free_api_key_env(),
            keyed_base_url: default_keyed_base_url(),
            keyed_model: default_keyed_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            prompt_char_budget: default_prompt_char_budget(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse a config from TOML content
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
