//! Wire types for provider request bodies

use serde::Serialize;

/// A single chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// generateContent request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl GenerateContentRequest {
    /// A single-turn request carrying one text part
    pub fn single_text(text: impl Into<String>, max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.into() }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens,
                temperature,
            },
        }
    }
}
