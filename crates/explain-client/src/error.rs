//! Provider failure taxonomy
//!
//! Every failure a provider can produce maps onto exactly one
//! [`ErrorCategory`]. The message is meant to be shown to the user verbatim.

use thiserror::Error;

/// Category of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The keyed provider was invoked without a user credential.
    MissingCredential,
    /// A server-side secret the provider needs is not configured.
    MissingConfiguration,
    /// Network failure, non-2xx status or undecodable response body.
    TransportError,
    /// The transport succeeded but no usable content field was found.
    EmptyResponse,
    /// The content consisted solely of reasoning blocks.
    ReasoningOnly,
}

impl ErrorCategory {
    /// Stable identifier, e.g. for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::MissingCredential => "missing_credential",
            ErrorCategory::MissingConfiguration => "missing_configuration",
            ErrorCategory::TransportError => "transport_error",
            ErrorCategory::EmptyResponse => "empty_response",
            ErrorCategory::ReasoningOnly => "reasoning_only",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`crate::ExplanationProvider::explain`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// No user credential supplied to a provider that needs one.
    #[error("{0}")]
    MissingCredential(String),

    /// Server-side secret absent from the environment.
    #[error("{0}")]
    MissingConfiguration(String),

    /// Network error, non-success status or malformed body.
    #[error("{0}")]
    Transport(String),

    /// No content at the expected response path.
    #[error("{0}")]
    EmptyResponse(String),

    /// Nothing left after stripping reasoning blocks.
    #[error("{0}")]
    ReasoningOnly(String),
}

impl ProviderError {
    /// The category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProviderError::MissingCredential(_) => ErrorCategory::MissingCredential,
            ProviderError::MissingConfiguration(_) => ErrorCategory::MissingConfiguration,
            ProviderError::Transport(_) => ErrorCategory::TransportError,
            ProviderError::EmptyResponse(_) => ErrorCategory::EmptyResponse,
            ProviderError::ReasoningOnly(_) => ErrorCategory::ReasoningOnly,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            ProviderError::MissingCredential(msg)
            | ProviderError::MissingConfiguration(msg)
            | ProviderError::Transport(msg)
            | ProviderError::EmptyResponse(msg)
            | ProviderError::ReasoningOnly(msg) => msg,
        }
    }
}
