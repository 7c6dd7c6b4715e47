//! Explanation provider trait
//!
//! This module defines the `ExplanationProvider` trait that every provider
//! variant implements, and the `ProviderKind` enum naming the variants.

use crate::error::ProviderError;
use async_trait::async_trait;

/// The closed set of provider variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Hosted provider authenticated with a server-side secret
    #[default]
    Free,

    /// Provider authenticated with a key the user supplies
    Keyed,
}

impl ProviderKind {
    /// All kinds, in display order
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Free, ProviderKind::Keyed];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::Free => "Free",
            ProviderKind::Keyed => "Keyed",
        }
    }

    /// Whether this kind needs a user credential to run
    pub fn requires_credential(&self) -> bool {
        matches!(self, ProviderKind::Keyed)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Explanation provider trait
///
/// Turns a prompt into a plain-text explanation. Implementations own their
/// transport and response normalization: the returned string has reasoning
/// blocks removed and is trimmed.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single provider can be shared
/// by an orchestrator across async tasks.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    /// Request an explanation for `prompt`
    ///
    /// `credential` is the user-supplied key. Providers that authenticate
    /// with a server-side secret ignore it.
    async fn explain(&self, prompt: &str, credential: Option<&str>)
        -> Result<String, ProviderError>;

    /// Which variant this provider is
    fn kind(&self) -> ProviderKind;

    /// Whether the provider can serve requests without further setup
    ///
    /// For the free variant this means the server-side secret was found.
    fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults_to_free() {
        assert_eq!(ProviderKind::default(), ProviderKind::Free);
    }

    #[test]
    fn test_only_keyed_requires_credential() {
        assert!(!ProviderKind::Free.requires_credential());
        assert!(ProviderKind::Keyed.requires_credential());
    }
}
