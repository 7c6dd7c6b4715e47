//! Provider choice held for the session

use crate::provider::ProviderKind;
use thiserror::Error;

/// Errors raised while building a [`ProviderConfig`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderConfigError {
    #[error("An API key is required for the keyed provider")]
    EmptyCredential,
}

/// Which provider to use, and the user credential if it needs one
///
/// Only constructible through [`ProviderConfig::free`] and
/// [`ProviderConfig::keyed`], so a keyed config always carries a non-empty key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    kind: ProviderKind,
    credential: Option<String>,
}

impl ProviderConfig {
    /// The free provider (no user credential)
    pub fn free() -> Self {
        Self {
            kind: ProviderKind::Free,
            credential: None,
        }
    }

    /// The keyed provider with a user-supplied key
    ///
    /// Surrounding whitespace is trimmed; a blank key is rejected.
    pub fn keyed(credential: impl AsRef<str>) -> Result<Self, ProviderConfigError> {
        let credential = credential.as_ref().trim();
        if credential.is_empty() {
            return Err(ProviderConfigError::EmptyCredential);
        }
        Ok(Self {
            kind: ProviderKind::Keyed,
            credential: Some(credential.to_string()),
        })
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field(
                "credential",
                &self.credential.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_free_has_no_credential() {
        let config = ProviderConfig::free();
        assert_eq!(config.kind(), ProviderKind::Free);
        assert_eq!(config.credential(), None);
        assert_eq!(config, ProviderConfig::default());
    }

    #[test]
    fn test_keyed_trims_credential() {
        let config = ProviderConfig::keyed("  AIza-key \n").unwrap();
        assert_eq!(config.kind(), ProviderKind::Keyed);
        assert_eq!(config.credential(), Some("AIza-key"));
    }

    #[test]
    fn test_keyed_rejects_blank_credential() {
        assert_eq!(
            ProviderConfig::keyed("   "),
            Err(ProviderConfigError::EmptyCredential)
        );
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = ProviderConfig::keyed("super-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
