//! The closed set of explanation providers
//!
//! One slot per [`ProviderKind`]. Adding a provider means adding a kind and a
//! slot here.

use crate::free::FreeProvider;
use crate::keyed::KeyedProvider;
use crate::provider::{ExplanationProvider, ProviderKind};
use explain_config::AppConfig;
use log::info;
use std::sync::Arc;

/// Providers available to an orchestrator, addressed by kind
#[derive(Clone)]
pub struct ProviderSet {
    free: Arc<dyn ExplanationProvider>,
    keyed: Arc<dyn ExplanationProvider>,
}

impl ProviderSet {
    /// Create a set from explicit providers
    ///
    /// Used by tests to plug in mock providers.
    pub fn new(free: Arc<dyn ExplanationProvider>, keyed: Arc<dyn ExplanationProvider>) -> Self {
        if free.kind() != ProviderKind::Free || keyed.kind() != ProviderKind::Keyed {
            log::warn!(
                "Provider set slots hold mismatched kinds ({} / {})",
                free.kind(),
                keyed.kind()
            );
        }
        Self { free, keyed }
    }

    /// Create the real providers from config
    pub fn from_config(config: &AppConfig) -> Self {
        let free = FreeProvider::from_config(config);
        let keyed = KeyedProvider::from_config(config);
        info!(
            "Providers ready (free available: {}, free model: {}, keyed model: {})",
            free.is_available(),
            config.free_model,
            config.keyed_model
        );
        Self {
            free: Arc::new(free),
            keyed: Arc::new(keyed),
        }
    }

    /// The provider serving `kind`
    pub fn for_kind(&self, kind: ProviderKind) -> Arc<dyn ExplanationProvider> {
        match kind {
            ProviderKind::Free => Arc::clone(&self.free),
            ProviderKind::Keyed => Arc::clone(&self.keyed),
        }
    }

    /// Kinds whose provider reports itself available
    pub fn available_kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.for_kind(*kind).is_available())
            .collect()
    }
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet")
            .field("free_available", &self.free.is_available())
            .field("keyed_available", &self.keyed.is_available())
            .finish()
    }
}
