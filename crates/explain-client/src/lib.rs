//! Explanation provider clients
//!
//! This crate provides a trait-based client for turning a prompt into a short
//! natural-language explanation. Two interchangeable variants sit behind the
//! same trait; both normalize their responses the same way (reasoning blocks
//! removed, whitespace trimmed) and report failures as [`ProviderError`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          ExplanationProvider trait              │
//! │  - explain(prompt, credential)                  │
//! │  - kind() / is_available()                      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │  FreeProvider   │         │   KeyedProvider     │
//! │ (server secret) │         │ (user credential)   │
//! └─────────────────┘         └─────────────────────┘
//!        └───────────────┬───────────────┘
//!                        ▼
//!              ┌───────────────────┐
//!              │    ProviderSet    │
//!              │ (one per kind)    │
//!              └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use explain_client::{ProviderConfig, ProviderSet};
//! use explain_config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let providers = ProviderSet::from_config(&AppConfig::load());
//! let choice = ProviderConfig::keyed("my-api-key")?;
//!
//! let provider = providers.for_kind(choice.kind());
//! let text = provider.explain("Explain this change", choice.credential()).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod free;
pub mod keyed;
pub mod provider;
pub mod provider_config;
pub mod provider_set;
pub mod reasoning;
pub mod transport;
pub mod types;

pub use error::{ErrorCategory, ProviderError};
pub use free::FreeProvider;
pub use keyed::KeyedProvider;
pub use provider::{ExplanationProvider, ProviderKind};
pub use provider_config::{ProviderConfig, ProviderConfigError};
pub use provider_set::ProviderSet;
pub use reasoning::strip_reasoning;
