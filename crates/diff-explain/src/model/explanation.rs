//! Explanation lifecycle types.

use explain_client::{ErrorCategory, ProviderConfig};

/// The single live explanation of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExplanationState {
    /// Nothing requested for the current selection.
    #[default]
    Idle,
    /// A provider call is in flight.
    Generating,
    /// The provider returned an explanation.
    Resolved { text: String },
    /// The provider call failed; `message` is shown to the user as is.
    Failed {
        category: ErrorCategory,
        message: String,
    },
}

impl ExplanationState {
    pub fn is_generating(&self) -> bool {
        matches!(self, ExplanationState::Generating)
    }

    /// The explanation text, if resolved.
    pub fn text(&self) -> Option<&str> {
        match self {
            ExplanationState::Resolved { text } => Some(text),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ExplanationState::Idle => "idle",
            ExplanationState::Generating => "generating",
            ExplanationState::Resolved { .. } => "resolved",
            ExplanationState::Failed { .. } => "failed",
        }
    }
}

/// Identifies one explanation attempt.
///
/// A result is applied only while its ticket is the active one and the
/// selection revision it was issued for is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub attempt: u64,
    pub revision: u64,
}

/// Work to be run against a provider, produced when an explanation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationJob {
    pub ticket: Ticket,
    pub prompt: String,
    /// Provider choice at the time the job was created.
    pub provider: ProviderConfig,
}
