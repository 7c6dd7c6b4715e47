//! Explain Session Actions
//!
//! Tagged actions that an explain session can process. The embedding
//! application maps its own UI events (selection changes, button presses,
//! finished provider calls) onto these and dispatches them to the session.

use crate::model::{PaneSide, Ticket};
use explain_client::{ProviderConfig, ProviderError};

/// Actions that can be performed on an explain session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainAction {
    // === Selection ===
    /// The selection in a pane changed. Empty `text` clears the selection.
    SelectionChanged {
        side: PaneSide,
        text: String,
        counterpart_text: String,
        start_line: u32,
        end_line: u32,
    },
    /// Drop the selection (panes swapped or edited).
    ClearSelection,

    // === Explanation ===
    /// Start explaining the current selection.
    RequestExplanation,
    /// Explain the current selection again after a result or failure.
    Retry,
    /// A provider call finished.
    Completed {
        ticket: Ticket,
        outcome: Result<String, ProviderError>,
    },

    // === Session ===
    /// Switch provider (and credential).
    SetProvider(ProviderConfig),
    /// Clear selection and explanation.
    Reset,
}

impl ExplainAction {
    /// Returns true if this action originates from a pane selection.
    pub fn is_selection_action(&self) -> bool {
        matches!(
            self,
            ExplainAction::SelectionChanged { .. } | ExplainAction::ClearSelection
        )
    }
}
