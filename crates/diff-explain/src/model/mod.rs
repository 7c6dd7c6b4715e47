//! Data models for panes, selections and explanations.

mod explanation;
mod pane;
mod range;
mod selection;

pub use explanation::{ExplanationJob, ExplanationState, Ticket};
pub use pane::{DiffDocument, DiffStats, PaneSide, PaneText};
pub use range::{LineRange, TextRange};
pub use selection::{PromptRequest, Selection, SelectionError, SelectionPreview};
