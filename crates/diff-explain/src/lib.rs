//! # diff-explain
//!
//! The selection-to-explanation pipeline of a two-pane code comparison view:
//! map a selection in one pane to the same lines of the other pane, build a
//! bounded prompt describing the change, dispatch it to an explanation
//! provider and keep exactly one live explanation per session.
//!
//! ## Design Principles
//!
//! Like a widget crate, this one is **instrumented**: the session receives
//! actions and emits events, and never renders or calls an API itself. The
//! only component that awaits anything is [`ExplanationOrchestrator::run`].
//!
//! - Pane text is read through the [`LineSource`] trait
//! - Providers come from `explain-client` as a closed [`ProviderSet`]
//! - Late results are matched against a [`Ticket`] and dropped when stale
//!
//! ## Action-Based Architecture
//!
//! The embedding application maps its UI events onto [`ExplainAction`]
//! variants and dispatches them to an [`ExplainSession`]:
//!
//! ```rust,ignore
//! use diff_explain::{ExplainAction, ExplainEvent, ExplainSession, PaneSide};
//!
//! let mut session = ExplainSession::default();
//! session.handle_action(ExplainAction::SelectionChanged {
//!     side: PaneSide::Modified,
//!     text: "return a + b;".into(),
//!     counterpart_text: String::new(),
//!     start_line: 4,
//!     end_line: 4,
//! });
//!
//! for event in session.handle_action(ExplainAction::RequestExplanation) {
//!     if let ExplainEvent::ExplanationRequested(job) = event {
//!         // run the job against a provider, then dispatch ExplainAction::Completed
//!     }
//! }
//! ```

pub mod action;
pub mod event;
pub mod model;
pub mod orchestrator;
pub mod prompt;
pub mod resolver;
pub mod state;
pub mod traits;

// Re-export commonly used types
pub use action::ExplainAction;
pub use event::ExplainEvent;
pub use model::{
    DiffDocument, DiffStats, ExplanationJob, ExplanationState, LineRange, PaneSide, PaneText,
    PromptRequest, Selection, SelectionError, SelectionPreview, TextRange, Ticket,
};
pub use orchestrator::ExplanationOrchestrator;
pub use prompt::{PromptBuilder, DEFAULT_CHAR_BUDGET, TRUNCATION_MARKER};
pub use resolver::{counterpart_range, resolve_counterpart};
pub use state::{ExplainSession, SelectionTracker};
pub use traits::LineSource;

// Re-export provider types so consumers don't need to depend on the client directly
pub use explain_client::{
    ErrorCategory, ExplanationProvider, ProviderConfig, ProviderError, ProviderKind, ProviderSet,
};
