//! Events emitted by the explain session for the parent application to handle.

use crate::model::{ExplanationJob, ExplanationState, Ticket};

/// Events emitted by an explain session.
///
/// The session performs no I/O. When an explanation starts it hands back an
/// [`ExplanationJob`]; running it and reporting the outcome as
/// [`crate::ExplainAction::Completed`] is up to the caller (or the
/// [`crate::ExplanationOrchestrator`], which does both).
///
/// # Example
///
/// ```ignore
/// for event in session.handle_action(ExplainAction::RequestExplanation) {
///     match event {
///         ExplainEvent::ExplanationRequested(job) => {
///             let provider = providers.for_kind(job.provider.kind());
///             let outcome = provider.explain(&job.prompt, job.provider.credential()).await;
///             session.handle_action(ExplainAction::Completed { ticket: job.ticket, outcome });
///         }
///         ExplainEvent::StateChanged(state) => panel.render(&state),
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainEvent {
    /// An explanation started; the job must be run against a provider.
    ExplanationRequested(ExplanationJob),

    /// The explanation state changed.
    StateChanged(ExplanationState),

    /// A finished call was ignored because the selection or attempt moved on.
    ResultDiscarded { ticket: Ticket },

    /// The selection was dropped.
    SelectionCleared,
}
