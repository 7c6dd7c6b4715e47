//! Async driver tying the session to the providers.

use crate::action::ExplainAction;
use crate::event::ExplainEvent;
use crate::model::{DiffDocument, ExplanationJob, ExplanationState, PaneSide, TextRange};
use crate::prompt::PromptBuilder;
use crate::resolver::resolve_counterpart;
use crate::state::ExplainSession;
use crate::traits::LineSource;
use explain_client::{ProviderConfig, ProviderSet};
use explain_config::AppConfig;
use std::sync::{Mutex, MutexGuard};

/// Runs explanations for one comparison session.
///
/// Owns the [`ExplainSession`] behind a mutex that is only held for
/// synchronous transitions; provider calls run without it, so selection
/// changes stay responsive while a call is in flight. Single-flight: a
/// request while generating is a no-op.
///
/// # Example
///
/// ```rust,no_run
/// use diff_explain::{DiffDocument, ExplanationOrchestrator, PaneSide, TextRange};
/// use explain_config::AppConfig;
///
/// # async fn example() {
/// let orchestrator = ExplanationOrchestrator::from_config(&AppConfig::load());
/// let doc = DiffDocument::new("return a;", "return a + b;");
///
/// orchestrator.select_range(&doc, PaneSide::Modified, TextRange::new(1, 1, 1, 14));
/// let state = orchestrator.explain().await;
/// println!("{:?}", state);
/// # }
/// ```
pub struct ExplanationOrchestrator {
    providers: ProviderSet,
    session: Mutex<ExplainSession>,
}

impl ExplanationOrchestrator {
    pub fn new(providers: ProviderSet, prompt_builder: PromptBuilder) -> Self {
        Self {
            providers,
            session: Mutex::new(ExplainSession::new(prompt_builder, ProviderConfig::free())),
        }
    }

    /// Build the real providers and prompt builder from config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            ProviderSet::from_config(config),
            PromptBuilder::from_config(config),
        )
    }

    fn session(&self) -> MutexGuard<'_, ExplainSession> {
        // Transitions are single handle_action calls; a poisoned session is still whole
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Dispatch an action to the session.
    pub fn dispatch(&self, action: ExplainAction) -> Vec<ExplainEvent> {
        self.session().handle_action(action)
    }

    /// Current explanation state.
    pub fn state(&self) -> ExplanationState {
        self.session().state().clone()
    }

    pub fn can_explain(&self) -> bool {
        self.session().can_explain()
    }

    /// Snapshot of the session (selection, provider, state).
    pub fn snapshot(&self) -> ExplainSession {
        self.session().clone()
    }

    /// Replace the selection. Empty `text` clears it.
    pub fn on_selection_changed(
        &self,
        side: PaneSide,
        text: impl Into<String>,
        counterpart_text: impl Into<String>,
        start_line: u32,
        end_line: u32,
    ) -> Vec<ExplainEvent> {
        self.dispatch(ExplainAction::SelectionChanged {
            side,
            text: text.into(),
            counterpart_text: counterpart_text.into(),
            start_line,
            end_line,
        })
    }

    /// Select `range` in the `side` pane of `doc`.
    ///
    /// Reads the exact selected text from that pane and the aligned lines
    /// from the other pane. An empty range clears the selection.
    pub fn select_range(
        &self,
        doc: &DiffDocument,
        side: PaneSide,
        range: TextRange,
    ) -> Vec<ExplainEvent> {
        if range.is_empty() {
            return self.dispatch(ExplainAction::ClearSelection);
        }

        let source = doc.pane(side);
        let target = doc.pane(side.other());
        let lines = range.lines();

        let text = source.value_in_range(&range);
        let counterpart = resolve_counterpart(source, target, lines.start, lines.end);

        self.on_selection_changed(side, text, counterpart, lines.start, lines.end)
    }

    /// Switch provider; the current explanation goes back to idle.
    pub fn set_provider(&self, config: ProviderConfig) -> Vec<ExplainEvent> {
        self.dispatch(ExplainAction::SetProvider(config))
    }

    /// Swap the panes of `doc`; the selection no longer applies.
    pub fn swap_panes(&self, doc: &mut DiffDocument) -> Vec<ExplainEvent> {
        doc.swap();
        self.dispatch(ExplainAction::ClearSelection)
    }

    /// Clear the session.
    pub fn reset(&self) -> Vec<ExplainEvent> {
        self.dispatch(ExplainAction::Reset)
    }

    /// Empty both panes of `doc` and clear the session.
    pub fn reset_document(&self, doc: &mut DiffDocument) -> Vec<ExplainEvent> {
        doc.reset();
        self.reset()
    }

    /// Start an explanation of the current selection.
    ///
    /// Returns the job to [`run`](Self::run), or `None` if there is nothing
    /// to explain or a call is already in flight.
    pub fn request_explanation(&self) -> Option<ExplanationJob> {
        Self::take_job(self.dispatch(ExplainAction::RequestExplanation))
    }

    /// Start again from the current selection after a result or failure.
    pub fn retry(&self) -> Option<ExplanationJob> {
        Self::take_job(self.dispatch(ExplainAction::Retry))
    }

    fn take_job(events: Vec<ExplainEvent>) -> Option<ExplanationJob> {
        events.into_iter().find_map(|event| match event {
            ExplainEvent::ExplanationRequested(job) => Some(job),
            _ => None,
        })
    }

    /// Run a job against its provider and apply the outcome.
    ///
    /// The session lock is not held while the provider runs. Returns the
    /// events of the completion: a state change, or a discard if the
    /// selection moved on meanwhile.
    pub async fn run(&self, job: ExplanationJob) -> Vec<ExplainEvent> {
        let provider = self.providers.for_kind(job.provider.kind());
        let outcome = provider
            .explain(&job.prompt, job.provider.credential())
            .await;

        self.dispatch(ExplainAction::Completed {
            ticket: job.ticket,
            outcome,
        })
    }

    /// Request and run an explanation in one call; returns the state after.
    pub async fn explain(&self) -> ExplanationState {
        if let Some(job) = self.request_explanation() {
            self.run(job).await;
        }
        self.state()
    }
}

impl std::fmt::Debug for ExplanationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplanationOrchestrator")
            .field("providers", &self.providers)
            .field("state", &self.state())
            .finish()
    }
}
