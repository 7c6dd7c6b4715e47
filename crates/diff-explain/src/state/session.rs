//! The explanation state machine.

use crate::action::ExplainAction;
use crate::event::ExplainEvent;
use crate::model::{ExplanationJob, ExplanationState, PaneSide, Selection, Ticket};
use crate::prompt::PromptBuilder;
use crate::state::SelectionTracker;
use explain_client::{ProviderConfig, ProviderError};

/// State of one explain session.
///
/// `Idle -> Generating -> Resolved | Failed`, re-enterable. All transitions
/// go through [`ExplainSession::handle_action`]; nothing here performs I/O.
#[derive(Debug, Clone, Default)]
pub struct ExplainSession {
    tracker: SelectionTracker,
    provider: ProviderConfig,
    prompt_builder: PromptBuilder,
    /// Attempts issued so far; the next ticket uses `attempts + 1`.
    attempts: u64,
    /// Ticket of the call whose result would be applied.
    active: Option<Ticket>,
}

impl ExplainSession {
    pub fn new(prompt_builder: PromptBuilder, provider: ProviderConfig) -> Self {
        Self {
            prompt_builder,
            provider,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ExplanationState {
        self.tracker.explanation()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.tracker.selection()
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    pub fn can_explain(&self) -> bool {
        self.tracker.can_explain()
    }

    /// Handle an action and return resulting events.
    pub fn handle_action(&mut self, action: ExplainAction) -> Vec<ExplainEvent> {
        let before = self.state().clone();
        let mut events = Vec::new();

        match action {
            ExplainAction::SelectionChanged {
                side,
                text,
                counterpart_text,
                start_line,
                end_line,
            } => {
                self.on_selection_changed(side, &text, &counterpart_text, start_line, end_line);
                if self.tracker.selection().is_none() {
                    events.push(ExplainEvent::SelectionCleared);
                }
            }
            ExplainAction::ClearSelection => {
                self.active = None;
                self.tracker.clear();
                events.push(ExplainEvent::SelectionCleared);
            }
            ExplainAction::RequestExplanation => {
                if let Some(job) = self.start_job() {
                    events.push(ExplainEvent::ExplanationRequested(job));
                }
            }
            ExplainAction::Retry => {
                log::debug!("Retry requested from state {}", before.name());
                if let Some(job) = self.start_job() {
                    events.push(ExplainEvent::ExplanationRequested(job));
                }
            }
            ExplainAction::Completed { ticket, outcome } => {
                if let Some(event) = self.complete(ticket, outcome) {
                    events.push(event);
                }
            }
            ExplainAction::SetProvider(config) => {
                log::info!("Explanation provider set to {}", config.kind());
                self.provider = config;
                self.active = None;
                self.tracker.set_explanation(ExplanationState::Idle);
            }
            ExplainAction::Reset => {
                log::debug!("Explain session reset");
                self.active = None;
                self.tracker.clear();
                events.push(ExplainEvent::SelectionCleared);
            }
        }

        if self.state() != &before {
            log::debug!(
                "Explanation state: {} -> {}",
                before.name(),
                self.state().name()
            );
            events.push(ExplainEvent::StateChanged(self.state().clone()));
        }

        events
    }

    fn on_selection_changed(
        &mut self,
        side: PaneSide,
        text: &str,
        counterpart_text: &str,
        start_line: u32,
        end_line: u32,
    ) {
        // Any in-flight call now belongs to an older selection
        self.active = None;
        if let Err(e) =
            self.tracker
                .on_selection_changed(side, text, counterpart_text, start_line, end_line)
        {
            log::warn!("Ignoring invalid selection: {}", e);
        }
    }

    /// Enter `Generating` from the current selection and issue a job.
    ///
    /// `None` when there is nothing to explain or a call is already running.
    fn start_job(&mut self) -> Option<ExplanationJob> {
        if self.state().is_generating() {
            log::debug!("Explanation already generating, ignoring request");
            return None;
        }

        let selection = self.tracker.selection().filter(|s| !s.is_blank())?;
        let prompt = self.prompt_builder.build(&selection.to_prompt_request());

        self.attempts += 1;
        let ticket = Ticket {
            attempt: self.attempts,
            revision: self.tracker.revision(),
        };
        self.active = Some(ticket);
        self.tracker.set_explanation(ExplanationState::Generating);

        log::debug!(
            "Starting explanation attempt {} with {} provider",
            ticket.attempt,
            self.provider.kind()
        );

        Some(ExplanationJob {
            ticket,
            prompt,
            provider: self.provider.clone(),
        })
    }

    /// Apply a finished call, unless it is stale.
    fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, ProviderError>,
    ) -> Option<ExplainEvent> {
        if self.active != Some(ticket) || self.tracker.is_stale(&ticket) {
            log::warn!(
                "Discarding stale explanation result (attempt {}, revision {})",
                ticket.attempt,
                ticket.revision
            );
            return Some(ExplainEvent::ResultDiscarded { ticket });
        }

        self.active = None;
        let state = match outcome {
            Ok(text) => ExplanationState::Resolved { text },
            Err(e) => {
                log::warn!("Explanation failed ({}): {}", e.category(), e);
                ExplanationState::Failed {
                    category: e.category(),
                    message: e.message().to_string(),
                }
            }
        };
        self.tracker.set_explanation(state);
        None
    }
}
