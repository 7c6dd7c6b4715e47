//! Current selection, its revision, and the explanation that belongs to it.

use crate::model::{ExplanationState, PaneSide, Selection, SelectionError, Ticket};

/// Tracks the user's selection and the one explanation attached to it.
///
/// Every selection change bumps the revision and drops the explanation back
/// to [`ExplanationState::Idle`]; results issued for an older revision are
/// stale.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selection: Option<Selection>,
    revision: u64,
    explanation: ExplanationState,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection.
    ///
    /// Empty `text` clears it. Invalid line numbers also clear it and return
    /// the error; the previous selection is never kept.
    pub fn on_selection_changed(
        &mut self,
        side: PaneSide,
        text: &str,
        counterpart_text: &str,
        start_line: u32,
        end_line: u32,
    ) -> Result<(), SelectionError> {
        self.bump();

        if text.is_empty() {
            self.selection = None;
            return Ok(());
        }

        match Selection::new(side, text, counterpart_text, start_line, end_line) {
            Ok(selection) => {
                log::debug!(
                    "Selection changed: {} {} (revision {})",
                    side.label(),
                    selection.lines().label(),
                    self.revision
                );
                self.selection = Some(selection);
                Ok(())
            }
            Err(e) => {
                self.selection = None;
                Err(e)
            }
        }
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.bump();
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn explanation(&self) -> &ExplanationState {
        &self.explanation
    }

    pub(crate) fn set_explanation(&mut self, state: ExplanationState) {
        self.explanation = state;
    }

    /// True iff the selection has non-blank text and nothing is generating.
    pub fn can_explain(&self) -> bool {
        let has_text = self.selection.as_ref().is_some_and(|s| !s.is_blank());
        has_text && !self.explanation.is_generating()
    }

    /// Whether `ticket` was issued for an older selection.
    pub fn is_stale(&self, ticket: &Ticket) -> bool {
        ticket.revision != self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
        self.explanation = ExplanationState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_change_bumps_revision_and_resets() {
        let mut tracker = SelectionTracker::new();
        tracker.set_explanation(ExplanationState::Resolved {
            text: "old".to_string(),
        });

        tracker
            .on_selection_changed(PaneSide::Modified, "return a + b;", "", 1, 1)
            .unwrap();

        assert_eq!(tracker.revision(), 1);
        assert_eq!(tracker.explanation(), &ExplanationState::Idle);
        assert_eq!(tracker.selection().unwrap().text(), "return a + b;");
    }

    #[test]
    fn test_can_explain() {
        let mut tracker = SelectionTracker::new();
        assert!(!tracker.can_explain());

        tracker
            .on_selection_changed(PaneSide::Original, "   ", "", 1, 1)
            .unwrap();
        assert!(!tracker.can_explain());

        tracker
            .on_selection_changed(PaneSide::Original, "x()", "", 1, 1)
            .unwrap();
        assert!(tracker.can_explain());

        tracker.set_explanation(ExplanationState::Generating);
        assert!(!tracker.can_explain());
    }

    #[test]
    fn test_empty_text_clears() {
        let mut tracker = SelectionTracker::new();
        tracker
            .on_selection_changed(PaneSide::Modified, "x", "", 1, 1)
            .unwrap();
        tracker
            .on_selection_changed(PaneSide::Modified, "", "", 1, 1)
            .unwrap();
        assert!(tracker.selection().is_none());
    }

    #[test]
    fn test_invalid_lines_clear_and_error() {
        let mut tracker = SelectionTracker::new();
        tracker
            .on_selection_changed(PaneSide::Modified, "x", "", 1, 1)
            .unwrap();

        let result = tracker.on_selection_changed(PaneSide::Modified, "y", "", 0, 1);
        assert_eq!(result, Err(SelectionError::ZeroLine(0)));
        assert!(tracker.selection().is_none());
    }

    #[test]
    fn test_is_stale() {
        let mut tracker = SelectionTracker::new();
        tracker
            .on_selection_changed(PaneSide::Modified, "a", "", 1, 1)
            .unwrap();
        let ticket = Ticket {
            attempt: 1,
            revision: tracker.revision(),
        };
        assert!(!tracker.is_stale(&ticket));

        tracker.clear();
        assert!(tracker.is_stale(&ticket));
    }
}
