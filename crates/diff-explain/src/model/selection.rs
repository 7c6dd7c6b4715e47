//! The user's current selection and the request derived from it.

use crate::model::{LineRange, PaneSide};
use thiserror::Error;

/// Errors raised when a selection has invalid line numbers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Line numbers start at 1.
    #[error("Line numbers start at 1, got {0}")]
    ZeroLine(u32),

    /// The end line lies before the start line.
    #[error("End line {end} is before start line {start}")]
    ReversedRange { start: u32, end: u32 },
}

/// A selection in one pane plus the aligned text of the other pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    side: PaneSide,
    text: String,
    counterpart_text: String,
    start_line: u32,
    end_line: u32,
}

impl Selection {
    /// Create a selection.
    ///
    /// `counterpart_text` is the text at the same lines in the other pane and
    /// may be empty.
    pub fn new(
        side: PaneSide,
        text: impl Into<String>,
        counterpart_text: impl Into<String>,
        start_line: u32,
        end_line: u32,
    ) -> Result<Self, SelectionError> {
        if start_line == 0 {
            return Err(SelectionError::ZeroLine(start_line));
        }
        if end_line < start_line {
            return Err(SelectionError::ReversedRange {
                start: start_line,
                end: end_line,
            });
        }
        Ok(Self {
            side,
            text: text.into(),
            counterpart_text: counterpart_text.into(),
            start_line,
            end_line,
        })
    }

    pub fn side(&self) -> PaneSide {
        self.side
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn counterpart_text(&self) -> &str {
        &self.counterpart_text
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    pub fn lines(&self) -> LineRange {
        LineRange::new(self.start_line, self.end_line)
    }

    /// Whether the selected text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Snapshot the selection as an immutable prompt request.
    pub fn to_prompt_request(&self) -> PromptRequest {
        PromptRequest {
            selected_text: self.text.clone(),
            counterpart_text: self.counterpart_text.clone(),
            start_line: self.start_line,
            end_line: self.end_line,
            side: self.side,
        }
    }

    /// The first `max_lines` lines of the selected text.
    pub fn preview(&self, max_lines: usize) -> SelectionPreview {
        let total_lines = self.text.lines().count().max(1);
        let text = self
            .text
            .lines()
            .take(max_lines)
            .collect::<Vec<_>>()
            .join("\n");
        SelectionPreview {
            text,
            total_lines,
            truncated: total_lines > max_lines,
        }
    }
}

/// Shortened view of a selection for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPreview {
    pub text: String,
    pub total_lines: usize,
    /// More lines exist than `text` shows.
    pub truncated: bool,
}

/// Everything a prompt is built from. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub selected_text: String,
    pub counterpart_text: String,
    pub start_line: u32,
    pub end_line: u32,
    pub side: PaneSide,
}
