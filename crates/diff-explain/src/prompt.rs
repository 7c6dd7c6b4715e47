//! Prompt assembly for an explanation request.

use crate::model::{LineRange, PaneSide, PromptRequest};
use explain_config::AppConfig;
use std::borrow::Cow;

/// Default per-text character budget.
pub const DEFAULT_CHAR_BUDGET: usize = 2000;

/// Appended to a text cut at the budget.
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Builds bounded, side-aware prompts from a [`PromptRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBuilder {
    char_budget: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_BUDGET)
    }
}

impl PromptBuilder {
    pub fn new(char_budget: usize) -> Self {
        Self { char_budget }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.prompt_char_budget)
    }

    pub fn char_budget(&self) -> usize {
        self.char_budget
    }

    /// Cut `text` to the character budget.
    ///
    /// Text at or under the budget is borrowed unchanged. Longer text keeps
    /// its first `char_budget` characters followed by the truncation marker
    /// and the number of characters dropped.
    pub fn truncate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let total = text.chars().count();
        if total <= self.char_budget {
            return Cow::Borrowed(text);
        }

        let kept: String = text.chars().take(self.char_budget).collect();
        Cow::Owned(format!(
            "{}{} [{} more characters omitted]",
            kept,
            TRUNCATION_MARKER,
            total - self.char_budget
        ))
    }

    /// Render the prompt for `request`.
    pub fn build(&self, request: &PromptRequest) -> String {
        let selected = self.truncate(&request.selected_text);
        let counterpart = self.truncate(&request.counterpart_text);
        let lines = LineRange::new(request.start_line, request.end_line).label();

        let prompt = match request.side {
            PaneSide::Modified => modified_prompt(&lines, &selected, &counterpart),
            PaneSide::Original => original_prompt(&lines, &selected, &counterpart),
        };

        log::debug!(
            "Built {} prompt for {} ({} chars)",
            request.side.label(),
            lines,
            prompt.chars().count()
        );
        prompt
    }
}

fn modified_prompt(lines: &str, selected: &str, counterpart: &str) -> String {
    let previous = if counterpart.trim().is_empty() {
        "There was no prior version of these lines in the original code: this code is entirely new."
            .to_string()
    } else {
        format!(
            "Code at the same lines in the original version:\n```\n{}\n```",
            counterpart
        )
    };

    format!(
        "You are analyzing a Git diff. The following code was added or changed \
         ({lines} of the modified version).\n\n\
         Explain briefly:\n\
         1. What this new code does\n\
         2. How it differs from what was there before, and what new behavior it adds\n\n\
         Added code:\n```\n{selected}\n```\n\n\
         {previous}"
    )
}

fn original_prompt(lines: &str, selected: &str, counterpart: &str) -> String {
    let replacement = if counterpart.trim().is_empty() {
        "This code has no replacement in the modified version: it was removed outright."
            .to_string()
    } else {
        format!(
            "Code at the same lines in the modified version (its replacement):\n```\n{}\n```",
            counterpart
        )
    };

    format!(
        "You are analyzing a Git diff. The following code was removed or replaced \
         ({lines} of the original version).\n\n\
         Explain briefly:\n\
         1. What this removed code was doing\n\
         2. How its replacement differs, and what behavior may change\n\n\
         Removed code:\n```\n{selected}\n```\n\n\
         {replacement}"
    )
}
