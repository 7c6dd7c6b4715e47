//! Reasoning marker stripping
//!
//! Some models wrap their chain-of-thought in `<think>`, `<thinking>` or
//! `<reasoning>` blocks. Those blocks never reach the user.

use crate::error::ProviderError;
use regex::Regex;
use std::sync::OnceLock;

/// Remove every reasoning block from `text` and trim the remainder.
///
/// Closed blocks (`<think>...</think>`) are removed anywhere in the text. An
/// opening tag that is never closed only counts as reasoning when the content
/// starts with it; elsewhere a tag name is treated as part of the answer.
pub fn strip_reasoning(text: &str) -> String {
    static CLOSED: OnceLock<Regex> = OnceLock::new();
    static LEADING_UNTERMINATED: OnceLock<Regex> = OnceLock::new();

    let closed = CLOSED.get_or_init(|| {
        Regex::new(r"(?is)<think>.*?</think>|<thinking>.*?</thinking>|<reasoning>.*?</reasoning>")
            .unwrap()
    });
    let leading_unterminated = LEADING_UNTERMINATED
        .get_or_init(|| Regex::new(r"(?is)\A\s*<(?:think|thinking|reasoning)>.*\z").unwrap());

    let without_closed = closed.replace_all(text, "");
    let without_open = leading_unterminated.replace(&without_closed, "");
    without_open.trim().to_string()
}

/// Turn raw provider content into the final explanation text.
///
/// Blank content is an [`ProviderError::EmptyResponse`]; content that only
/// held reasoning is a [`ProviderError::ReasoningOnly`].
pub fn normalize_content(raw: &str, provider_label: &str) -> Result<String, ProviderError> {
    if raw.trim().is_empty() {
        return Err(ProviderError::EmptyResponse(format!(
            "{} returned no content. Please try again.",
            provider_label
        )));
    }

    let text = strip_reasoning(raw);
    if text.is_empty() {
        log::debug!(
            "{} response held only reasoning ({} chars stripped)",
            provider_label,
            raw.chars().count()
        );
        return Err(ProviderError::ReasoningOnly(format!(
            "{} returned only internal reasoning and no explanation. Please try again.",
            provider_label
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_closed_block() {
        assert_eq!(
            strip_reasoning("<think>ok</think>This adds two numbers."),
            "This adds two numbers."
        );
    }

    #[test]
    fn test_strip_multiline_and_multiple_blocks() {
        let raw = "<think>\nstep 1\nstep 2\n</think>\nFirst.\n<THINKING>more</THINKING> Second.";
        assert_eq!(strip_reasoning(raw), "First.\n Second.");
    }

    #[test]
    fn test_strip_leading_unterminated_block() {
        assert_eq!(strip_reasoning("<reasoning>never closed"), "");
        assert_eq!(strip_reasoning("  \n<THINK>still going"), "");
        assert_eq!(
            strip_reasoning("<think>a</think>Done.<think>b"),
            "Done.<think>b"
        );
    }

    #[test]
    fn test_tag_mentions_in_answer_are_kept() {
        let opening = "This helper removes `<think>` blocks from model output before display.";
        assert_eq!(strip_reasoning(opening), opening);

        let closing =
            "It now matches the closing `</think>` tag lazily, so nested blocks are handled.";
        assert_eq!(strip_reasoning(closing), closing);

        let trailing = "Answer first. Then a stray <reasoning> tag";
        assert_eq!(strip_reasoning(trailing), trailing);
    }

    #[test]
    fn test_normalize_keeps_answer_about_tags() {
        let raw = "<think>x</think>Parses `</thinking>` markers.";
        assert_eq!(
            normalize_content(raw, "Groq").unwrap(),
            "Parses `</thinking>` markers."
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip_reasoning("  a < b && c > d  "), "a < b && c > d");
    }

    #[test]
    fn test_normalize_reasoning_only() {
        let err = normalize_content("<think>only thoughts</think>  ", "Groq").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ReasoningOnly);
    }

    #[test]
    fn test_normalize_blank_is_empty_response() {
        let err = normalize_content("   \n", "Gemini").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::EmptyResponse);
        assert_eq!(err.message(), "Gemini returned no content. Please try again.");
    }

    #[test]
    fn test_normalize_success() {
        assert_eq!(
            normalize_content("<think>x</think> Done. ", "Groq").unwrap(),
            "Done."
        );
    }
}
