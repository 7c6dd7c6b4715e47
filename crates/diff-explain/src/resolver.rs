//! Map a selection in one pane to the same lines of the other pane.
//!
//! Alignment is by line number only. No diff is computed here: the text at
//! lines `start..=end` of the target pane is the counterpart, whatever it is.

use crate::model::{LineRange, TextRange};
use crate::traits::LineSource;

/// The clamped line range of `target` aligned to `start_line..=end_line` of
/// `source`, or `None` if the target has no such lines.
///
/// A reversed range is swapped. The end line is clamped to the source first
/// (a selection cannot extend past its own pane), then to the target.
pub fn counterpart_range(
    source: &dyn LineSource,
    target: &dyn LineSource,
    start_line: u32,
    end_line: u32,
) -> Option<LineRange> {
    let requested = LineRange::new(start_line.max(1), end_line.max(1));
    let end = requested.end.min(source.line_count()).max(requested.start);

    if requested.start > target.line_count() {
        return None;
    }

    Some(LineRange::new(
        requested.start,
        end.min(target.line_count()),
    ))
}

/// Full-width text of `target` at the lines aligned to the selection.
///
/// Never fails: returns an empty string when the target has fewer lines than
/// the selection's start line.
pub fn resolve_counterpart(
    source: &dyn LineSource,
    target: &dyn LineSource,
    start_line: u32,
    end_line: u32,
) -> String {
    match counterpart_range(source, target, start_line, end_line) {
        Some(range) => {
            let text = target.value_in_range(&TextRange::new(
                range.start,
                1,
                range.end,
                target.max_column(range.end),
            ));
            log::debug!(
                "Resolved counterpart for {} ({} chars)",
                range.label(),
                text.chars().count()
            );
            text
        }
        None => {
            log::debug!(
                "No counterpart: start line {} beyond target ({} lines)",
                start_line.min(end_line),
                target.line_count()
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaneText;
    use pretty_assertions::assert_eq;

    fn pane(lines: &[&str]) -> PaneText {
        PaneText::new(lines.join("\n"))
    }

    #[test]
    fn test_same_lines_of_other_pane() {
        let source = pane(&["a", "b", "c", "d"]);
        let target = pane(&["A", "B", "C", "D"]);
        assert_eq!(resolve_counterpart(&source, &target, 2, 3), "B\nC");
    }

    #[test]
    fn test_start_beyond_target_is_empty() {
        let source = pane(&["1", "2", "3", "4", "5", "6"]);
        let target = pane(&["x", "y"]);
        assert_eq!(resolve_counterpart(&source, &target, 3, 6), "");
        assert_eq!(counterpart_range(&source, &target, 3, 6), None);
    }

    #[test]
    fn test_end_clamped_to_target() {
        let source = pane(&["1", "2", "3", "4", "5"]);
        let target = pane(&["x", "y", "z"]);
        assert_eq!(resolve_counterpart(&source, &target, 2, 5), "y\nz");
        assert_eq!(
            counterpart_range(&source, &target, 2, 5),
            Some(LineRange::new(2, 3))
        );
    }

    #[test]
    fn test_end_clamped_to_source() {
        let source = pane(&["1", "2"]);
        let target = pane(&["a", "b", "c", "d"]);
        assert_eq!(
            counterpart_range(&source, &target, 1, 10),
            Some(LineRange::new(1, 2))
        );
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let source = pane(&["1", "2", "3"]);
        let target = pane(&["a", "b", "c"]);
        assert_eq!(resolve_counterpart(&source, &target, 3, 1), "a\nb\nc");
    }

    #[test]
    fn test_full_width_lines() {
        let source = pane(&["x"]);
        let target = pane(&["    return a + b;"]);
        assert_eq!(
            resolve_counterpart(&source, &target, 1, 1),
            "    return a + b;"
        );
    }

    #[test]
    fn test_empty_target() {
        let source = pane(&["1", "2"]);
        let target = PaneText::new("");
        // An empty pane still has one empty line
        assert_eq!(resolve_counterpart(&source, &target, 1, 2), "");
        assert_eq!(resolve_counterpart(&source, &target, 2, 2), "");
    }
}
