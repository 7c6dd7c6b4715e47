//! The two panes of a diff and their text.

use crate::model::TextRange;
use crate::traits::LineSource;

/// Which pane of the diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaneSide {
    /// Left pane, the text before the change.
    Original,
    /// Right pane, the text after the change.
    #[default]
    Modified,
}

impl PaneSide {
    /// The opposite pane.
    pub fn other(&self) -> Self {
        match self {
            PaneSide::Original => PaneSide::Modified,
            PaneSide::Modified => PaneSide::Original,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaneSide::Original => "original",
            PaneSide::Modified => "modified",
        }
    }
}

/// The text of one pane, split into lines.
///
/// Line endings are normalized: `\r\n` counts as a single break and the `\r`
/// is not part of the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaneText {
    text: String,
    lines: Vec<String>,
}

impl PaneText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { text, lines }
    }

    /// The full text as supplied.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the pane holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// A single line (1-indexed).
    pub fn line(&self, line: u32) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }

    /// Clamp a position into the text.
    fn clamp_position(&self, line: u32, column: u32) -> (u32, u32) {
        let line = line.clamp(1, self.line_count());
        let column = column.clamp(1, self.max_column(line));
        (line, column)
    }
}

impl LineSource for PaneText {
    fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    fn max_column(&self, line: u32) -> u32 {
        self.line(line)
            .map(|text| text.chars().count() as u32 + 1)
            .unwrap_or(1)
    }

    fn value_in_range(&self, range: &TextRange) -> String {
        let range = range.normalized();
        let (start_line, start_column) = self.clamp_position(range.start_line, range.start_column);
        let (end_line, end_column) = self.clamp_position(range.end_line, range.end_column);

        let line_text = |line: u32| self.line(line).unwrap_or_default();

        if start_line == end_line {
            return char_slice(line_text(start_line), start_column - 1, end_column - 1);
        }

        let mut out = char_slice(line_text(start_line), start_column - 1, u32::MAX);
        for line in start_line + 1..end_line {
            out.push('\n');
            out.push_str(line_text(line));
        }
        out.push('\n');
        out.push_str(&char_slice(line_text(end_line), 0, end_column - 1));
        out
    }
}

/// Characters `from..to` of `text` (character indices, not bytes).
fn char_slice(text: &str, from: u32, to: u32) -> String {
    text.chars()
        .skip(from as usize)
        .take(to.saturating_sub(from) as usize)
        .collect()
}

/// Line-count statistics between the two panes.
///
/// Counts only; computing an actual diff is left to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub original_lines: u32,
    pub modified_lines: u32,
    pub added: u32,
    pub removed: u32,
    pub total_changes: u32,
}

/// Both panes of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffDocument {
    original: PaneText,
    modified: PaneText,
}

impl DiffDocument {
    pub fn new(original: impl Into<String>, modified: impl Into<String>) -> Self {
        Self {
            original: PaneText::new(original),
            modified: PaneText::new(modified),
        }
    }

    /// The pane on `side`.
    pub fn pane(&self, side: PaneSide) -> &PaneText {
        match side {
            PaneSide::Original => &self.original,
            PaneSide::Modified => &self.modified,
        }
    }

    /// Replace the text of one pane.
    pub fn set_text(&mut self, side: PaneSide, text: impl Into<String>) {
        let pane = PaneText::new(text);
        match side {
            PaneSide::Original => self.original = pane,
            PaneSide::Modified => self.modified = pane,
        }
    }

    /// Exchange the two panes.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.original, &mut self.modified);
    }

    /// Empty both panes.
    pub fn reset(&mut self) {
        self.original = PaneText::default();
        self.modified = PaneText::default();
    }

    /// Whether either pane has any non-whitespace text.
    pub fn has_content(&self) -> bool {
        !self.original.is_blank() || !self.modified.is_blank()
    }

    pub fn stats(&self) -> DiffStats {
        let original_lines = self.original.line_count();
        let modified_lines = self.modified.line_count();
        let added = modified_lines.saturating_sub(original_lines);
        let removed = original_lines.saturating_sub(modified_lines);
        DiffStats {
            original_lines,
            modified_lines,
            added,
            removed,
            total_changes: added + removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_other_side() {
        assert_eq!(PaneSide::Original.other(), PaneSide::Modified);
        assert_eq!(PaneSide::Modified.other(), PaneSide::Original);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(PaneText::new("").line_count(), 1);
        assert_eq!(PaneText::new("a\nb").line_count(), 2);
        assert_eq!(PaneText::new("a\nb\n").line_count(), 3);
        assert_eq!(PaneText::new("a\r\nb").line(1), Some("a"));
    }

    #[test]
    fn test_max_column_counts_chars() {
        let pane = PaneText::new("héllo\n\nx");
        assert_eq!(pane.max_column(1), 6);
        assert_eq!(pane.max_column(2), 1);
        assert_eq!(pane.max_column(9), 1);
    }

    #[test]
    fn test_value_in_range_single_line() {
        let pane = PaneText::new("let total = a + b;");
        assert_eq!(pane.value_in_range(&TextRange::new(1, 5, 1, 10)), "total");
    }

    #[test]
    fn test_value_in_range_multi_line() {
        let pane = PaneText::new("fn add() {\n    a + b\n}");
        let range = TextRange::new(1, 4, 3, 2);
        assert_eq!(pane.value_in_range(&range), "add() {\n    a + b\n}");
    }

    #[test]
    fn test_value_in_range_clamps() {
        let pane = PaneText::new("one\ntwo");
        let range = TextRange::new(1, 1, 40, 99);
        assert_eq!(pane.value_in_range(&range), "one\ntwo");
    }

    #[test]
    fn test_value_in_range_backwards() {
        let pane = PaneText::new("one\ntwo");
        assert_eq!(pane.value_in_range(&TextRange::new(2, 4, 1, 2)), "ne\ntwo");
    }

    #[test]
    fn test_swap_and_reset() {
        let mut doc = DiffDocument::new("old", "new");
        doc.swap();
        assert_eq!(doc.pane(PaneSide::Original).text(), "new");
        assert_eq!(doc.pane(PaneSide::Modified).text(), "old");

        doc.reset();
        assert!(!doc.has_content());
    }

    #[test]
    fn test_stats() {
        let doc = DiffDocument::new("a\nb", "a\nb\nc\nd");
        assert_eq!(
            doc.stats(),
            DiffStats {
                original_lines: 2,
                modified_lines: 4,
                added: 2,
                removed: 0,
                total_changes: 2,
            }
        );
    }
}
