//! Read-only access to the text of one pane.

use crate::model::TextRange;

/// Line-addressed, read-only view of a pane's text.
///
/// Implemented by [`crate::model::PaneText`]; an embedding editor can
/// implement it directly over its own buffer model instead.
///
/// # Example
///
/// ```ignore
/// struct EditorModel<'a>(&'a Buffer);
///
/// impl LineSource for EditorModel<'_> {
///     fn line_count(&self) -> u32 {
///         self.0.line_count() as u32
///     }
///
///     fn max_column(&self, line: u32) -> u32 {
///         self.0.line_len(line) as u32 + 1
///     }
///
///     fn value_in_range(&self, range: &TextRange) -> String {
///         self.0.text_between(range.start_line, range.start_column, range.end_line, range.end_column)
///     }
/// }
/// ```
pub trait LineSource {
    /// Number of lines; an empty text still has one (empty) line.
    fn line_count(&self) -> u32;

    /// One past the last column of `line` (1-indexed).
    ///
    /// Returns 1 for an empty line or a line outside the text.
    fn max_column(&self, line: u32) -> u32;

    /// Text covered by `range`, lines joined with `\n`.
    ///
    /// Out-of-bounds coordinates are clamped to the text.
    fn value_in_range(&self, range: &TextRange) -> String;
}
