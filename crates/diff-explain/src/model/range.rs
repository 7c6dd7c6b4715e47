//! Positions and ranges inside a pane.
//!
//! Lines and columns are 1-indexed. A [`TextRange`] end column is exclusive,
//! so the full width of line `n` ends at `max_column(n)`.

/// A character range inside a pane, in editor coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl TextRange {
    /// Create a range from raw coordinates.
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Whether the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start_line == self.end_line && self.start_column == self.end_column
    }

    /// The same range with start before end.
    ///
    /// Editors report backwards selections (dragged upwards) with the anchor as
    /// the start; callers never need to care.
    pub fn normalized(&self) -> Self {
        if (self.end_line, self.end_column) < (self.start_line, self.start_column) {
            Self::new(
                self.end_line,
                self.end_column,
                self.start_line,
                self.start_column,
            )
        } else {
            *self
        }
    }

    /// The whole lines this range touches.
    pub fn lines(&self) -> LineRange {
        let range = self.normalized();
        LineRange::new(range.start_line, range.end_line)
    }
}

/// An inclusive range of whole lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    /// Create a line range, swapping the bounds if they are reversed.
    pub fn new(start: u32, end: u32) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Number of lines covered.
    pub fn line_count(&self) -> u32 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Human-readable label, e.g. "line 4" or "lines 4-9".
    pub fn label(&self) -> String {
        if self.start == self.end {
            format!("line {}", self.start)
        } else {
            format!("lines {}-{}", self.start, self.end)
        }
    }
}
