//! Immutable, shareable source buffer with line decomposition.
//!
//! [`SourceText`] is the only owner of text in a tokenization run. Spans,
//! tokens and lexers refer back to it; none of them copy it. Cloning a
//! `SourceText` clones two `Arc`s, so independent runs on different threads
//! can share one buffer.

use std::fmt;
use std::sync::Arc;

use crate::TextSpan;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Immutable source text with a pre-computed line offset table.
#[derive(Clone)]
pub struct SourceText {
    text: Arc<str>,
    lines: Arc<LineOffsetTable>,
}

impl SourceText {
    /// Create a source buffer from text.
    ///
    /// A leading byte order mark is dropped, so offset 0 is the first
    /// character of content. Scans the text once to build the line table.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let mut text = text.into();
        if let Some(rest) = text.strip_prefix(BYTE_ORDER_MARK) {
            text = Arc::from(rest);
        }
        let lines = Arc::new(LineOffsetTable::build(&text));
        SourceText { text, lines }
    }

    /// The full text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Span covering the whole text.
    #[inline]
    pub fn full_span(&self) -> TextSpan {
        TextSpan::new(0, self.text.len())
    }

    /// Text covered by `span`.
    ///
    /// Returns an empty string when the span lies outside the buffer or does
    /// not fall on `char` boundaries. Spans produced by the matchers in this
    /// crate always satisfy both.
    pub fn slice(&self, span: TextSpan) -> &str {
        self.text.get(span.to_range()).unwrap_or_default()
    }

    /// The line offset table.
    #[inline]
    pub fn lines(&self) -> &LineOffsetTable {
        &self.lines
    }

    /// 1-based (line, column) of a byte offset. Columns count characters.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        self.lines.offset_to_line_col(&self.text, offset)
    }

    /// Number of lines in the text. An empty text has one (empty) line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceText")
            .field("len", &self.len())
            .field("lines", &self.line_count())
            .finish()
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        SourceText::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        SourceText::new(text)
    }
}

/// Pre-computed line offset table for efficient line/column lookup.
///
/// Builds a table of byte offsets for each line start, enabling O(log L)
/// binary search lookups instead of O(n) linear scans.
///
/// ```
/// use spanlex_core::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i + 1));
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: usize) -> usize {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        line_idx + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column is the number of characters (not bytes) from the start of
    /// the line, plus one.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get(line - 1).copied().unwrap_or(0);
        let col_text = source
            .get(line_start..offset.min(source.len()))
            .unwrap_or_default();
        (line, col_text.chars().count() + 1)
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

#[cfg(test)]
mod tests;
