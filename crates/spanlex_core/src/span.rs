//! Half-open byte ranges over a source buffer.

use std::fmt;

/// A half-open range `[start, end)` of byte offsets into a [`SourceText`].
///
/// Spans carry no reference to their buffer; pair them with one through
/// [`SourceSpan`] or [`SourceText::slice`].
///
/// [`SourceText`]: crate::SourceText
/// [`SourceText::slice`]: crate::SourceText::slice
/// [`SourceSpan`]: crate::SourceSpan
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    /// Empty span at offset zero.
    pub const EMPTY: TextSpan = TextSpan { start: 0, end: 0 };

    /// Create a span from its bounds.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed its end");
        TextSpan { start, end }
    }

    /// Create a span from a start offset and a length.
    #[inline]
    pub const fn with_len(start: usize, len: usize) -> Self {
        TextSpan {
            start,
            end: start + len,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub fn contains_span(&self, other: TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Drop the first `n` bytes of the span.
    ///
    /// `n` saturates at the span length, so the result is never inverted.
    #[inline]
    #[must_use]
    pub fn trim_start(self, n: usize) -> TextSpan {
        TextSpan {
            start: (self.start + n).min(self.end),
            end: self.end,
        }
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: TextSpan) -> TextSpan {
        TextSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for TextSpan {
    fn from(range: std::ops::Range<usize>) -> Self {
        TextSpan::new(range.start, range.end)
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
