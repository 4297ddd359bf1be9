//! A window over a [`SourceText`] and the primitive matchers on it.
//!
//! All matchers look at the window start only. A successful match is a
//! non-empty [`TextSpan`] beginning at the window start; anything else,
//! including an empty window, is `None`.

use std::fmt;

use crate::{AnchoredRegex, SourceText, TextSpan};

/// A borrowed source buffer paired with the window still to be matched.
///
/// `SourceSpan` is [`Copy`]; advancing produces a new value.
#[derive(Clone, Copy)]
pub struct SourceSpan<'src> {
    source: &'src SourceText,
    span: TextSpan,
}

impl<'src> SourceSpan<'src> {
    /// Window `span` over `source`.
    ///
    /// # Contract
    ///
    /// `span` must lie within the buffer and on `char` boundaries.
    pub fn new(source: &'src SourceText, span: TextSpan) -> Self {
        debug_assert!(
            span.end <= source.len(),
            "span {span:?} exceeds source length {}",
            source.len()
        );
        debug_assert!(
            source.as_str().is_char_boundary(span.start)
                && source.as_str().is_char_boundary(span.end),
            "span {span:?} does not fall on char boundaries"
        );
        SourceSpan { source, span }
    }

    /// Window over the whole buffer.
    pub fn full(source: &'src SourceText) -> Self {
        SourceSpan {
            source,
            span: source.full_span(),
        }
    }

    #[inline]
    pub fn source(&self) -> &'src SourceText {
        self.source
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        self.span
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Text of the window.
    #[inline]
    pub fn text(&self) -> &'src str {
        self.source.slice(self.span)
    }

    /// Drop the first `n` bytes of the window.
    #[must_use]
    pub fn trim_start(self, n: usize) -> Self {
        SourceSpan {
            source: self.source,
            span: self.span.trim_start(n),
        }
    }

    /// The current line: window text up to the next `\n`.
    ///
    /// The newline is excluded, as is a `\r` directly before it. Without a
    /// newline the whole window is the line.
    pub fn line(&self) -> TextSpan {
        let text = self.text();
        match memchr::memchr(b'\n', text.as_bytes()) {
            Some(newline) => {
                let len = if text[..newline].ends_with('\r') {
                    newline - 1
                } else {
                    newline
                };
                TextSpan::with_len(self.span.start, len)
            }
            None => self.span,
        }
    }

    /// One character, if the window starts with `ch`.
    pub fn starts_with_char(&self, ch: char) -> Option<TextSpan> {
        self.text()
            .starts_with(ch)
            .then_some(TextSpan::with_len(self.span.start, ch.len_utf8()))
    }

    /// `literal`, if the window starts with it. Case-sensitive.
    ///
    /// An empty literal never matches.
    pub fn starts_with_str(&self, literal: &str) -> Option<TextSpan> {
        (!literal.is_empty() && self.text().starts_with(literal))
            .then_some(TextSpan::with_len(self.span.start, literal.len()))
    }

    /// The longest run of characters satisfying `predicate`.
    ///
    /// An empty run is `None`.
    pub fn matches_predicate(&self, predicate: impl Fn(char) -> bool) -> Option<TextSpan> {
        let text = self.text();
        let len = text
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(text.len(), |(i, _)| i);
        (len > 0).then_some(TextSpan::with_len(self.span.start, len))
    }

    /// The match of `regex` on the current line.
    ///
    /// The regex only sees [`line()`](Self::line), so it can never consume a
    /// line terminator. Empty matches are `None`.
    pub fn matches_regex(&self, regex: &AnchoredRegex) -> Option<TextSpan> {
        let line = self.source.slice(self.line());
        regex
            .prefix_len(line)
            .map(|len| TextSpan::with_len(self.span.start, len))
    }
}

impl fmt::Debug for SourceSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.span, self.text())
    }
}

impl fmt::Display for SourceSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
