//! The immutable lexer automaton.

use std::fmt;

use spanlex_core::{SourceSpan, SourceText, TextSpan};
use tracing::{debug, trace};

use crate::token::TokenStack;
use crate::{Kind, RejectedDocument, Rule, Token};

/// Run state of a [`Lexer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexerState {
    /// Input remains and the last step succeeded (or nothing ran yet).
    Match,
    /// All input has been consumed.
    Done,
    /// A rule failed. Terminal unless an enclosing choice recovers.
    NoMatch,
}

impl LexerState {
    pub(crate) fn rejection_reason(self) -> &'static str {
        match self {
            LexerState::Match => "unexpected input",
            LexerState::Done => "accepted",
            LexerState::NoMatch => "no rule matched",
        }
    }
}

impl fmt::Display for LexerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerState::Match => write!(f, "match"),
            LexerState::Done => write!(f, "done"),
            LexerState::NoMatch => write!(f, "no match"),
        }
    }
}

/// Immutable tokenization state over a borrowed [`SourceText`].
///
/// Every operation consumes a lexer and returns the next one. Cloning is
/// O(1): the token list is shared, so a clone taken before an attempt is a
/// complete backtracking checkpoint.
pub struct Lexer<'src, K> {
    remaining: SourceSpan<'src>,
    tokens: TokenStack<'src, K>,
    state: LexerState,
}

impl<'src, K: Kind> Lexer<'src, K> {
    /// Lexer at the start of `source` with no tokens.
    ///
    /// The state is [`LexerState::Match`] for non-empty input and
    /// [`LexerState::Done`] for empty input.
    pub fn new(source: &'src SourceText) -> Self {
        Lexer {
            remaining: SourceSpan::full(source),
            tokens: TokenStack::new(),
            state: if source.is_empty() {
                LexerState::Done
            } else {
                LexerState::Match
            },
        }
    }

    /// Apply `rule` to a fresh lexer over `source`.
    pub fn tokenize(source: &'src SourceText, rule: &Rule<K>) -> Self {
        debug!(len = source.len(), rule = ?rule, "tokenize");
        let lexer = rule.apply(Lexer::new(source));
        debug!(
            state = %lexer.state,
            tokens = lexer.tokens.len(),
            at = lexer.position(),
            "tokenized"
        );
        lexer
    }

    #[inline]
    pub fn state(&self) -> LexerState {
        self.state
    }

    #[inline]
    pub fn is_no_match(&self) -> bool {
        self.state == LexerState::NoMatch
    }

    /// Returns `true` once all input is consumed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == LexerState::Done
    }

    /// The unconsumed window.
    #[inline]
    pub fn remaining(&self) -> SourceSpan<'src> {
        self.remaining
    }

    /// Byte offset of the first unconsumed character.
    #[inline]
    pub fn position(&self) -> usize {
        self.remaining.start()
    }

    #[inline]
    pub fn source(&self) -> &'src SourceText {
        self.remaining.source()
    }

    /// Tokens produced so far, in order.
    pub fn tokens(&self) -> Vec<Token<'src, K>> {
        self.tokens.to_vec()
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The most recent token.
    pub fn last_token(&self) -> Option<Token<'src, K>> {
        self.tokens.last()
    }

    /// This lexer, failed. Nothing else changes.
    #[must_use]
    pub fn no_match(self) -> Self {
        Lexer {
            state: LexerState::NoMatch,
            ..self
        }
    }

    /// Run a span matcher on the remaining window.
    ///
    /// On a match, the matched span becomes a token of `kind` and the window
    /// advances past it; the state becomes `Done` when nothing is left. On no
    /// match the lexer is returned unchanged apart from the `NoMatch` state.
    /// A lexer that already failed is passed through.
    #[must_use]
    pub fn match_span(
        self,
        matcher: impl FnOnce(SourceSpan<'src>) -> Option<TextSpan>,
        kind: K,
    ) -> Self {
        if self.is_no_match() {
            return self;
        }
        let Some(span) = matcher(self.remaining).filter(|span| !span.is_empty()) else {
            trace!(at = self.position(), ?kind, "no match");
            return self.no_match();
        };
        debug_assert!(
            span.start == self.remaining.start() && self.remaining.span().contains_span(span),
            "matcher returned {span:?} outside the window {:?}",
            self.remaining.span()
        );

        let token = Token::new(span, kind, self.source());
        trace!(?token, "match");
        let remaining = self.remaining.trim_start(span.len());
        Lexer {
            remaining,
            tokens: self.tokens.push(token),
            state: if remaining.is_empty() {
                LexerState::Done
            } else {
                LexerState::Match
            },
        }
    }

    /// The tokens of an accepted run.
    ///
    /// Only a `Done` lexer is accepted. `Match` (input left over) and
    /// `NoMatch` are reported as a [`RejectedDocument`] at the current
    /// position.
    pub fn into_document(self) -> Result<Vec<Token<'src, K>>, RejectedDocument> {
        if self.is_done() {
            return Ok(self.tokens());
        }
        let offset = self.position();
        let (line, column) = self.source().line_col(offset);
        Err(RejectedDocument {
            state: self.state,
            offset,
            line,
            column,
        })
    }
}

impl<K> Clone for Lexer<'_, K> {
    fn clone(&self) -> Self {
        Lexer {
            remaining: self.remaining,
            tokens: self.tokens.clone(),
            state: self.state,
        }
    }
}

/// Lexers are equal when they share a source buffer, stand at the same
/// window in the same state and hold equal tokens.
impl<K: Kind> PartialEq for Lexer<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source(), other.source())
            && self.remaining.span() == other.remaining.span()
            && self.state == other.state
            && self.tokens.len() == other.tokens.len()
            && self.tokens() == other.tokens()
    }
}

impl<K: Kind> fmt::Debug for Lexer<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("state", &self.state)
            .field("tokens", &self.tokens.len())
            .field("remaining", &self.remaining)
            .finish()
    }
}
