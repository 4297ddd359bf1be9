//! Rule construction that needs grammar-wide configuration.

use spanlex_core::{AnchoredRegex, RegexLimits};

use crate::combinators::{eof, one_of};
use crate::{primitives, GrammarError, Kind, KindTable, Rule};

/// Builder for rules that depend on the kind table or on regex limits.
///
/// A `Grammar` is only needed while rules are being built; the rules it
/// returns are self-contained.
#[derive(Clone, Debug)]
pub struct Grammar<K> {
    kinds: KindTable<K>,
    limits: RegexLimits,
}

impl<K: Kind> Grammar<K> {
    /// Grammar with default [`RegexLimits`].
    pub fn new(kinds: KindTable<K>) -> Self {
        Self::with_limits(kinds, RegexLimits::default())
    }

    pub fn with_limits(kinds: KindTable<K>, limits: RegexLimits) -> Self {
        Grammar { kinds, limits }
    }

    /// A non-empty match of `pattern` at the start of the current line.
    ///
    /// The pattern is compiled here, once. Invalid patterns and patterns
    /// over the size limits are errors.
    pub fn regex(&self, pattern: &str, kind: K) -> Result<Rule<K>, GrammarError> {
        let regex =
            AnchoredRegex::new(pattern, &self.limits).map_err(|source| GrammarError::Regex {
                pattern: pattern.to_owned(),
                source,
            })?;
        Ok(primitives::regex(regex, kind))
    }

    /// The character `ch`, with the kind registered for it.
    pub fn ch(&self, ch: char) -> Result<Rule<K>, GrammarError> {
        Ok(primitives::ch(ch, self.kinds.char(ch)?))
    }

    /// Exactly `word`, with the kind registered for it.
    ///
    /// Matching is case-sensitive even though the kind lookup is not.
    pub fn keyword(&self, word: &str) -> Result<Rule<K>, GrammarError> {
        primitives::literal(word, self.kinds.keyword(word)?)
    }

    /// End of input, `"\n"` or `"\r\n"`, tried in that order.
    pub fn eol(&self) -> Rule<K> {
        one_of([eof(), self.newline()])
    }

    /// `"\n"` or `"\r\n"`. Unlike [`eol`](Self::eol), fails at end of input.
    pub fn newline(&self) -> Rule<K> {
        let kind = self.kinds.end_of_line();
        one_of([primitives::ch('\n', kind), crlf(kind)])
    }
}

fn crlf<K: Kind>(kind: K) -> Rule<K> {
    Rule::new(move |lexer| lexer.match_span(|span| span.starts_with_str("\r\n"), kind))
}
