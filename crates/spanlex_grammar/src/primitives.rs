//! Rules that consume text.
//!
//! Each primitive wraps one span matcher from `spanlex_core` and produces at
//! most one non-empty token. Primitives whose kind comes from a
//! [`KindTable`](crate::KindTable), or whose pattern is compiled under
//! [`RegexLimits`](spanlex_core::RegexLimits), are built through
//! [`Grammar`](crate::Grammar) instead.

use spanlex_core::AnchoredRegex;

use crate::{GrammarError, Kind, Rule};

/// Exactly `text`, case-sensitive.
///
/// An empty `text` is rejected: it would match without consuming.
pub fn literal<K: Kind>(text: &str, kind: K) -> Result<Rule<K>, GrammarError> {
    if text.is_empty() {
        return Err(GrammarError::EmptyLiteral);
    }
    let text = text.to_owned();
    Ok(Rule::new(move |lexer| {
        lexer.match_span(|span| span.starts_with_str(&text), kind)
    }))
}

/// Exactly the character `ch`.
pub fn ch<K: Kind>(ch: char, kind: K) -> Rule<K> {
    Rule::new(move |lexer| lexer.match_span(|span| span.starts_with_char(ch), kind))
}

/// The longest non-empty run of characters satisfying `predicate`.
pub fn predicate<K, P>(predicate: P, kind: K) -> Rule<K>
where
    K: Kind,
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    Rule::new(move |lexer| lexer.match_span(|span| span.matches_predicate(&predicate), kind))
}

/// One or more spaces or tabs. Never a line break.
pub fn whitespace<K: Kind>(kind: K) -> Rule<K> {
    predicate(|c| c == ' ' || c == '\t', kind)
}

/// A non-empty match of an already compiled, anchored regex on the current
/// line.
pub fn regex<K: Kind>(regex: AnchoredRegex, kind: K) -> Rule<K> {
    Rule::new(move |lexer| lexer.match_span(|span| span.matches_regex(&regex), kind))
}
