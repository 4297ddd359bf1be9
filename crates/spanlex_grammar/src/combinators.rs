//! Compound rules.
//!
//! Every combinator that can fail reports failure as the lexer it was given,
//! marked [`NoMatch`](LexerState::NoMatch). Tokens and progress made by a
//! failed attempt are dropped on the spot, which is what lets [`choice`]
//! retry an alternative from exactly where the first one started.

use std::ops::{Bound, RangeBounds};

use tracing::{trace, trace_span};

use crate::{Kind, LexerState, Rule};

/// `first`, then `second` on its result. Fails if either fails.
pub fn sequence<K: Kind>(first: Rule<K>, second: Rule<K>) -> Rule<K> {
    Rule::new(move |lexer| {
        let next = first.apply(lexer.clone());
        if next.is_no_match() {
            return lexer.no_match();
        }
        let next = second.apply(next);
        if next.is_no_match() {
            return lexer.no_match();
        }
        next
    })
}

/// Ordered choice: `first`, or `second` from the same starting point if
/// `first` fails.
pub fn choice<K: Kind>(first: Rule<K>, second: Rule<K>) -> Rule<K> {
    Rule::new(move |lexer| {
        let next = first.apply(lexer.clone());
        if next.is_no_match() {
            second.apply(lexer)
        } else {
            next
        }
    })
}

/// All of `rules` in order. An empty sequence succeeds without consuming.
pub fn seq<K: Kind>(rules: impl IntoIterator<Item = Rule<K>>) -> Rule<K> {
    let rules: Vec<Rule<K>> = rules.into_iter().collect();
    Rule::new(move |lexer| {
        let mut next = lexer.clone();
        for rule in &rules {
            next = rule.apply(next);
            if next.is_no_match() {
                return lexer.no_match();
            }
        }
        next
    })
}

/// The first of `rules` that succeeds. An empty choice always fails.
pub fn one_of<K: Kind>(rules: impl IntoIterator<Item = Rule<K>>) -> Rule<K> {
    let rules: Vec<Rule<K>> = rules.into_iter().collect();
    Rule::new(move |lexer| {
        for rule in &rules {
            let next = rule.apply(lexer.clone());
            if !next.is_no_match() {
                return next;
            }
        }
        lexer.no_match()
    })
}

/// Zero or one `rule`: on failure, the lexer is returned unchanged.
pub fn option<K: Kind>(rule: Rule<K>) -> Rule<K> {
    Rule::new(move |lexer| {
        let next = rule.apply(lexer.clone());
        if next.is_no_match() {
            lexer
        } else {
            next
        }
    })
}

/// Negative lookahead: succeeds, consuming nothing, iff `rule` would fail.
pub fn not<K: Kind>(rule: Rule<K>) -> Rule<K> {
    Rule::new(move |lexer| {
        if lexer.is_no_match() || !rule.apply(lexer.clone()).is_no_match() {
            lexer.no_match()
        } else {
            lexer
        }
    })
}

/// Succeeds, consuming nothing, iff all input has been consumed.
pub fn eof<K: Kind>() -> Rule<K> {
    Rule::new(|lexer| {
        if lexer.is_done() {
            lexer
        } else {
            lexer.no_match()
        }
    })
}

/// `rule`, traced as a `rule` span carrying `name`.
///
/// With a hierarchical subscriber the spans nest like the rule graph.
pub fn named<K: Kind>(name: &'static str, rule: Rule<K>) -> Rule<K> {
    Rule::new(move |lexer| {
        let span = trace_span!("rule", rule = name, at = lexer.position());
        let _guard = span.enter();
        let next = rule.apply(lexer);
        trace!(state = %next.state(), at = next.position(), "exit");
        next
    })
    .with_name(name)
}

/// `rule` applied as many times as it succeeds, up to the upper bound.
///
/// Repetition stops when the upper bound is reached, when a repetition
/// fails, or right after a repetition that leaves the lexer `Done` (the rule
/// is never re-applied to exhausted input). The result is the lexer after
/// the last successful repetition if at least the lower bound was reached;
/// otherwise the original lexer, failed, with every repetition's tokens
/// discarded.
///
/// A repetition that succeeds without consuming would succeed identically
/// forever, so it ends the loop and counts as meeting the lower bound.
///
/// An empty range (e.g. `3..=1`) never succeeds.
pub fn repeat<K: Kind>(rule: Rule<K>, bounds: impl RangeBounds<usize>) -> Rule<K> {
    let bounds = Repetitions::from_range(&bounds);
    Rule::new(move |lexer| {
        let Some(Repetitions { min, max }) = bounds else {
            return lexer.no_match();
        };
        if lexer.is_no_match() {
            return lexer;
        }

        let mut count = 0;
        let mut current = lexer.clone();
        let mut saturated = false;
        while count < max {
            let next = rule.apply(current.clone());
            match next.state() {
                LexerState::NoMatch => break,
                LexerState::Done => {
                    count += 1;
                    current = next;
                    break;
                }
                LexerState::Match if next.position() == current.position() => {
                    saturated = true;
                    break;
                }
                LexerState::Match => {
                    count += 1;
                    current = next;
                }
            }
        }

        trace!(count, min, saturated, at = current.position(), "repeat");
        if count >= min || saturated {
            current
        } else {
            lexer.no_match()
        }
    })
}

/// Inclusive repetition bounds; `None` for an empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Repetitions {
    min: usize,
    max: usize,
}

impl Repetitions {
    fn from_range(bounds: &impl RangeBounds<usize>) -> Option<Self> {
        let min = match bounds.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let max = match bounds.end_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.checked_sub(1)?,
            Bound::Unbounded => usize::MAX,
        };
        (min <= max).then_some(Repetitions { min, max })
    }
}
