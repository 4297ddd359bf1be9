//! Rules: pure functions from one lexer to the next.

use std::fmt;
use std::ops::RangeBounds;
use std::sync::Arc;

use crate::{combinators, Lexer};

/// Token kind of a grammar.
///
/// Blanket-implemented; any small, comparable, thread-safe value works,
/// typically a fieldless enum.
pub trait Kind: Copy + Eq + fmt::Debug + Send + Sync + 'static {}

impl<T: Copy + Eq + fmt::Debug + Send + Sync + 'static> Kind for T {}

type RuleFn<K> = dyn for<'src> Fn(Lexer<'src, K>) -> Lexer<'src, K> + Send + Sync;

/// A grammar rule.
///
/// Rules are shared closures: cloning one is a reference-count increment,
/// and the same rule value can be applied to any number of lexers, over any
/// source, from any thread.
pub struct Rule<K> {
    name: Option<&'static str>,
    apply: Arc<RuleFn<K>>,
}

impl<K: Kind> Rule<K> {
    /// Rule from a function.
    pub fn new<F>(apply: F) -> Self
    where
        F: for<'src> Fn(Lexer<'src, K>) -> Lexer<'src, K> + Send + Sync + 'static,
    {
        Rule {
            name: None,
            apply: Arc::new(apply),
        }
    }

    /// Apply the rule.
    #[inline]
    pub fn apply<'src>(&self, lexer: Lexer<'src, K>) -> Lexer<'src, K> {
        (self.apply)(lexer)
    }

    /// Name given by [`named`](combinators::named), if any.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub(crate) fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// `self`, then `next`. See [`combinators::sequence`].
    #[must_use]
    pub fn then(self, next: Rule<K>) -> Rule<K> {
        combinators::sequence(self, next)
    }

    /// `self`, or else `alternative`. See [`combinators::choice`].
    #[must_use]
    pub fn or(self, alternative: Rule<K>) -> Rule<K> {
        combinators::choice(self, alternative)
    }

    /// Zero or one `self`. See [`combinators::option`].
    #[must_use]
    pub fn optional(self) -> Rule<K> {
        combinators::option(self)
    }

    /// `self` repeated within `bounds`. See [`combinators::repeat`].
    #[must_use]
    pub fn repeated(self, bounds: impl RangeBounds<usize>) -> Rule<K> {
        combinators::repeat(self, bounds)
    }

    /// `self` with a name for tracing. See [`combinators::named`].
    #[must_use]
    pub fn named(self, name: &'static str) -> Rule<K> {
        combinators::named(name, self)
    }
}

impl<K> Clone for Rule<K> {
    fn clone(&self) -> Self {
        Rule {
            name: self.name,
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<K> fmt::Debug for Rule<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "Rule({name})"),
            None => write!(f, "Rule(<anonymous>)"),
        }
    }
}
