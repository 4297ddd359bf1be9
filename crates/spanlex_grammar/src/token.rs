//! Tokens and the persistent token list carried by a lexer.

use std::fmt;
use std::sync::Arc;

use spanlex_core::{SourceText, TextSpan};

/// A classified slice of source text.
///
/// Tokens borrow their source; [`text`](Self::text) re-slices it on every
/// call instead of storing a copy.
#[derive(Clone, Copy)]
pub struct Token<'src, K> {
    span: TextSpan,
    kind: K,
    source: &'src SourceText,
}

impl<'src, K: Copy> Token<'src, K> {
    pub fn new(span: TextSpan, kind: K, source: &'src SourceText) -> Self {
        Token { span, kind, source }
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        self.span
    }

    #[inline]
    pub fn kind(&self) -> K {
        self.kind
    }

    #[inline]
    pub fn source(&self) -> &'src SourceText {
        self.source
    }

    /// The token's text.
    #[inline]
    pub fn text(&self) -> &'src str {
        self.source.slice(self.span)
    }
}

/// Tokens are equal when they cover the same span of the same buffer with
/// the same kind.
impl<K: PartialEq> PartialEq for Token<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span
            && self.kind == other.kind
            && std::ptr::eq(self.source, other.source)
    }
}

impl<K: Eq> Eq for Token<'_, K> {}

impl<K: Copy + fmt::Debug> fmt::Debug for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{:?}}}, {:?}", self.span, self.text(), self.kind)
    }
}

impl<K: Copy> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Persistent stack of tokens, newest on top.
///
/// Pushing shares the existing nodes, so a lexer snapshot taken before an
/// attempt costs one reference-count increment, and the snapshot is left
/// untouched by whatever the attempt pushes.
pub(crate) struct TokenStack<'src, K> {
    head: Option<Arc<Node<'src, K>>>,
    len: usize,
}

struct Node<'src, K> {
    token: Token<'src, K>,
    below: Option<Arc<Node<'src, K>>>,
}

impl<'src, K: Copy> TokenStack<'src, K> {
    pub(crate) fn new() -> Self {
        TokenStack { head: None, len: 0 }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub(crate) fn push(&self, token: Token<'src, K>) -> Self {
        TokenStack {
            head: Some(Arc::new(Node {
                token,
                below: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub(crate) fn last(&self) -> Option<Token<'src, K>> {
        self.head.as_ref().map(|node| node.token)
    }

    /// Tokens newest first.
    pub(crate) fn iter_rev(&self) -> impl Iterator<Item = Token<'src, K>> + '_ {
        std::iter::successors(self.head.as_deref(), |&node| node.below.as_deref())
            .map(|node| node.token)
    }

    /// Tokens in production order.
    pub(crate) fn to_vec(&self) -> Vec<Token<'src, K>> {
        let mut tokens: Vec<_> = self.iter_rev().collect();
        tokens.reverse();
        tokens
    }
}

impl<K> Clone for TokenStack<'_, K> {
    fn clone(&self) -> Self {
        TokenStack {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

/// Unlinks uniquely owned nodes one at a time. The default recursive drop
/// would use one stack frame per token.
impl<K> Drop for TokenStack<'_, K> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.below.take(),
                Err(_) => break,
            }
        }
    }
}
