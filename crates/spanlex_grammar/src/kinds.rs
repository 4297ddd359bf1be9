//! Explicit token-kind table for rules that do not name their kind.

use rustc_hash::FxHashMap;

use crate::{GrammarError, Kind};

/// Kinds for `eol`, `keyword` and unkinded `ch` rules.
///
/// The end-of-line kind is required up front. Keyword and character kinds
/// are registered one by one; asking a [`Grammar`](crate::Grammar) for a
/// rule whose kind was never registered is a construction error.
///
/// ```
/// use spanlex_grammar::KindTable;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Kind { EndOfLine, ClassKeyword, OpenParen }
///
/// let kinds = KindTable::new(Kind::EndOfLine)
///     .with_keyword("class", Kind::ClassKeyword)
///     .with_char('(', Kind::OpenParen);
///
/// assert_eq!(kinds.keyword("CLASS"), Ok(Kind::ClassKeyword));
/// assert!(kinds.char(')').is_err());
/// ```
#[derive(Clone, Debug)]
pub struct KindTable<K> {
    end_of_line: K,
    keywords: FxHashMap<String, K>,
    chars: FxHashMap<char, K>,
}

impl<K: Kind> KindTable<K> {
    pub fn new(end_of_line: K) -> Self {
        KindTable {
            end_of_line,
            keywords: FxHashMap::default(),
            chars: FxHashMap::default(),
        }
    }

    /// Register the kind of `word`. Lookups ignore case.
    #[must_use]
    pub fn with_keyword(mut self, word: &str, kind: K) -> Self {
        self.keywords.insert(word.to_lowercase(), kind);
        self
    }

    /// Register the kind of the character `ch`.
    #[must_use]
    pub fn with_char(mut self, ch: char, kind: K) -> Self {
        self.chars.insert(ch, kind);
        self
    }

    #[inline]
    pub fn end_of_line(&self) -> K {
        self.end_of_line
    }

    pub fn keyword(&self, word: &str) -> Result<K, GrammarError> {
        self.keywords
            .get(&word.to_lowercase())
            .copied()
            .ok_or_else(|| GrammarError::MissingKeywordKind(word.to_owned()))
    }

    pub fn char(&self, ch: char) -> Result<K, GrammarError> {
        self.chars
            .get(&ch)
            .copied()
            .ok_or(GrammarError::MissingCharKind(ch))
    }
}
