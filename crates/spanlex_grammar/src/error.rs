//! Error types raised outside rule application.

use crate::LexerState;

/// A rule could not be constructed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GrammarError {
    /// A literal rule was given an empty string.
    #[error("literal rules must match at least one character")]
    EmptyLiteral,

    /// `keyword` was called for a word the kind table does not map.
    #[error("no token kind registered for keyword `{0}`")]
    MissingKeywordKind(String),

    /// `ch` was called for a character the kind table does not map.
    #[error("no token kind registered for character {0:?}")]
    MissingCharKind(char),

    /// The regex failed to compile or exceeded its size limits.
    #[error("invalid pattern `{pattern}`: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A finished run that did not consume its whole input.
///
/// For a run that ended in [`LexerState::Match`] the position is the first
/// byte no rule consumed. For [`LexerState::NoMatch`] it is where the
/// failing entry rule started, since failure discards everything the rule
/// attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at {line}:{column}", reason = .state.rejection_reason())]
pub struct RejectedDocument {
    /// Terminal state of the run.
    pub state: LexerState,
    /// Byte offset of the rejection.
    pub offset: usize,
    /// 1-based line of `offset`.
    pub line: usize,
    /// 1-based column of `offset`, in characters.
    pub column: usize,
}
