use spanlex_grammar::{GrammarError, RejectedDocument};

/// Failure to read an INI document.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum IniError {
    /// The built-in grammar failed to build.
    #[error("INI grammar is invalid: {0}")]
    Grammar(#[from] GrammarError),

    /// The text is not a well-formed INI document.
    #[error("not a valid INI document: {0}")]
    Rejected(#[from] RejectedDocument),
}
