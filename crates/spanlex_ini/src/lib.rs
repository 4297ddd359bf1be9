//! INI documents on top of `spanlex_grammar`.
//!
//! [`tokenize`] runs the INI grammar and returns the terminal lexer, so
//! callers can inspect tokens of rejected documents too. [`IniDocument`]
//! folds an accepted token stream into sections and entries.
//!
//! ```
//! use spanlex_core::SourceText;
//! use spanlex_ini::IniDocument;
//!
//! let source = SourceText::new("root = true\n\n[*.rs]\nindent_size = 4 # spaces\n");
//! let document = IniDocument::parse(&source)?;
//!
//! assert_eq!(document.get(None, "root"), Some("true"));
//! assert_eq!(document.get(Some("*.rs"), "indent_size"), Some("4"));
//! # Ok::<(), spanlex_ini::IniError>(())
//! ```

mod document;
mod error;
mod grammar;
mod syntax_kind;

pub use document::{Entry, IniDocument, Section};
pub use error::IniError;
pub use grammar::{grammar, IniGrammar};
pub use syntax_kind::SyntaxKind;

use spanlex_core::SourceText;
use spanlex_grammar::Lexer;

/// Run the INI grammar over `source`.
///
/// The returned lexer is terminal: `Done` for an accepted document,
/// otherwise it stops where the grammar gave up.
pub fn tokenize(source: &SourceText) -> Result<Lexer<'_, SyntaxKind>, IniError> {
    Ok(Lexer::tokenize(source, grammar()?.file()))
}
