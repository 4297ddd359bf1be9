//! Parser-combinator engine for building lexers.
//!
//! A [`Lexer`] is an immutable value: the unconsumed window of a
//! [`SourceText`], the tokens produced so far and a three-valued
//! [`LexerState`]. A [`Rule`] is a pure function from one lexer to the next.
//! Grammars are rule graphs built from primitives ([`primitives`],
//! [`Grammar`]) and combinators ([`combinators`]).
//!
//! ```
//! use spanlex_core::SourceText;
//! use spanlex_grammar::{combinators::seq, primitives, Grammar, KindTable, Lexer, LexerState};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Kind { Word, Space, EndOfLine }
//!
//! let grammar = Grammar::new(KindTable::new(Kind::EndOfLine));
//! let word = grammar.regex("[a-z]+", Kind::Word)?;
//! let rule = seq([word.clone(), primitives::whitespace(Kind::Space), word]);
//!
//! let source = SourceText::new("hello world");
//! let lexer = Lexer::tokenize(&source, &rule);
//! assert_eq!(lexer.state(), LexerState::Done);
//! assert_eq!(lexer.token_count(), 3);
//! # Ok::<(), spanlex_grammar::GrammarError>(())
//! ```
//!
//! # Failure
//!
//! Inside rule application there is exactly one failure: the
//! [`LexerState::NoMatch`] state. Sequences propagate it; ordered choice,
//! [`option`](combinators::option), [`not`](combinators::not) and
//! [`repeat`](combinators::repeat) recover from it by restarting from a
//! checkpoint. A failing composite rule always reports the lexer it was
//! given (marked `NoMatch`), so tokens from a failed attempt never leak.
//!
//! Typed errors exist only outside rule application: [`GrammarError`] when a
//! rule cannot be built, [`RejectedDocument`] when a finished run did not
//! consume its whole input.
//!
//! [`SourceText`]: spanlex_core::SourceText

pub mod combinators;
mod error;
mod grammar;
mod kinds;
mod lexer;
pub mod primitives;
mod rule;
mod token;

pub use error::{GrammarError, RejectedDocument};
pub use grammar::Grammar;
pub use kinds::KindTable;
pub use lexer::{Lexer, LexerState};
pub use rule::{Kind, Rule};
pub use token::Token;
