//! Source text and span primitives for spanlex.
//!
//! This crate is the leaf of the workspace. It owns the immutable
//! [`SourceText`] buffer and the window-level matchers every lexer rule is
//! built from:
//!
//! - [`SourceSpan::starts_with_char`] / [`SourceSpan::starts_with_str`]:
//!   exact, case-sensitive prefixes
//! - [`SourceSpan::matches_predicate`]: greedy character run
//! - [`SourceSpan::matches_regex`]: regex anchored at the window start and
//!   confined to the current line
//!
//! Every matcher returns either `None` or a non-empty [`TextSpan`] starting at
//! the window start. Matchers never partially commit and never report an
//! empty match.
//!
//! Offsets are byte offsets into UTF-8 text. Matchers only ever advance by
//! whole characters, so every span they produce lies on `char` boundaries.

mod anchored_regex;
mod source_span;
mod source_text;
mod span;

pub use anchored_regex::{AnchoredRegex, RegexLimits};
pub use source_span::SourceSpan;
pub use source_text::{LineOffsetTable, SourceText};
pub use span::TextSpan;
