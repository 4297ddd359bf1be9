//! The INI grammar.
//!
//! ```text
//! file          = section*
//! section       = header line* | line+
//! header        = space '[' header_name ']' space comment? eol
//! line          = space kvp? space comment? eol
//! kvp           = key space assign space value?
//! assign        = '=' | ':'
//! comment       = comment_start comment_text?
//! comment_start = '#' | ';'
//! space         = whitespace?
//! ```
//!
//! Every line of a document is either a header, a key/value pair, a comment
//! or blank, each optionally indented. Anything else rejects the document at
//! that line.

use once_cell::sync::Lazy;
use spanlex_grammar::combinators::{one_of, option, repeat, seq};
use spanlex_grammar::primitives::whitespace;
use spanlex_grammar::{Grammar, GrammarError, KindTable, Rule};

use crate::SyntaxKind;

static GRAMMAR: Lazy<Result<IniGrammar, GrammarError>> = Lazy::new(IniGrammar::build);

/// The shared INI grammar, built on first use.
pub fn grammar() -> Result<&'static IniGrammar, GrammarError> {
    match &*GRAMMAR {
        Ok(grammar) => Ok(grammar),
        Err(err) => Err(err.clone()),
    }
}

/// Entry points of the INI grammar.
#[derive(Clone, Debug)]
pub struct IniGrammar {
    file: Rule<SyntaxKind>,
    section: Rule<SyntaxKind>,
    header: Rule<SyntaxKind>,
    line: Rule<SyntaxKind>,
}

impl IniGrammar {
    fn build() -> Result<Self, GrammarError> {
        let kinds = KindTable::new(SyntaxKind::EndOfLine)
            .with_char('[', SyntaxKind::LeftBracket)
            .with_char(']', SyntaxKind::RightBracket)
            .with_char('=', SyntaxKind::Equals)
            .with_char(':', SyntaxKind::Colon)
            .with_char('#', SyntaxKind::Hash)
            .with_char(';', SyntaxKind::Semicolon);
        let g = Grammar::new(kinds);

        let space = option(whitespace(SyntaxKind::WhitespaceToken));

        let comment = seq([
            one_of([g.ch('#')?, g.ch(';')?]),
            option(g.regex(".+", SyntaxKind::CommentToken)?),
        ])
        .named("comment");

        let header = seq([
            space.clone(),
            g.ch('[')?,
            g.regex(r"[^\]\r\n]+", SyntaxKind::HeaderToken)?,
            g.ch(']')?,
            space.clone(),
            option(comment.clone()),
            g.eol(),
        ])
        .named("header");

        let kvp = seq([
            g.regex(r"[^\s=:#;\[\]]+", SyntaxKind::KeyToken)?,
            space.clone(),
            one_of([g.ch('=')?, g.ch(':')?]),
            space.clone(),
            option(g.regex(r"[^\s#;]+(?:[ \t]+[^\s#;]+)*", SyntaxKind::ValueToken)?),
        ])
        .named("kvp");

        let line = seq([space.clone(), option(kvp), space, option(comment), g.eol()]).named("line");

        let section = one_of([
            header.clone().then(repeat(line.clone(), 0..)),
            repeat(line.clone(), 1..),
        ])
        .named("section");

        let file = repeat(section.clone(), 0..).named("file");

        Ok(IniGrammar {
            file,
            section,
            header,
            line,
        })
    }

    /// Whole document.
    pub fn file(&self) -> &Rule<SyntaxKind> {
        &self.file
    }

    /// One header and the lines under it, or a run of lines before the
    /// first header.
    pub fn section(&self) -> &Rule<SyntaxKind> {
        &self.section
    }

    pub fn header(&self) -> &Rule<SyntaxKind> {
        &self.header
    }

    /// One non-header line including its terminator.
    pub fn line(&self) -> &Rule<SyntaxKind> {
        &self.line
    }
}
