//! Section/entry view of an accepted INI token stream.

use spanlex_core::{SourceText, TextSpan};
use spanlex_grammar::Token;
use tracing::debug;

use crate::{tokenize, IniError, SyntaxKind};

/// A parsed INI document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IniDocument {
    sections: Vec<Section>,
}

/// A `[name]` header and the entries below it.
///
/// Entries above the first header belong to a section without a name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    /// Header text with surrounding blanks removed; `None` for the global
    /// section.
    pub name: Option<String>,
    /// From the start of the header line (or of the document) to the end of
    /// the section's last token.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub span: TextSpan,
    /// 1-based line of the header.
    pub line: usize,
    pub entries: Vec<Entry>,
}

/// A `key = value` line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    pub key: String,
    /// Empty when nothing follows the separator.
    pub value: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub key_span: TextSpan,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub value_span: Option<TextSpan>,
    /// 1-based line of the key.
    pub line: usize,
}

impl IniDocument {
    /// Tokenize `source` and fold the tokens into sections.
    ///
    /// The whole text must be accepted by the INI grammar.
    pub fn parse(source: &SourceText) -> Result<Self, IniError> {
        let tokens = tokenize(source)?.into_document()?;
        let document = Self::from_tokens(source, &tokens);
        debug!(
            sections = document.sections.len(),
            tokens = tokens.len(),
            "parsed INI document"
        );
        Ok(document)
    }

    /// Fold the tokens of an accepted run over `source`.
    pub fn from_tokens(source: &SourceText, tokens: &[Token<'_, SyntaxKind>]) -> Self {
        let mut sections = Vec::new();
        let mut current = Section::global();
        // Indentation is held back until the line's next token shows
        // which section the line belongs to.
        let mut indent: Option<TextSpan> = None;
        let mut at_line_start = true;

        for token in tokens {
            let kind = token.kind();
            if kind == SyntaxKind::WhitespaceToken && at_line_start {
                indent = Some(token.span());
                at_line_start = false;
                continue;
            }
            let span = indent
                .take()
                .map_or(token.span(), |indent| indent.merge(token.span()));

            match kind {
                SyntaxKind::LeftBracket => {
                    let finished = std::mem::replace(
                        &mut current,
                        Section::named(span, source.line_col(token.span().start).0),
                    );
                    if finished.name.is_some() || !finished.entries.is_empty() {
                        sections.push(finished);
                    }
                }
                SyntaxKind::HeaderToken => {
                    current.name = Some(token.text().trim().to_owned());
                }
                SyntaxKind::KeyToken => current.entries.push(Entry {
                    key: token.text().to_owned(),
                    value: String::new(),
                    key_span: token.span(),
                    value_span: None,
                    line: source.line_col(token.span().start).0,
                }),
                SyntaxKind::ValueToken => {
                    if let Some(entry) = current.entries.last_mut() {
                        entry.value = token.text().to_owned();
                        entry.value_span = Some(token.span());
                    }
                }
                SyntaxKind::RightBracket
                | SyntaxKind::Equals
                | SyntaxKind::Colon
                | SyntaxKind::EndOfLine
                | SyntaxKind::WhitespaceToken
                | SyntaxKind::CommentToken
                | SyntaxKind::Hash
                | SyntaxKind::Semicolon => {}
            }
            current.span = current.span.merge(span);
            at_line_start = kind == SyntaxKind::EndOfLine;
        }
        if let Some(indent) = indent {
            current.span = current.span.merge(indent);
        }

        if current.name.is_some() || !current.entries.is_empty() {
            sections.push(current);
        }
        IniDocument { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section named `name`, ignoring ASCII case.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.is_named(name))
    }

    /// Entries above the first header.
    pub fn global(&self) -> Option<&Section> {
        self.sections.first().filter(|s| s.name.is_none())
    }

    /// Value of `key` in `section` (`None` for the global section).
    ///
    /// Section and key names ignore ASCII case. When a key appears more than
    /// once, across repeated sections too, the last occurrence wins.
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .filter(|s| match (section, &s.name) {
                (None, None) => true,
                (Some(wanted), Some(_)) => s.is_named(wanted),
                _ => false,
            })
            .flat_map(|s| s.entries.iter().rev())
            .find(|e| e.key.eq_ignore_ascii_case(key))
            .map(|e| e.value.as_str())
    }
}

impl Section {
    fn global() -> Self {
        Section {
            name: None,
            span: TextSpan::EMPTY,
            line: 1,
            entries: Vec::new(),
        }
    }

    fn named(header_start: TextSpan, line: usize) -> Self {
        Section {
            name: None,
            span: header_start,
            line,
            entries: Vec::new(),
        }
    }

    fn is_named(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(name))
    }

    /// Value of `key` in this section, last occurrence winning.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key.eq_ignore_ascii_case(key))
            .map(|e| e.value.as_str())
    }
}

#[cfg(test)]
mod tests;
