use std::fmt;

/// Token kinds produced by the INI grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SyntaxKind {
    /// Section name between the brackets of a header.
    HeaderToken,
    KeyToken,
    ValueToken,
    /// Spaces and tabs. Line breaks are [`EndOfLine`](Self::EndOfLine).
    WhitespaceToken,
    /// Comment text after `#` or `;`.
    CommentToken,
    /// `\n` or `\r\n`.
    EndOfLine,
    LeftBracket,
    RightBracket,
    Equals,
    Colon,
    Hash,
    Semicolon,
}

impl SyntaxKind {
    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::HeaderToken => "HeaderToken",
            SyntaxKind::KeyToken => "KeyToken",
            SyntaxKind::ValueToken => "ValueToken",
            SyntaxKind::WhitespaceToken => "WhitespaceToken",
            SyntaxKind::CommentToken => "CommentToken",
            SyntaxKind::EndOfLine => "EndOfLine",
            SyntaxKind::LeftBracket => "LeftBracket",
            SyntaxKind::RightBracket => "RightBracket",
            SyntaxKind::Equals => "Equals",
            SyntaxKind::Colon => "Colon",
            SyntaxKind::Hash => "Hash",
            SyntaxKind::Semicolon => "Semicolon",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
