// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property tests for the span primitives.
//!
//! Every primitive must either fail or return a non-empty span that starts
//! at the window start, stays inside the window and lies on char
//! boundaries.

use proptest::prelude::*;
use spanlex_core::{AnchoredRegex, RegexLimits, SourceSpan, SourceText, TextSpan};

fn assert_well_formed(window: SourceSpan<'_>, found: Option<TextSpan>) {
    if let Some(span) = found {
        assert!(!span.is_empty(), "empty match {span:?}");
        assert_eq!(span.start, window.start());
        assert!(window.span().contains_span(span));
        let text = window.source().as_str();
        assert!(text.is_char_boundary(span.end));
    }
}

/// Mixed ASCII, multibyte and line-break characters.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-c \t\r\n\u{e9}\u{1F600}]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn primitives_are_well_formed(text in arb_text(), cut in 0usize..32) {
        let source = SourceText::new(text.as_str());
        let mut left = cut.min(source.len());
        while !text.is_char_boundary(left) {
            left -= 1;
        }
        let window = SourceSpan::full(&source).trim_start(left);
        let word = AnchoredRegex::new("[a-c]*", &RegexLimits::default()).unwrap();

        assert_well_formed(window, window.starts_with_char('a'));
        assert_well_formed(window, window.starts_with_char('\u{e9}'));
        assert_well_formed(window, window.starts_with_str("ab"));
        assert_well_formed(window, window.matches_predicate(|c| c == ' ' || c == '\t'));
        assert_well_formed(window, window.matches_predicate(|c| !c.is_ascii()));
        assert_well_formed(window, window.matches_regex(&word));
    }

    #[test]
    fn regex_never_crosses_newline(text in arb_text()) {
        let source = SourceText::new(text.as_str());
        let window = SourceSpan::full(&source);
        let any = AnchoredRegex::new("(?s).+", &RegexLimits::default()).unwrap();
        if let Some(span) = window.matches_regex(&any) {
            prop_assert!(!source.slice(span).contains('\n'));
            prop_assert_eq!(span, window.line());
        }
    }
}
