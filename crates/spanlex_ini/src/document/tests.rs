#![allow(
    clippy::unwrap_used,
    reason = "test inputs are valid documents"
)]

use super::*;
use pretty_assertions::assert_eq;
use spanlex_grammar::LexerState;

fn parse(text: &str) -> IniDocument {
    IniDocument::parse(&SourceText::new(text)).unwrap()
}

#[test]
fn empty_document_has_no_sections() {
    let document = parse("");
    assert_eq!(document, IniDocument::default());
    assert!(document.global().is_none());
}

#[test]
fn comments_only_document_has_no_sections() {
    assert!(parse("# one\n; two\n\n").sections().is_empty());
}

#[test]
fn global_entries_before_first_header() {
    let document = parse("root = true\n[a]\nx = 1\n");
    let global = document.global().unwrap();
    assert_eq!(global.name, None);
    assert_eq!(global.entries.len(), 1);
    assert_eq!(global.get("root"), Some("true"));
    assert_eq!(document.sections().len(), 2);
}

#[test]
fn named_section_without_global() {
    let document = parse("; header comment\n[a]\nx = 1\n");
    assert!(document.global().is_none());
    assert_eq!(document.sections()[0].name.as_deref(), Some("a"));
}

#[test]
fn entry_positions() {
    let source = SourceText::new("[a]\n  key = some value\n");
    let document = IniDocument::parse(&source).unwrap();
    let section = document.section("a").unwrap();
    assert_eq!(section.line, 1);

    let entry = &section.entries[0];
    assert_eq!(entry.key, "key");
    assert_eq!(entry.value, "some value");
    assert_eq!(entry.line, 2);
    assert_eq!(source.slice(entry.key_span), "key");
    assert_eq!(entry.value_span.map(|s| source.slice(s)), Some("some value"));
}

#[test]
fn section_span_covers_header_and_entries() {
    let source = SourceText::new("x=0\n[a]\ny=1\n");
    let document = IniDocument::parse(&source).unwrap();
    let section = document.section("a").unwrap();
    assert_eq!(source.slice(section.span), "[a]\ny=1\n");
    assert_eq!(section.line, 2);
}

#[test]
fn indented_header_starts_its_own_span() {
    let source = SourceText::new("[a]\nx = 1\n  [b]\ny = 2\n");
    let document = IniDocument::parse(&source).unwrap();

    let a = document.section("a").unwrap();
    let b = document.section("b").unwrap();
    assert_eq!(source.slice(a.span), "[a]\nx = 1\n");
    assert_eq!(source.slice(b.span), "  [b]\ny = 2\n");
    assert_eq!(b.line, 3);
}

#[test]
fn indented_entries_stay_in_their_section() {
    let source = SourceText::new("[a]\n  x = 1\n\t\n");
    let document = IniDocument::parse(&source).unwrap();
    let a = document.section("a").unwrap();
    assert_eq!(source.slice(a.span), source.as_str());
    assert_eq!(a.get("x"), Some("1"));
}

#[test]
fn missing_value_is_empty() {
    let document = parse("[a]\nflag =\n");
    let entry = &document.sections()[0].entries[0];
    assert_eq!(entry.value, "");
    assert_eq!(entry.value_span, None);
}

#[test]
fn header_name_is_trimmed() {
    let document = parse("[ spaced name ]\n");
    assert_eq!(document.sections()[0].name.as_deref(), Some("spaced name"));
    assert!(document.section("Spaced Name").is_some());
}

#[test]
fn lookups_ignore_case() {
    let document = parse("[Core]\nEditor = vim\n");
    assert_eq!(document.get(Some("core"), "editor"), Some("vim"));
    assert_eq!(document.get(Some("CORE"), "EDITOR"), Some("vim"));
    assert_eq!(document.get(None, "editor"), None);
    assert_eq!(document.get(Some("other"), "editor"), None);
}

#[test]
fn last_occurrence_wins() {
    let document = parse("[a]\nx = 1\nx = 2\n[b]\nx = 3\n[a]\nx = 4\n");
    assert_eq!(document.get(Some("a"), "x"), Some("4"));
    assert_eq!(document.get(Some("b"), "x"), Some("3"));
    assert_eq!(document.section("a").unwrap().get("x"), Some("2"));
    assert_eq!(document.sections().len(), 3);
}

#[test]
fn empty_named_section_is_kept() {
    let document = parse("[empty]\n[full]\nk=v\n");
    let names: Vec<_> = document
        .sections()
        .iter()
        .map(|s| s.name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("empty"), Some("full")]);
}

#[test]
fn rejected_document_reports_position() {
    let source = SourceText::new("[a]\nx = 1\nbroken\n");
    let rejected = match IniDocument::parse(&source).unwrap_err() {
        IniError::Rejected(rejected) => rejected,
        other @ IniError::Grammar(_) => panic!("expected rejection, got {other:?}"),
    };
    assert_eq!(rejected.state, LexerState::Match);
    assert_eq!((rejected.line, rejected.column), (3, 1));
    assert_eq!(rejected.offset, 10);
}
