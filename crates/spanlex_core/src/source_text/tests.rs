use super::*;
use pretty_assertions::assert_eq;

// === SourceText ===

#[test]
fn empty_source() {
    let source = SourceText::new("");
    assert!(source.is_empty());
    assert_eq!(source.len(), 0);
    assert_eq!(source.full_span(), TextSpan::EMPTY);
    assert_eq!(source.line_count(), 1);
}

#[test]
fn leading_byte_order_mark_is_dropped() {
    let source = SourceText::new("\u{feff}a = 1\n");
    assert_eq!(source.as_str(), "a = 1\n");
    assert_eq!(source.len(), 6);
    assert_eq!(source.line_col(0), (1, 1));
}

#[test]
fn inner_byte_order_mark_is_kept() {
    let source = SourceText::new("a\u{feff}");
    assert_eq!(source.as_str(), "a\u{feff}");
}

#[test]
fn slice_by_span() {
    let source = SourceText::new("Hello, World!");
    assert_eq!(source.slice(TextSpan::new(7, 12)), "World");
    assert_eq!(source.slice(TextSpan::new(0, 0)), "");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    let source = SourceText::new("abc");
    assert_eq!(source.slice(TextSpan::new(2, 10)), "");
}

#[test]
fn slice_inside_multibyte_char_is_empty() {
    let source = SourceText::new("\u{e9}t\u{e9}");
    assert_eq!(source.slice(TextSpan::new(1, 3)), "");
    assert_eq!(source.slice(TextSpan::new(0, 2)), "\u{e9}");
}

#[test]
fn clones_share_text() {
    let source = SourceText::new(String::from("shared"));
    let copy = source.clone();
    assert!(std::ptr::eq(source.as_str(), copy.as_str()));
}

#[test]
fn debug_does_not_dump_text() {
    let source = SourceText::new("a\nb");
    assert_eq!(format!("{source:?}"), "SourceText { len: 3, lines: 2 }");
}

#[test]
fn line_col_counts_chars() {
    let source = SourceText::new("ab\n\u{e9}x");
    assert_eq!(source.line_col(0), (1, 1));
    assert_eq!(source.line_col(2), (1, 3));
    assert_eq!(source.line_col(3), (2, 1));
    // 'x' sits after a two-byte character
    assert_eq!(source.line_col(5), (2, 2));
}

// === LineOffsetTable ===

#[test]
fn table_empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.line_from_offset(0), 1);
}

#[test]
fn table_line_lookup() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1);
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(11), 2);
    assert_eq!(table.line_from_offset(12), 3);
    assert_eq!(table.line_from_offset(100), 3);
}

#[test]
fn table_trailing_newline_opens_a_line() {
    let table = LineOffsetTable::build("a\n");
    assert_eq!(table.line_count(), 2);
    assert_eq!(table.line_from_offset(2), 2);
}

#[test]
fn table_crlf() {
    let source = "a\r\nb";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 1), (1, 2));
    assert_eq!(table.offset_to_line_col(source, 3), (2, 1));
}
