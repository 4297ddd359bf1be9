use super::*;

#[test]
fn with_len_sets_end() {
    let span = TextSpan::with_len(3, 4);
    assert_eq!(span, TextSpan::new(3, 7));
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
}

#[test]
fn empty_span() {
    assert!(TextSpan::EMPTY.is_empty());
    assert!(TextSpan::new(5, 5).is_empty());
    assert_eq!(TextSpan::new(5, 5).len(), 0);
}

#[test]
fn contains_span() {
    let outer = TextSpan::new(0, 10);
    assert!(outer.contains_span(TextSpan::new(0, 10)));
    assert!(outer.contains_span(TextSpan::new(3, 4)));
    assert!(!outer.contains_span(TextSpan::new(8, 11)));
}

#[test]
fn trim_start_advances() {
    let span = TextSpan::new(2, 8);
    assert_eq!(span.trim_start(0), span);
    assert_eq!(span.trim_start(3), TextSpan::new(5, 8));
    assert_eq!(span.trim_start(6), TextSpan::new(8, 8));
}

#[test]
fn trim_start_saturates() {
    assert_eq!(TextSpan::new(2, 4).trim_start(10), TextSpan::new(4, 4));
}

#[test]
fn merge_covers_both() {
    let a = TextSpan::new(2, 4);
    let b = TextSpan::new(7, 9);
    assert_eq!(a.merge(b), TextSpan::new(2, 9));
    assert_eq!(b.merge(a), TextSpan::new(2, 9));
}

#[test]
fn debug_and_display() {
    let span = TextSpan::new(1, 3);
    assert_eq!(format!("{span:?}"), "1..3");
    assert_eq!(format!("{span}"), "[1..3)");
}

#[test]
fn from_range() {
    assert_eq!(TextSpan::from(4..6), TextSpan::new(4, 6));
    assert_eq!(TextSpan::new(4, 6).to_range(), 4..6);
}
