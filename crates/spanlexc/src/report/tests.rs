use super::*;

fn rejection(state: LexerState, offset: usize, line: usize, column: usize) -> RejectedDocument {
    RejectedDocument {
        state,
        offset,
        line,
        column,
    }
}

#[test]
fn report_names_file_and_reason() {
    let text = "[a]\nx = 1\nbroken\n";
    let report = render_rejection(
        "config.ini",
        text,
        &rejection(LexerState::Match, 10, 3, 1),
        false,
    );
    assert!(report.contains("config.ini"), "{report}");
    assert!(
        report.contains("document rejected: unexpected input at 3:1"),
        "{report}"
    );
    assert!(report.contains("broken"), "{report}");
    assert!(
        report.contains("input from here on was not consumed"),
        "{report}"
    );
}

#[test]
fn no_match_label() {
    let report = render_rejection("x.ini", "oops", &rejection(LexerState::NoMatch, 0, 1, 1), false);
    assert!(report.contains("no rule matches here"), "{report}");
}

#[test]
fn uncolored_report_has_no_escapes() {
    let report = render_rejection("x.ini", "oops", &rejection(LexerState::Match, 0, 1, 1), false);
    assert!(!report.contains('\u{1b}'), "{report:?}");
}

#[test]
fn offset_after_multibyte_text() {
    // "é" is two bytes but one character
    let text = "é=1\n?\n";
    let report = render_rejection("x.ini", text, &rejection(LexerState::Match, 5, 2, 1), false);
    assert!(report.contains("x.ini:2:1"), "{report}");
}

#[test]
fn rejection_at_end_of_input() {
    let text = "a=1";
    let report = render_rejection("x.ini", text, &rejection(LexerState::Match, 3, 1, 4), false);
    assert!(report.contains("document rejected"), "{report}");
}
