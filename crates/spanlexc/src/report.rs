//! Rendering of rejected documents.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use spanlex_grammar::{LexerState, RejectedDocument};

/// Render `rejected` against the text of `name` as an ariadne report.
pub fn render_rejection(name: &str, text: &str, rejected: &RejectedDocument, color: bool) -> String {
    // ariadne spans count characters, not bytes
    let chars = text.chars().count();
    let start = text
        .get(..rejected.offset)
        .map_or(0, |prefix| prefix.chars().count())
        .min(chars.saturating_sub(1));
    let end = (start + 1).min(chars);
    let label = match rejected.state {
        LexerState::NoMatch => "no rule matches here",
        LexerState::Match | LexerState::Done => "input from here on was not consumed",
    };

    let mut buf = Vec::new();
    let written = Report::build(ReportKind::Error, name, start)
        .with_config(Config::default().with_color(color))
        .with_message(format!("document rejected: {rejected}"))
        .with_label(
            Label::new((name, start..end))
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
        .write((name, Source::from(text)), &mut buf);

    match written {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        // Writing into a Vec only fails on a broken report; fall back to the
        // one-line form.
        Err(_) => format!("error: {name}: document rejected: {rejected}\n"),
    }
}

#[cfg(test)]
mod tests;
