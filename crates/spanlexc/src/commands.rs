//! The `tokenize`, `check` and `sections` commands.
//!
//! Each input file is handled independently by [`process_file`], which
//! returns everything the file contributes to the output. [`run`] fans the
//! files out (on the rayon pool unless disabled) and writes the results in
//! input order.

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use spanlex_core::SourceText;
use spanlex_grammar::{RejectedDocument, Token};
use spanlex_ini::{IniDocument, SyntaxKind};
use tracing::{debug, info_span};

use crate::report::render_rejection;
use crate::{CliError, Command, Options};

/// What one file contributes to the output.
#[derive(Clone, Debug, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub accepted: bool,
    pub output: Output,
    /// Rendered diagnostic for stderr.
    pub diagnostic: Option<String>,
}

/// Per-file result in the selected output format.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Text(String),
    Json(Value),
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
}

#[derive(Serialize)]
struct RejectionRecord {
    reason: String,
    offset: usize,
    line: usize,
    column: usize,
}

impl From<&RejectedDocument> for RejectionRecord {
    fn from(rejected: &RejectedDocument) -> Self {
        RejectionRecord {
            reason: rejected.to_string(),
            offset: rejected.offset,
            line: rejected.line,
            column: rejected.column,
        }
    }
}

/// Run the command over every file.
///
/// Returns `true` when every file was read and accepted.
pub fn run(
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool, CliError> {
    let reports: Vec<Result<FileReport, CliError>> = if options.parallel {
        options
            .files
            .par_iter()
            .map(|path| read_and_process(options, path))
            .collect()
    } else {
        options
            .files
            .iter()
            .map(|path| read_and_process(options, path))
            .collect()
    };

    let mut all_accepted = true;
    let mut json = Vec::new();
    let with_headers = options.files.len() > 1;
    for report in reports {
        let report = match report {
            Ok(report) => report,
            Err(read @ CliError::Read { .. }) => {
                writeln!(err, "error: {read}")?;
                all_accepted = false;
                continue;
            }
            Err(fatal) => return Err(fatal),
        };

        all_accepted &= report.accepted;
        if let Some(diagnostic) = &report.diagnostic {
            err.write_all(diagnostic.as_bytes())?;
        }
        match report.output {
            Output::Json(value) => json.push(value),
            Output::Text(text) if text.is_empty() => {}
            Output::Text(text) => {
                if with_headers {
                    writeln!(out, "==> {} <==", report.path.display())?;
                }
                out.write_all(text.as_bytes())?;
            }
        }
    }

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)?;
    }
    debug!(files = options.files.len(), all_accepted, "finished");
    Ok(all_accepted)
}

fn read_and_process(options: &Options, path: &Path) -> Result<FileReport, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    process_file(options, path, &SourceText::new(text))
}

/// Run the selected command on one loaded file.
pub fn process_file(
    options: &Options,
    path: &Path,
    source: &SourceText,
) -> Result<FileReport, CliError> {
    let span = info_span!("file", path = %path.display(), command = options.command.name());
    let _guard = span.enter();

    let lexer = spanlex_ini::tokenize(source)?;
    debug!(state = %lexer.state(), tokens = lexer.token_count(), "tokenized");

    let tokens = lexer.tokens();
    let rejected = lexer.into_document().err();
    let name = path.display().to_string();
    let view = FileView {
        options,
        name: &name,
        source,
        tokens: &tokens,
        rejected: rejected.as_ref(),
    };

    let output = match options.command {
        Command::Tokenize => view.tokenize()?,
        Command::Check => view.check(),
        Command::Sections => view.sections()?,
    };
    let diagnostic = rejected
        .as_ref()
        .map(|rejected| render_rejection(&name, source.as_str(), rejected, options.color));

    Ok(FileReport {
        path: path.to_owned(),
        accepted: rejected.is_none(),
        output,
        diagnostic,
    })
}

/// One tokenized file, ready to render.
struct FileView<'a, 'src> {
    options: &'a Options,
    name: &'a str,
    source: &'src SourceText,
    tokens: &'a [Token<'src, SyntaxKind>],
    rejected: Option<&'a RejectedDocument>,
}

impl FileView<'_, '_> {
    fn json(&self, body: Value) -> Value {
        let mut value = json!({
            "path": self.name,
            "accepted": self.rejected.is_none(),
        });
        if let Some(rejected) = self.rejected {
            value["rejection"] = json!(RejectionRecord::from(rejected));
        }
        if let (Value::Object(target), Value::Object(fields)) = (&mut value, body) {
            target.extend(fields);
        }
        value
    }

    fn tokenize(&self) -> Result<Output, CliError> {
        if self.options.json {
            let records: Vec<TokenRecord<'_>> = self
                .tokens
                .iter()
                .map(|token| {
                    let (line, column) = self.source.line_col(token.span().start);
                    TokenRecord {
                        kind: token.kind().name(),
                        text: token.text(),
                        start: token.span().start,
                        end: token.span().end,
                        line,
                        column,
                    }
                })
                .collect();
            let tokens = serde_json::to_value(records)?;
            return Ok(Output::Json(self.json(json!({ "tokens": tokens }))));
        }

        let mut text = String::new();
        for token in self.tokens {
            let (line, column) = self.source.line_col(token.span().start);
            let _ = writeln!(text, "{line}:{column} {} {:?}", token.kind(), token.text());
        }
        Ok(Output::Text(text))
    }

    fn check(&self) -> Output {
        if self.options.json {
            return Output::Json(self.json(json!({})));
        }
        if self.rejected.is_none() && self.options.verbose {
            Output::Text(format!("{}: ok\n", self.name))
        } else {
            Output::Text(String::new())
        }
    }

    fn sections(&self) -> Result<Output, CliError> {
        if self.rejected.is_some() {
            return Ok(if self.options.json {
                Output::Json(self.json(json!({})))
            } else {
                Output::Text(String::new())
            });
        }

        let document = IniDocument::from_tokens(self.source, self.tokens);
        if self.options.json {
            let document = serde_json::to_value(&document)?;
            return Ok(Output::Json(self.json(json!({ "document": document }))));
        }

        let mut text = String::new();
        for section in document.sections() {
            match &section.name {
                Some(name) => {
                    let _ = writeln!(text, "[{name}] (line {})", section.line);
                }
                None => text.push_str("(global)\n"),
            }
            for entry in &section.entries {
                let _ = writeln!(text, "  {} = {}", entry.key, entry.value);
            }
        }
        Ok(Output::Text(text))
    }
}
