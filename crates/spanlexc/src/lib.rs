//! Driver behind the `spanlex` binary.
//!
//! Reads INI files, runs them through the `spanlex_ini` grammar and prints
//! tokens, acceptance diagnostics or the section model. The binary is a thin
//! wrapper over [`Options::parse`], [`init_tracing`] and [`run`].

pub mod commands;
mod error;
mod options;
mod report;
mod tracing_init;

pub use commands::{process_file, run, FileReport, Output};
pub use error::CliError;
pub use options::{Command, Options};
pub use report::render_rejection;
pub use tracing_init::init_tracing;
