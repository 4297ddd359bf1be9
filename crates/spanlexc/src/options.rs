//! Command-line options.

use std::path::PathBuf;

use crate::CliError;

/// What to do with each input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print every token.
    Tokenize,
    /// Report files the grammar rejects.
    Check,
    /// Print the section/entry model.
    Sections,
}

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "tokenize" | "lex" => Some(Command::Tokenize),
            "check" => Some(Command::Check),
            "sections" => Some(Command::Sections),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Tokenize => "tokenize",
            Command::Check => "check",
            Command::Sections => "sections",
        }
    }
}

/// Parsed `spanlex <command> [options] <files...>` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub files: Vec<PathBuf>,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Process files on the rayon pool.
    pub parallel: bool,
    /// Also report accepted files; enables debug logging when `RUST_LOG`
    /// is unset.
    pub verbose: bool,
    /// Colored diagnostics. Not a flag; set by the binary for terminals.
    pub color: bool,
}

impl Options {
    pub fn new(command: Command) -> Self {
        Options {
            command,
            files: Vec::new(),
            json: false,
            parallel: true,
            verbose: false,
            color: false,
        }
    }

    /// Parse the arguments after the program name.
    ///
    /// Flags may appear anywhere after the command.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let Some((command, rest)) = args.split_first() else {
            return Err(CliError::Usage("missing command".to_owned()));
        };
        let command = Command::parse(command)
            .ok_or_else(|| CliError::Usage(format!("unknown command '{command}'")))?;

        let mut options = Options::new(command);
        for arg in rest {
            match arg.as_str() {
                "--json" => options.json = true,
                "--no-parallel" => options.parallel = false,
                "-v" | "--verbose" => options.verbose = true,
                flag if flag.starts_with('-') => {
                    return Err(CliError::Usage(format!("unknown option '{flag}'")));
                }
                path => options.files.push(PathBuf::from(path)),
            }
        }

        if options.files.is_empty() {
            return Err(CliError::Usage(format!(
                "'{}' needs at least one file",
                command.name()
            )));
        }
        Ok(options)
    }
}
