use std::io;
use std::path::PathBuf;

use spanlex_ini::IniError;

/// Errors that stop the driver.
///
/// Rejected documents are not errors here; they are reported per file and
/// turn into a failing exit status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Ini(#[from] IniError),

    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
