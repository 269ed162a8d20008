//! Command handlers for the `safeparams` CLI.
//!
//! Handlers return their output instead of printing it; `main` decides
//! where it goes and which exit code to use. Shared input handling lives
//! here in the module root.

use std::io::Read;
use std::path::PathBuf;

use sp_spec::SpecError;

mod check;
mod coerce;

pub use check::{check_spec, check_specs};
pub use coerce::{coerce_command, parse_specs};

/// Every spec was well-formed.
pub const EXIT_OK: i32 = 0;
/// A spec was malformed.
pub const EXIT_MALFORMED_SPEC: i32 = 1;
/// Bad arguments or unreadable input.
pub const EXIT_USAGE: i32 = 2;

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("invalid JSON in {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Spec(_) => EXIT_MALFORMED_SPEC,
            CliError::Read { .. } | CliError::Stdin(_) | CliError::Json { .. } => EXIT_USAGE,
        }
    }
}

/// Resolve a data argument to its text.
///
/// `-` reads all of `stdin`, `@path` reads a file, anything else is the
/// text itself.
pub fn read_source(arg: &str, stdin: &mut dyn Read) -> Result<String, CliError> {
    if arg == "-" {
        let mut text = String::new();
        stdin.read_to_string(&mut text).map_err(CliError::Stdin)?;
        return Ok(text);
    }
    if let Some(path) = arg.strip_prefix('@') {
        tracing::debug!(path, "reading data file");
        return std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: PathBuf::from(path),
            source,
        });
    }
    Ok(arg.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
