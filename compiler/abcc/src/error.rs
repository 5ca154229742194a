//! CLI error type.

use std::io;

use abc_lexer::TokenizerFault;
use thiserror::Error;

/// Everything that stops a command before it can report diagnostics.
///
/// Diagnostics about the document itself are not `CliError`s; they are
/// rendered and only affect the exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("file '{path}' is not valid UTF-8")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Fault(#[from] TokenizerFault),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("missing file path")]
    MissingPath,

    #[error("unknown error code: {0}")]
    UnknownCode(String),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// An unknown code passed to `explain` is an ordinary "not found" (1);
    /// everything else is a usage, I/O or internal failure (2).
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::UnknownCode(_) => 1,
            _ => 2,
        }
    }

    /// Classify an `io::Error` from reading `path`.
    pub(crate) fn from_read(path: &str, error: io::Error) -> Self {
        let path = path.to_owned();
        match error.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read {
                path,
                source: error,
            },
        }
    }
}
