//! Core diagnostic types.
//!
//! Defines [`Diagnostic`] and [`Severity`], the values both tokenizer stages
//! hand to an [`ErrorSink`](crate::ErrorSink).

use std::fmt;

use abc_ir::{Position, Token};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A recoverable problem found while tokenizing.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub position: Position,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: ErrorCode, position: Position, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            position,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: ErrorCode, position: Position, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Warning,
            message: message.into(),
            position,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Build the Error token delivered to error observers.
    ///
    /// Warnings are delivered as Error tokens too: the observer interface
    /// has a single token kind for every reported problem.
    pub fn to_token(&self) -> Token {
        Token::error(self.position, self.message.clone())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}",
            self.severity, self.code, self.message, self.position
        )
    }
}

#[cfg(test)]
mod tests;
