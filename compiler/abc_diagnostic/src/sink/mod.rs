//! The error sink capability.
//!
//! Each tokenizer stage receives the sink as a `&mut dyn ErrorSink` rather
//! than owning one, so the scanner and the state machine report into the
//! same ordered stream without sharing any internals.

use std::fmt;

use abc_ir::Token;

use crate::{Diagnostic, Severity};

/// Callback invoked synchronously with an Error token for every report.
pub type ErrorObserver<'a> = Box<dyn FnMut(Token) + 'a>;

/// Receiver for recoverable problems.
///
/// Implementations must not fail and must not influence the token currently
/// being produced.
pub trait ErrorSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collecting sink, handy for driving one stage in isolation.
impl ErrorSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Standard sink: logs, records, and forwards to an optional observer.
#[derive(Default)]
pub struct DiagnosticSink<'a> {
    diagnostics: Vec<Diagnostic>,
    observer: Option<ErrorObserver<'a>>,
}

impl<'a> DiagnosticSink<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(Token) + 'a) {
        self.observer = Some(Box::new(observer));
    }

    /// Everything reported so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl ErrorSink for DiagnosticSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        let Diagnostic {
            code,
            severity,
            ref message,
            position,
        } = diagnostic;
        match severity {
            Severity::Error => tracing::warn!(
                code = code.as_str(),
                line = position.line,
                column = position.column,
                "{message}"
            ),
            Severity::Warning => tracing::info!(
                code = code.as_str(),
                line = position.line,
                column = position.column,
                "{message}"
            ),
        }

        if let Some(observer) = self.observer.as_mut() {
            observer(diagnostic.to_token());
        }
        self.diagnostics.push(diagnostic);
    }
}

impl fmt::Debug for DiagnosticSink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("diagnostics", &self.diagnostics)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
