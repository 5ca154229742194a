//! Rendering of collected diagnostics.
//!
//! The CLI renders through [`TerminalEmitter`]; anything implementing
//! [`DiagnosticEmitter`] can stand in for it (tests render into a `Vec<u8>`).

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Error and warning totals for one document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn of(diagnostics: &[Diagnostic]) -> Self {
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        Summary {
            errors,
            warnings: diagnostics.len() - errors,
        }
    }

    /// No diagnostics at all.
    pub fn is_empty(self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit reports in the order given.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Closing line with the totals. Emits nothing for an empty summary.
    fn emit_summary(&mut self, summary: Summary);

    fn flush(&mut self);
}
