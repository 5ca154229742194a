//! Line-level problems reported by the scanner.

use abc_diagnostic::{Diagnostic, ErrorCode, Severity};
use abc_ir::Position;

/// A recoverable problem found while classifying a single line.
///
/// The message text lives in the `#[error]` attribute; [`ScanErrorKind::at`]
/// turns it into a [`Diagnostic`] for the sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    #[error("line inside text block must begin with %%")]
    TextBlockLineWithoutDirective,
    #[error("text after %%endtext is ignored")]
    TrailingTextAfterEndText,
    #[error("text after %%begintext is ignored")]
    TrailingTextAfterBeginText,
    #[error("text block not closed with %%endtext before end of input")]
    UnterminatedTextBlock,
}

impl ScanErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            ScanErrorKind::TextBlockLineWithoutDirective => ErrorCode::E0001,
            ScanErrorKind::TrailingTextAfterEndText => ErrorCode::W0001,
            ScanErrorKind::TrailingTextAfterBeginText => ErrorCode::W0002,
            ScanErrorKind::UnterminatedTextBlock => ErrorCode::W0003,
        }
    }

    pub fn severity(self) -> Severity {
        if self.code().is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    pub fn at(self, position: Position) -> Diagnostic {
        match self.severity() {
            Severity::Error => Diagnostic::error(self.code(), position, self.to_string()),
            Severity::Warning => Diagnostic::warning(self.code(), position, self.to_string()),
        }
    }
}
