//! Section-level problems reported by the state machine.

use abc_diagnostic::{Diagnostic, ErrorCode};
use abc_ir::Position;

/// A recoverable section error.
///
/// Every kind is paired with a resynchronizing transition, so reporting one
/// never stops tokenization.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum SectionErrorKind {
    #[error("unsupported version of ABC: '{version}' (expected {expected})")]
    UnsupportedVersion { version: String, expected: String },
    #[error("missing declaration: file should start with %abc-2.1")]
    MissingDeclaration,
    #[error("missing declaration, no header: file should start with %abc-2.1 and a file header")]
    MissingDeclarationNoHeader,
    #[error("unexpected free text at start of file")]
    FreeTextAtStart,
    #[error("unexpected typeset text at start of file")]
    TypesetTextAtStart,
    #[error("unexpected free text in file header; end the header with a blank line")]
    FreeTextInFileHeader,
    #[error("unexpected typeset text in file header; end the header with a blank line")]
    TypesetTextInFileHeader,
    #[error("tune started inside file header; end the header with a blank line")]
    TuneInFileHeader,
    #[error("tune should start with X:, found '{field}'")]
    TuneWithoutIndex { field: String },
    #[error("stylesheet between tunes")]
    StyleSheetBetweenTunes,
    #[error("information field in free text; separate sections with a blank line")]
    FieldInFreeText,
    #[error("stylesheet directive in free text; separate sections with a blank line")]
    StyleSheetInFreeText,
    #[error("typeset text in free text; separate sections with a blank line")]
    TypesetTextInFreeText,
    #[error("information field in typeset text; separate sections with a blank line")]
    FieldInTypesetText,
    #[error("stylesheet directive in typeset text; separate sections with a blank line")]
    StyleSheetInTypesetText,
    #[error("free text in typeset text; separate sections with a blank line")]
    FreeTextInTypesetText,
    #[error("field after K: in tune header")]
    FieldAfterKey,
    #[error("missing K: line to finish tune header")]
    MissingKey,
}

impl SectionErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            SectionErrorKind::UnsupportedVersion { .. } => ErrorCode::E1001,
            SectionErrorKind::MissingDeclaration => ErrorCode::E1002,
            SectionErrorKind::MissingDeclarationNoHeader => ErrorCode::E1003,
            SectionErrorKind::FreeTextAtStart => ErrorCode::E1004,
            SectionErrorKind::TypesetTextAtStart => ErrorCode::E1005,
            SectionErrorKind::FreeTextInFileHeader => ErrorCode::E1006,
            SectionErrorKind::TypesetTextInFileHeader => ErrorCode::E1007,
            SectionErrorKind::TuneInFileHeader => ErrorCode::E1008,
            SectionErrorKind::TuneWithoutIndex { .. } => ErrorCode::E1009,
            SectionErrorKind::StyleSheetBetweenTunes => ErrorCode::E1010,
            SectionErrorKind::FieldInFreeText => ErrorCode::E1011,
            SectionErrorKind::StyleSheetInFreeText => ErrorCode::E1012,
            SectionErrorKind::TypesetTextInFreeText => ErrorCode::E1013,
            SectionErrorKind::FieldInTypesetText => ErrorCode::E1014,
            SectionErrorKind::StyleSheetInTypesetText => ErrorCode::E1015,
            SectionErrorKind::FreeTextInTypesetText => ErrorCode::E1016,
            SectionErrorKind::FieldAfterKey => ErrorCode::E1017,
            SectionErrorKind::MissingKey => ErrorCode::E1018,
        }
    }

    /// Section errors are always errors, never warnings.
    pub fn at(&self, position: Position) -> Diagnostic {
        Diagnostic::error(self.code(), position, self.to_string())
    }
}
