//! Section transition table.
//!
//! [`transition`] is a pure function of the current state and one line token.
//! It decides the next state, an optional section error, and what to do with
//! the token ([`Outcome`]). The tokenizer applies the outcome to its pending
//! buffer; nothing here touches the token stream.
//!
//! Recovery never backtracks. Each error pairs with a transition that either
//! passes the offending token through in a new state or requeues it so the
//! next state dispatches it again.

use abc_ir::{Token, TokenKind};

use crate::{FileState, SectionErrorKind, TokenizerFault};

/// What the tokenizer does with the dispatched token.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Emit the token unchanged.
    Pass,
    /// Drop the token.
    Suppress,
    /// Dispatch the token again in the next state.
    Requeue,
    /// Emit a marker of this kind in place of the token.
    Retype(TokenKind),
    /// Emit a marker of this kind, then the token itself.
    OpenBefore(TokenKind),
    /// Emit a marker of this kind, then dispatch the token again.
    MarkThenRequeue(TokenKind),
    /// Emit `TuneHeaderEnd` and `TuneBodyStart`, then dispatch the token
    /// again.
    StartTuneBody,
}

/// Result of dispatching one token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    pub next: FileState,
    pub error: Option<SectionErrorKind>,
    pub outcome: Outcome,
}

impl Transition {
    fn to(next: FileState, outcome: Outcome) -> Self {
        Transition {
            next,
            error: None,
            outcome,
        }
    }

    fn with_error(mut self, error: SectionErrorKind) -> Self {
        self.error = Some(error);
        self
    }
}

/// Dispatch a line token in `state`.
///
/// `supported_version` is the declaration value accepted without error.
///
/// # Errors
///
/// Returns a [`TokenizerFault`] for combinations the scanner can never
/// produce: a declaration after the first dispatch, music code outside a
/// tune, free text inside a tune, or a kind that is not a line kind
/// (section markers, `Error`, `Comment`, `Eof`).
pub fn transition(
    state: FileState,
    token: &Token,
    supported_version: &str,
) -> Result<Transition, TokenizerFault> {
    let position = token.position;
    match token.kind {
        TokenKind::AbcDeclaration if state != FileState::Initial => {
            return Err(TokenizerFault::DeclarationOutsideInitial { state, position });
        }
        TokenKind::MusicCode if !state.is_in_tune() => {
            return Err(TokenizerFault::MusicCodeOutsideTune { state, position });
        }
        TokenKind::FreeText if state.is_in_tune() => {
            return Err(TokenizerFault::FreeTextInsideTune { state, position });
        }
        _ => {}
    }

    let value = token.value_str().unwrap_or_default();
    let result = match (state, token.kind) {
        // Initial
        (FileState::Initial, TokenKind::AbcDeclaration) => {
            let next = Transition::to(FileState::FileHeader { opened: false }, Outcome::Pass);
            if value == supported_version {
                next
            } else {
                next.with_error(SectionErrorKind::UnsupportedVersion {
                    version: value.to_owned(),
                    expected: supported_version.to_owned(),
                })
            }
        }
        (FileState::Initial, TokenKind::InformationField | TokenKind::StyleSheet) => {
            Transition::to(FileState::FileHeader { opened: false }, Outcome::Requeue)
                .with_error(SectionErrorKind::MissingDeclaration)
        }
        (FileState::Initial, TokenKind::BlankLine) => {
            Transition::to(FileState::InterTune, Outcome::Suppress)
                .with_error(SectionErrorKind::MissingDeclarationNoHeader)
        }
        (FileState::Initial, TokenKind::FreeText) => {
            Transition::to(FileState::FreeText, Outcome::Pass)
                .with_error(SectionErrorKind::FreeTextAtStart)
        }
        (FileState::Initial, TokenKind::Text(_)) => {
            Transition::to(FileState::TypesetText, Outcome::Pass)
                .with_error(SectionErrorKind::TypesetTextAtStart)
        }

        // File header
        (FileState::FileHeader { opened }, TokenKind::InformationField)
            if is_tune_start(value) =>
        {
            if opened {
                Transition::to(
                    FileState::InterTune,
                    Outcome::MarkThenRequeue(TokenKind::FileHeaderEnd),
                )
                .with_error(SectionErrorKind::TuneInFileHeader)
            } else {
                // No header was written: the tune follows the declaration.
                Transition::to(FileState::InterTune, Outcome::Requeue)
            }
        }
        (
            FileState::FileHeader { opened },
            TokenKind::InformationField | TokenKind::StyleSheet,
        ) => {
            let outcome = if opened {
                Outcome::Pass
            } else {
                Outcome::OpenBefore(TokenKind::FileHeaderStart)
            };
            Transition::to(FileState::FileHeader { opened: true }, outcome)
        }
        (FileState::FileHeader { opened }, TokenKind::BlankLine) => {
            let outcome = if opened {
                Outcome::Retype(TokenKind::FileHeaderEnd)
            } else {
                Outcome::Suppress
            };
            Transition::to(FileState::InterTune, outcome)
        }
        (FileState::FileHeader { opened }, TokenKind::FreeText) => {
            Transition::to(FileState::FreeText, leave_file_header(opened))
                .with_error(SectionErrorKind::FreeTextInFileHeader)
        }
        (FileState::FileHeader { opened }, TokenKind::Text(_)) => {
            Transition::to(FileState::TypesetText, leave_file_header(opened))
                .with_error(SectionErrorKind::TypesetTextInFileHeader)
        }

        // Between tunes
        (FileState::InterTune, TokenKind::InformationField) => {
            let next = Transition::to(
                FileState::TuneHeader { seen_key: false },
                Outcome::MarkThenRequeue(TokenKind::TuneHeaderStart),
            );
            if is_tune_start(value) {
                next
            } else {
                next.with_error(SectionErrorKind::TuneWithoutIndex {
                    field: value.trim_end().to_owned(),
                })
            }
        }
        (FileState::InterTune, TokenKind::StyleSheet) => {
            Transition::to(FileState::InterTune, Outcome::Pass)
                .with_error(SectionErrorKind::StyleSheetBetweenTunes)
        }
        (FileState::InterTune, TokenKind::BlankLine) => {
            Transition::to(FileState::InterTune, Outcome::Suppress)
        }
        (FileState::InterTune, TokenKind::FreeText) => {
            Transition::to(FileState::FreeText, Outcome::Pass)
        }
        (FileState::InterTune, TokenKind::Text(_)) => {
            Transition::to(FileState::TypesetText, Outcome::Pass)
        }

        // Free text
        (FileState::FreeText, TokenKind::FreeText) => {
            Transition::to(FileState::FreeText, Outcome::Pass)
        }
        (FileState::FreeText, TokenKind::BlankLine) => {
            Transition::to(FileState::InterTune, Outcome::Suppress)
        }
        (FileState::FreeText, TokenKind::InformationField) => {
            Transition::to(FileState::InterTune, Outcome::Requeue)
                .with_error(SectionErrorKind::FieldInFreeText)
        }
        (FileState::FreeText, TokenKind::StyleSheet) => {
            Transition::to(FileState::InterTune, Outcome::Pass)
                .with_error(SectionErrorKind::StyleSheetInFreeText)
        }
        (FileState::FreeText, TokenKind::Text(_)) => {
            Transition::to(FileState::TypesetText, Outcome::Pass)
                .with_error(SectionErrorKind::TypesetTextInFreeText)
        }

        // Typeset text
        (FileState::TypesetText, TokenKind::Text(_)) => {
            Transition::to(FileState::TypesetText, Outcome::Pass)
        }
        (FileState::TypesetText, TokenKind::InformationField) => {
            Transition::to(FileState::InterTune, Outcome::Requeue)
                .with_error(SectionErrorKind::FieldInTypesetText)
        }
        (FileState::TypesetText, TokenKind::StyleSheet) => {
            Transition::to(FileState::InterTune, Outcome::Pass)
                .with_error(SectionErrorKind::StyleSheetInTypesetText)
        }
        (FileState::TypesetText, TokenKind::BlankLine) => {
            Transition::to(FileState::InterTune, Outcome::Suppress)
        }
        (FileState::TypesetText, TokenKind::FreeText) => {
            Transition::to(FileState::FreeText, Outcome::Pass)
                .with_error(SectionErrorKind::FreeTextInTypesetText)
        }

        // Tune header
        (FileState::TuneHeader { seen_key }, TokenKind::InformationField) => {
            if is_key_field(value) {
                Transition::to(FileState::TuneHeader { seen_key: true }, Outcome::Pass)
            } else if seen_key {
                Transition::to(state, Outcome::Pass).with_error(SectionErrorKind::FieldAfterKey)
            } else {
                Transition::to(state, Outcome::Pass)
            }
        }
        (FileState::TuneHeader { .. }, TokenKind::Text(_) | TokenKind::StyleSheet) => {
            Transition::to(state, Outcome::Pass)
        }
        (FileState::TuneHeader { .. }, TokenKind::BlankLine) => Transition::to(
            FileState::InterTune,
            Outcome::Retype(TokenKind::TuneHeaderEnd),
        ),
        (FileState::TuneHeader { seen_key }, TokenKind::MusicCode) => {
            let next = Transition::to(FileState::TuneBody, Outcome::StartTuneBody);
            if seen_key {
                next
            } else {
                next.with_error(SectionErrorKind::MissingKey)
            }
        }

        // Tune body
        (
            FileState::TuneBody,
            TokenKind::InformationField
            | TokenKind::StyleSheet
            | TokenKind::MusicCode
            | TokenKind::Text(_),
        ) => Transition::to(FileState::TuneBody, Outcome::Pass),
        (FileState::TuneBody, TokenKind::BlankLine) => Transition::to(
            FileState::InterTune,
            Outcome::Retype(TokenKind::TuneBodyEnd),
        ),

        (state, kind) => {
            return Err(TokenizerFault::UnexpectedKind {
                state,
                kind,
                position,
            })
        }
    };
    Ok(result)
}

/// Leaving the file header early: close it first if it was opened.
fn leave_file_header(opened: bool) -> Outcome {
    if opened {
        Outcome::MarkThenRequeue(TokenKind::FileHeaderEnd)
    } else {
        Outcome::Pass
    }
}

fn is_tune_start(field: &str) -> bool {
    field.starts_with("X:")
}

fn is_key_field(field: &str) -> bool {
    field.starts_with("K:")
}
