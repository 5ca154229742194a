//! Fatal tokenizer faults.

use abc_ir::{Position, TokenKind};

use crate::FileState;

/// The scanner and the state machine disagree about the document.
///
/// Unlike diagnostics these are never recovered from: the tokenizer that
/// raised one returns the same fault on every later call.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokenizerFault {
    #[error("ABC declaration at {position} reached the {state} state")]
    DeclarationOutsideInitial { state: FileState, position: Position },

    #[error("music code at {position} reached the {state} state outside a tune")]
    MusicCodeOutsideTune { state: FileState, position: Position },

    #[error("free text at {position} reached the {state} state inside a tune")]
    FreeTextInsideTune { state: FileState, position: Position },

    #[error("{kind} token at {position} cannot be dispatched in the {state} state")]
    UnexpectedKind {
        state: FileState,
        kind: TokenKind,
        position: Position,
    },

    #[error("deferred slot already holds a token when deferring the one at {position}")]
    DeferredSlotOccupied { position: Position },
}
