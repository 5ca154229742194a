//! Tokens waiting to be handed out.

use std::collections::VecDeque;

use abc_ir::Token;

use crate::TokenizerFault;

/// One reprocess slot plus a FIFO of finished synthetic tokens.
///
/// The queue drains before the slot, and the slot before the scanner. A
/// deferred token goes through dispatch again; queued tokens do not.
#[derive(Clone, Debug, Default)]
pub struct PendingTokens {
    deferred: Option<Token>,
    queue: VecDeque<Token>,
}

impl PendingTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a token back for dispatch in the next step.
    ///
    /// # Errors
    ///
    /// The slot holds at most one token; deferring into a full slot is a
    /// [`TokenizerFault::DeferredSlotOccupied`].
    pub fn defer(&mut self, token: Token) -> Result<(), TokenizerFault> {
        if self.deferred.is_some() {
            return Err(TokenizerFault::DeferredSlotOccupied {
                position: token.position,
            });
        }
        self.deferred = Some(token);
        Ok(())
    }

    pub fn take_deferred(&mut self) -> Option<Token> {
        self.deferred.take()
    }

    pub fn enqueue(&mut self, token: Token) {
        self.queue.push_back(token);
    }

    pub fn dequeue(&mut self) -> Option<Token> {
        self.queue.pop_front()
    }
}
