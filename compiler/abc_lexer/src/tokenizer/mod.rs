//! The file tokenizer.
//!
//! Pulls line tokens from the scanner, runs them through the transition
//! table, and hands out the sectioned stream one token per call.
//!
//! Every step first drains the synthetic queue, then the deferred slot, and
//! only then asks the scanner for a new line. A step may yield nothing
//! (suppressed blank lines, requeues), so [`FileTokenizer::next_token`] loops
//! until one does.

use std::iter::FusedIterator;

use abc_diagnostic::{Diagnostic, DiagnosticSink, ErrorSink};
use abc_ir::{Token, TokenKind};
use abc_lexer_core::LineScanner;
use tracing::{debug, error};

use crate::transition::{transition, Outcome, Transition};
use crate::{FileState, PendingTokens, TokenizerConfig, TokenizerFault};

/// Sectioned token stream over one ABC document.
pub struct FileTokenizer<'a> {
    scanner: LineScanner<'a>,
    sink: DiagnosticSink<'a>,
    state: FileState,
    pending: PendingTokens,
    supported_version: String,
    fault: Option<TokenizerFault>,
    finished: bool,
}

impl<'a> FileTokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, &TokenizerConfig::default())
    }

    pub fn with_config(source: &'a str, config: &TokenizerConfig) -> Self {
        FileTokenizer {
            scanner: LineScanner::new(source, config.scan),
            sink: DiagnosticSink::new(),
            state: FileState::Initial,
            pending: PendingTokens::new(),
            supported_version: config.supported_version.clone(),
            fault: None,
            finished: false,
        }
    }

    /// Install a callback that receives an Error token for every problem,
    /// in document order, as soon as it is detected.
    ///
    /// Replaces any previously registered observer.
    pub fn register_error_observer(&mut self, observer: impl FnMut(Token) + 'a) {
        self.sink.set_observer(observer);
    }

    pub fn state(&self) -> FileState {
        self.state
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.sink.diagnostics()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.sink.into_diagnostics()
    }

    /// Produce the next token.
    ///
    /// After `Eof` every call returns `Eof` again.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenizerFault`] when the scanner and the state machine
    /// desynchronize. The tokenizer is then poisoned and returns the same
    /// fault from every later call.
    pub fn next_token(&mut self) -> Result<Token, TokenizerFault> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        loop {
            match self.step() {
                Ok(Some(token)) => return Ok(token),
                Ok(None) => {}
                Err(fault) => {
                    error!(%fault, state = %self.state, "tokenizer fault");
                    self.fault = Some(fault.clone());
                    return Err(fault);
                }
            }
        }
    }

    fn step(&mut self) -> Result<Option<Token>, TokenizerFault> {
        if let Some(token) = self.pending.dequeue() {
            return Ok(Some(token));
        }

        let token = match self.pending.take_deferred() {
            Some(token) => token,
            None => self
                .scanner
                .next_line_token(self.state.is_in_tune(), &mut self.sink),
        };

        match token.kind {
            TokenKind::Comment => return Ok(Some(token)),
            TokenKind::Eof => return Ok(Some(self.close_open_section(token))),
            _ => {}
        }

        let Transition {
            next,
            error,
            outcome,
        } = transition(self.state, &token, &self.supported_version)?;

        if let Some(error) = error {
            self.sink.report(error.at(token.position));
        }
        if next != self.state {
            debug!(
                from = %self.state,
                to = %next,
                line = token.position.line,
                kind = %token.kind,
                "section transition"
            );
        }
        self.state = next;

        self.apply(outcome, token)
    }

    fn apply(&mut self, outcome: Outcome, token: Token) -> Result<Option<Token>, TokenizerFault> {
        let emitted = match outcome {
            Outcome::Pass => Some(token),
            Outcome::Suppress => None,
            Outcome::Requeue => {
                self.pending.defer(token)?;
                None
            }
            Outcome::Retype(kind) => Some(token.retyped(kind)),
            Outcome::OpenBefore(kind) => {
                let marker = token.retyped(kind);
                self.pending.enqueue(token);
                Some(marker)
            }
            Outcome::MarkThenRequeue(kind) => {
                let marker = token.retyped(kind);
                self.pending.defer(token)?;
                Some(marker)
            }
            Outcome::StartTuneBody => {
                let header_end = token.retyped(TokenKind::TuneHeaderEnd);
                self.pending.enqueue(token.retyped(TokenKind::TuneBodyStart));
                self.pending.defer(token)?;
                Some(header_end)
            }
        };
        Ok(emitted)
    }

    /// Emit the end marker of any open section ahead of `Eof`.
    fn close_open_section(&mut self, eof: Token) -> Token {
        let closer = match self.state {
            FileState::FileHeader { opened: true } => TokenKind::FileHeaderEnd,
            FileState::TuneHeader { .. } => TokenKind::TuneHeaderEnd,
            FileState::TuneBody => TokenKind::TuneBodyEnd,
            _ => return eof,
        };
        debug!(from = %self.state, kind = %closer, "closing section at end of input");
        self.state = FileState::InterTune;
        let marker = eof.retyped(closer);
        self.pending.enqueue(eof);
        marker
    }
}

impl Iterator for FileTokenizer<'_> {
    type Item = Result<Token, TokenizerFault>;

    /// Yields tokens up to and including `Eof`, or up to the first fault.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl FusedIterator for FileTokenizer<'_> {}
