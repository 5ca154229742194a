//! File-section tokenizer for ABC notation.
//!
//! Second tokenizer stage. The line scanner in `abc_lexer_core` classifies
//! physical lines; this crate reads that stream as a document made of a
//! file header, tunes (header and body), free text and typeset text, and
//! inserts synthetic `*Start` / `*End` markers around each section.
//!
//! # Architecture
//!
//! - [`FileState`]: which section the tokenizer is in
//! - [`transition()`]: the pure `(state, token) -> Transition` table
//! - [`PendingTokens`]: one reprocess slot plus a FIFO of synthetic tokens
//! - [`FileTokenizer`]: pull-based driver, also an `Iterator`
//!
//! Malformed documents never stop the stream. Each problem is reported once
//! through the error sink and the machine moves to a state from which the
//! rest of the document still tokenizes. Only a disagreement between the
//! scanner and the state machine is fatal ([`TokenizerFault`]).
//!
//! # Example
//!
//! ```
//! use abc_ir::TokenKind;
//! use abc_lexer::{tokenize, TokenizerConfig};
//!
//! let output = tokenize("%abc-2.1\nX:1\nK:C\nabc|\n", &TokenizerConfig::default())
//!     .map_err(|fault| fault.to_string())?;
//! assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! assert!(output.diagnostics.is_empty());
//! # Ok::<(), String>(())
//! ```

mod config;
mod fault;
mod pending;
mod section_error;
mod state;
mod tokenizer;
pub mod transition;

use abc_diagnostic::Diagnostic;
use abc_ir::Token;

pub use config::{TokenizerConfig, SUPPORTED_VERSION};
pub use fault::TokenizerFault;
pub use pending::PendingTokens;
pub use section_error::SectionErrorKind;
pub use state::FileState;
pub use tokenizer::FileTokenizer;
pub use transition::{transition, Outcome, Transition};

/// Everything produced by tokenizing one document.
#[derive(Clone, Debug, Default)]
pub struct TokenizeOutput {
    /// The full stream, ending with exactly one `Eof`.
    pub tokens: Vec<Token>,
    /// Diagnostics in report order.
    pub diagnostics: Vec<Diagnostic>,
}

impl TokenizeOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }
}

/// Tokenize a whole document.
///
/// # Errors
///
/// Returns the first [`TokenizerFault`]; diagnostics are not errors and end
/// up in [`TokenizeOutput::diagnostics`].
pub fn tokenize(source: &str, config: &TokenizerConfig) -> Result<TokenizeOutput, TokenizerFault> {
    let mut tokenizer = FileTokenizer::with_config(source, config);
    let tokens = tokenizer.by_ref().collect::<Result<Vec<_>, _>>()?;
    Ok(TokenizeOutput {
        tokens,
        diagnostics: tokenizer.into_diagnostics(),
    })
}
