//! The `lex` command: print the token stream of a file.

use std::io::{self, Write};

use abc_diagnostic::emitter::DiagnosticEmitter;
use abc_ir::Token;
use abc_lexer::{FileTokenizer, TokenizerConfig};

use super::{read_file, report_diagnostics, stderr_emitter, CliOptions};
use crate::CliError;

/// One token per line: `Kind(Subkind): value @ line:col`.
///
/// Tokens without a value print as `Kind @ line:col`.
pub fn format_token(token: &Token) -> String {
    match token.value_str() {
        Some(value) => format!("{}: {value} @ {}", token.kind, token.position),
        None => format!("{} @ {}", token.kind, token.position),
    }
}

/// Tokenize the file named in `options`, tokens to stdout and diagnostics
/// to stderr.
pub fn lex_file(options: &CliOptions) -> Result<u8, CliError> {
    let source = read_file(&options.path)?;
    let config = options.tokenizer_config(&source);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    lex_source(&source, &config, &mut out, &mut stderr_emitter(options))
}

/// Stream tokens of `source` into `out` as they are produced.
///
/// Diagnostics collected up to that point are still rendered when the
/// tokenizer faults; the fault is then returned.
pub fn lex_source(
    source: &str,
    config: &TokenizerConfig,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<u8, CliError> {
    let mut tokenizer = FileTokenizer::with_config(source, config);
    let mut fault = None;

    for result in tokenizer.by_ref() {
        match result {
            Ok(token) => writeln!(out, "{}", format_token(&token))?,
            Err(error) => {
                fault = Some(error);
                break;
            }
        }
    }
    out.flush()?;

    let status = report_diagnostics(emitter, tokenizer.diagnostics());
    match fault {
        Some(error) => Err(error.into()),
        None => Ok(status),
    }
}
