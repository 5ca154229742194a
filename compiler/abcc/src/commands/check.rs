//! The `check` command: report diagnostics only.

use abc_diagnostic::emitter::DiagnosticEmitter;
use abc_lexer::{tokenize, TokenizerConfig};
use tracing::debug;

use super::{read_file, report_diagnostics, stderr_emitter, CliOptions};
use crate::CliError;

/// Check the file named in `options`.
pub fn check_file(options: &CliOptions) -> Result<u8, CliError> {
    let source = read_file(&options.path)?;
    let config = options.tokenizer_config(&source);
    check_source(&source, &config, &mut stderr_emitter(options))
}

/// Tokenize `source` and render its diagnostics with a summary.
pub fn check_source(
    source: &str,
    config: &TokenizerConfig,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<u8, CliError> {
    let output = tokenize(source, config)?;
    debug!(
        tokens = output.tokens.len(),
        errors = output.error_count(),
        warnings = output.warning_count(),
        "checked document"
    );
    Ok(report_diagnostics(emitter, &output.diagnostics))
}
