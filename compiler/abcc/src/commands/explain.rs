//! The `explain` command: describe a diagnostic code.

use std::io::{self, Write};

use abc_diagnostic::ErrorCode;

use crate::CliError;

/// Print the description of `code_str` to stdout.
pub fn explain_error(code_str: &str) -> Result<u8, CliError> {
    let stdout = io::stdout();
    explain_code(code_str, &mut stdout.lock())?;
    Ok(0)
}

/// Write what a code means, which stage reports it and at what severity.
pub fn explain_code(code_str: &str, out: &mut impl Write) -> Result<(), CliError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| CliError::UnknownCode(code_str.to_owned()))?;

    let severity = if code.is_warning() { "warning" } else { "error" };
    let stage = if code.is_section_error() {
        "file-section tokenizer"
    } else {
        "line scanner"
    };

    writeln!(out, "{}: {}", code.as_str(), code.description())?;
    writeln!(out)?;
    writeln!(out, "severity: {severity}")?;
    writeln!(out, "reported by: {stage}")?;
    Ok(())
}
