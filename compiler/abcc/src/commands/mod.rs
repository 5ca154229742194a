//! Command handlers for the `abc` CLI.
//!
//! Each submodule implements one command. Shared pieces (flag parsing,
//! file reading, diagnostic rendering) live here in the module root.

use std::io::{self, IsTerminal};

use abc_diagnostic::emitter::{ColorMode, DiagnosticEmitter, Summary, TerminalEmitter};
use abc_diagnostic::Diagnostic;
use abc_lexer::TokenizerConfig;
use abc_lexer_core::{LineTerminator, ScanConfig};

use crate::CliError;

mod check;
mod clean;
mod explain;
mod lex;

pub use check::{check_file, check_source};
pub use clean::{clean_file, clean_source};
pub use explain::{explain_code, explain_error};
pub use lex::{format_token, lex_file, lex_source};

/// Flags shared by the file commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub path: String,
    /// `None` detects the terminator from the file contents.
    pub line_ending: Option<LineTerminator>,
    pub decode_text: bool,
    pub prefix: char,
    pub color: ColorMode,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            path: String::new(),
            line_ending: None,
            decode_text: true,
            prefix: '%',
            color: ColorMode::Auto,
        }
    }
}

impl CliOptions {
    /// The terminator to split `source` with.
    pub fn terminator_for(&self, source: &str) -> LineTerminator {
        self.line_ending
            .unwrap_or_else(|| LineTerminator::detect(source))
    }

    /// Tokenizer settings for `source`.
    pub fn tokenizer_config(&self, source: &str) -> TokenizerConfig {
        let scan = ScanConfig::default()
            .with_line_terminator(self.terminator_for(source))
            .with_pseudo_comment_prefix(self.prefix)
            .with_decode_text(self.decode_text);
        TokenizerConfig::default().with_scan(scan)
    }
}

/// Parse the arguments following a file command.
///
/// Flags may appear before or after the path.
pub fn parse_options(args: &[String]) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--line-ending=") {
            options.line_ending = if value.eq_ignore_ascii_case("auto") {
                None
            } else {
                let terminator = value.parse().map_err(|()| CliError::InvalidValue {
                    option: "--line-ending",
                    value: value.to_owned(),
                })?;
                Some(terminator)
            };
        } else if arg == "--no-decode" {
            options.decode_text = false;
        } else if let Some(value) = arg.strip_prefix("--prefix=") {
            let mut chars = value.chars();
            options.prefix = match (chars.next(), chars.next()) {
                (Some(prefix), None) => prefix,
                _ => {
                    return Err(CliError::InvalidValue {
                        option: "--prefix",
                        value: value.to_owned(),
                    })
                }
            };
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = value.parse().map_err(|()| CliError::InvalidValue {
                option: "--color",
                value: value.to_owned(),
            })?;
        } else if arg.starts_with("--") {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    options.path = path.ok_or(CliError::MissingPath)?;
    Ok(options)
}

/// Read a source file to a string.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|error| CliError::from_read(path, error))
}

/// Diagnostic emitter for stderr, honoring `--color`.
pub(crate) fn stderr_emitter(options: &CliOptions) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(options.color, io::stderr().is_terminal()).with_path(&options.path)
}

/// Render diagnostics followed by a summary line.
///
/// Returns the exit status: 1 when any diagnostic is an error, 0 otherwise.
pub fn report_diagnostics(emitter: &mut impl DiagnosticEmitter, diagnostics: &[Diagnostic]) -> u8 {
    let summary = Summary::of(diagnostics);

    emitter.emit_all(diagnostics);
    emitter.emit_summary(summary);
    emitter.flush();

    u8::from(summary.errors > 0)
}
