//! One-line-per-report terminal output.
//!
//! Each diagnostic renders as `location: severity[CODE]: message`, where the
//! location is `path:line:col` when a path is known and `line:col`
//! otherwise. This is the shape editors and `grep` already understand.

use std::fmt;
use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::{DiagnosticEmitter, Summary};

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the output is a terminal.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ColorMode::Auto, ColorMode::Always, ColorMode::Never]
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        })
    }
}

/// ANSI styles used in the output.
#[derive(Clone, Copy)]
enum Style {
    Error,
    Warning,
    Location,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Location => "\x1b[1m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

const RESET: &str = "\x1b[0m";

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Writes diagnostics to any `io::Write`.
///
/// Write errors are ignored: diagnostics go to stderr, and there is nowhere
/// else to report a failure to write them.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path: None,
        }
    }

    /// Prefix locations with the document's path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn styled(&mut self, text: &str, style: Style) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.ansi())
        } else {
            self.writer.write_all(text.as_bytes())
        };
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let location = match &self.path {
            Some(path) => format!("{path}:{}", diagnostic.position),
            None => diagnostic.position.to_string(),
        };
        self.styled(&location, Style::Location);
        let _ = self.writer.write_all(b": ");
        let label = format!("{}[{}]", diagnostic.severity, diagnostic.code);
        self.styled(&label, Style::for_severity(diagnostic.severity));
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn emit_summary(&mut self, summary: Summary) {
        if summary.is_empty() {
            return;
        }
        let (lead, style) = if summary.errors > 0 {
            ("error", Style::Error)
        } else {
            ("warning", Style::Warning)
        };
        let place = self.path.clone().unwrap_or_else(|| "document".to_owned());

        self.styled(lead, style);
        let _ = writeln!(
            self.writer,
            ": {}, {} in {place}",
            count(summary.errors, "error"),
            count(summary.warnings, "warning")
        );
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
