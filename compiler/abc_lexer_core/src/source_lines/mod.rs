//! Physical line splitting.
//!
//! The whole document is split into borrowed lines before scanning starts,
//! so the scanner never performs I/O and can index lines directly.

use std::fmt;

/// Line terminator policy.
///
/// Splitting uses exactly the configured sequence. With [`LineTerminator::Lf`]
/// a CRLF document keeps a trailing `\r` on every line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Cr => "\r",
        }
    }

    /// Pick the terminator of the first line break in `source`.
    ///
    /// Falls back to `Lf` for single-line documents.
    pub fn detect(source: &str) -> Self {
        let bytes = source.as_bytes();
        match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if bytes[i] == b'\n' => LineTerminator::Lf,
            Some(i) if bytes.get(i + 1) == Some(&b'\n') => LineTerminator::CrLf,
            Some(_) => LineTerminator::Cr,
            None => LineTerminator::Lf,
        }
    }
}

impl fmt::Display for LineTerminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineTerminator::Lf => "lf",
            LineTerminator::CrLf => "crlf",
            LineTerminator::Cr => "cr",
        })
    }
}

impl std::str::FromStr for LineTerminator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineTerminator::Lf),
            "crlf" => Ok(LineTerminator::CrLf),
            "cr" => Ok(LineTerminator::Cr),
            _ => Err(()),
        }
    }
}

/// A document split into physical lines.
///
/// A terminator at the very end does not start another line, and the empty
/// document has no lines at all.
#[derive(Clone, Debug)]
pub struct SourceLines<'src> {
    lines: Vec<&'src str>,
}

impl<'src> SourceLines<'src> {
    pub fn split(source: &'src str, terminator: LineTerminator) -> Self {
        let sep = terminator.as_str();
        let mut lines: Vec<&'src str> = if source.is_empty() {
            Vec::new()
        } else {
            source.split(sep).collect()
        };
        if source.ends_with(sep) {
            lines.pop();
        }
        SourceLines { lines }
    }

    /// Number of physical lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&'src str> {
        self.lines.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'src str> + '_ {
        self.lines.iter().copied()
    }
}
