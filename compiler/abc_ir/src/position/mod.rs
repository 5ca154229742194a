//! Source positions.
//!
//! ABC is line oriented, so positions are tracked as 1-based line and column
//! numbers rather than byte offsets.

use std::fmt;

/// A 1-based line/column location in the source document.
///
/// Columns count characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// First column of the given line.
    #[inline]
    pub const fn line_start(line: u32) -> Self {
        Position { line, column: 1 }
    }

    /// Same line, different column.
    #[inline]
    #[must_use]
    pub const fn with_column(self, column: u32) -> Self {
        Position {
            line: self.line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::line_start(1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
