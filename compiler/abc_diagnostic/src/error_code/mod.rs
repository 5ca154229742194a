//! Error codes for all tokenizer diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the stage. Used by the CLI output and for documentation.

use std::fmt;

/// Error codes for all tokenizer diagnostics.
///
/// Format: E#### / W#### where the first digit indicates the stage:
/// - E0xxx / W0xxx: line scanner
/// - E1xxx: file-section state machine
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Line scanner errors (E0xxx)
    /// Line inside a `%%begintext` block does not start with `%%`
    E0001,

    // Section errors (E1xxx)
    /// Unsupported ABC version in the declaration line
    E1001,
    /// Missing `%abc` declaration before the file header
    E1002,
    /// Missing `%abc` declaration and no file header
    E1003,
    /// Free text at the start of the file
    E1004,
    /// Typeset text at the start of the file
    E1005,
    /// Free text inside the file header
    E1006,
    /// Typeset text inside the file header
    E1007,
    /// Tune started inside the file header
    E1008,
    /// Tune does not start with an `X:` field
    E1009,
    /// Stylesheet directive between tunes
    E1010,
    /// Information field inside free text
    E1011,
    /// Stylesheet directive inside free text
    E1012,
    /// Typeset text inside free text
    E1013,
    /// Information field inside typeset text
    E1014,
    /// Stylesheet directive inside typeset text
    E1015,
    /// Free text inside typeset text
    E1016,
    /// Information field after the `K:` field in a tune header
    E1017,
    /// Tune header ended without a `K:` field
    E1018,

    // Warnings
    /// Text after `%%endtext` is ignored
    W0001,
    /// Text after `%%begintext` is ignored
    W0002,
    /// Text block not closed before end of input
    W0003,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
        ErrorCode::E1016,
        ErrorCode::E1017,
        ErrorCode::E1018,
        ErrorCode::W0001,
        ErrorCode::W0002,
        ErrorCode::W0003,
    ];

    /// Get the string representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            ErrorCode::E1018 => "E1018",
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
            ErrorCode::W0003 => "W0003",
        }
    }

    /// One-line description, used by `abc check --explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "line inside a text block does not begin with %%",
            ErrorCode::E1001 => "unsupported ABC version",
            ErrorCode::E1002 => "missing %abc declaration",
            ErrorCode::E1003 => "missing %abc declaration and file header",
            ErrorCode::E1004 => "free text at the start of the file",
            ErrorCode::E1005 => "typeset text at the start of the file",
            ErrorCode::E1006 => "free text inside the file header",
            ErrorCode::E1007 => "typeset text inside the file header",
            ErrorCode::E1008 => "tune started inside the file header",
            ErrorCode::E1009 => "tune does not start with X:",
            ErrorCode::E1010 => "stylesheet directive between tunes",
            ErrorCode::E1011 => "information field inside free text",
            ErrorCode::E1012 => "stylesheet directive inside free text",
            ErrorCode::E1013 => "typeset text inside free text",
            ErrorCode::E1014 => "information field inside typeset text",
            ErrorCode::E1015 => "stylesheet directive inside typeset text",
            ErrorCode::E1016 => "free text inside typeset text",
            ErrorCode::E1017 => "information field after K:",
            ErrorCode::E1018 => "tune header missing K:",
            ErrorCode::W0001 => "text after %%endtext is ignored",
            ErrorCode::W0002 => "text after %%begintext is ignored",
            ErrorCode::W0003 => "text block not closed with %%endtext",
        }
    }

    /// Check if this is a line scanner code (E0xxx/W0xxx range).
    pub fn is_scanner_code(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::W0001 | ErrorCode::W0002 | ErrorCode::W0003
        )
    }

    /// Check if this is a section error (E1xxx range).
    pub fn is_section_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W0001 | ErrorCode::W0002 | ErrorCode::W0003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"` or `"W0001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
