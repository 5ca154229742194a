//! Scanner configuration.

use crate::LineTerminator;

/// Configuration for the line scanner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ScanConfig {
    /// Line terminator used to split the document. Never inferred from the
    /// host platform.
    pub line_terminator: LineTerminator,
    /// Second character of the directive marker: `%` + prefix (`%%` by
    /// default) starts a stylesheet or text directive instead of a comment.
    pub pseudo_comment_prefix: char,
    /// Decode escapes and entities in field, free text and typeset text
    /// values.
    pub decode_text: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            line_terminator: LineTerminator::Lf,
            pseudo_comment_prefix: '%',
            decode_text: true,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    #[must_use]
    pub fn with_pseudo_comment_prefix(mut self, prefix: char) -> Self {
        self.pseudo_comment_prefix = prefix;
        self
    }

    #[must_use]
    pub fn with_decode_text(mut self, decode_text: bool) -> Self {
        self.decode_text = decode_text;
        self
    }

    /// The directive marker, `%` followed by the pseudo-comment prefix.
    pub fn directive_marker(&self) -> String {
        let mut marker = String::with_capacity(2);
        marker.push('%');
        marker.push(self.pseudo_comment_prefix);
        marker
    }
}
