//! Token kinds for ABC documents.

use std::fmt;

/// Flavour of a typeset-text line.
///
/// Only [`TokenKind::Text`] carries one, so a subkind on any other token
/// cannot be represented.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextKind {
    /// `%%text` line, or a `%%` line inside a text block.
    Text,
    /// `%%center` line.
    Center,
    /// `%%begintext`: opens a text block.
    BeginText,
    /// `%%endtext`: closes a text block.
    EndText,
}

impl TextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Text => "Text",
            TextKind::Center => "Center",
            TextKind::BeginText => "BeginText",
            TextKind::EndText => "EndText",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds.
///
/// The first group is produced by the line scanner, one (or two, when a
/// trailing comment is split off) per physical line. The section markers are
/// only ever synthesized by the file-section state machine.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Line tokens
    /// `%abc-2.1` on the first line.
    AbcDeclaration,
    BlankLine,
    Comment,
    /// Prose outside of any tune.
    FreeText,
    /// `K:G`, `T:Title`, ...
    InformationField,
    MusicCode,
    /// `%%` directive that is not a text directive.
    StyleSheet,
    Text(TextKind),

    // Section markers
    FileHeaderStart,
    FileHeaderEnd,
    TuneHeaderStart,
    TuneHeaderEnd,
    TuneBodyStart,
    TuneBodyEnd,

    // System
    Error,
    Eof,
}

impl TokenKind {
    /// Synthesized section start/end markers.
    pub fn is_section_marker(self) -> bool {
        matches!(
            self,
            TokenKind::FileHeaderStart
                | TokenKind::FileHeaderEnd
                | TokenKind::TuneHeaderStart
                | TokenKind::TuneHeaderEnd
                | TokenKind::TuneBodyStart
                | TokenKind::TuneBodyEnd
        )
    }

    /// The end marker paired with a start marker.
    pub fn matching_end(self) -> Option<TokenKind> {
        match self {
            TokenKind::FileHeaderStart => Some(TokenKind::FileHeaderEnd),
            TokenKind::TuneHeaderStart => Some(TokenKind::TuneHeaderEnd),
            TokenKind::TuneBodyStart => Some(TokenKind::TuneBodyEnd),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::AbcDeclaration => "AbcDeclaration",
            TokenKind::BlankLine => "BlankLine",
            TokenKind::Comment => "Comment",
            TokenKind::FreeText => "FreeText",
            TokenKind::InformationField => "InformationField",
            TokenKind::MusicCode => "MusicCode",
            TokenKind::StyleSheet => "StyleSheet",
            TokenKind::Text(_) => "Text",
            TokenKind::FileHeaderStart => "FileHeaderStart",
            TokenKind::FileHeaderEnd => "FileHeaderEnd",
            TokenKind::TuneHeaderStart => "TuneHeaderStart",
            TokenKind::TuneHeaderEnd => "TuneHeaderEnd",
            TokenKind::TuneBodyStart => "TuneBodyStart",
            TokenKind::TuneBodyEnd => "TuneBodyEnd",
            TokenKind::Error => "Error",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text(sub) => write!(f, "Text({sub})"),
            other => f.write_str(other.name()),
        }
    }
}
