//! Token types for the ABC tokenizer.

mod kind;

pub use kind::{TextKind, TokenKind};

use std::fmt;

use crate::Position;

/// A token with its position in the source.
///
/// `value` is the payload text (field text, music code, comment body, ...)
/// and is absent for blank lines, section markers and EOF. `original_line`
/// keeps the unmodified physical line so consumers can reproduce the input.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub original_line: Option<String>,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token {
            kind,
            value: None,
            original_line: None,
            position,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_original_line(mut self, line: impl Into<String>) -> Self {
        self.original_line = Some(line.into());
        self
    }

    /// End-of-input token.
    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::Eof, position)
    }

    /// Error token carrying a diagnostic message.
    pub fn error(position: Position, message: impl Into<String>) -> Self {
        Token::new(TokenKind::Error, position).with_value(message)
    }

    /// Copy of this token with a different kind and no value.
    ///
    /// Section markers are built this way so they carry the position and
    /// source line of the token that triggered them.
    #[must_use]
    pub fn retyped(&self, kind: TokenKind) -> Self {
        Token {
            kind,
            value: None,
            original_line: self.original_line.clone(),
            position: self.position,
        }
    }

    /// Text subkind, present only for [`TokenKind::Text`].
    pub fn subkind(&self) -> Option<TextKind> {
        match self.kind {
            TokenKind::Text(sub) => Some(sub),
            _ => None,
        }
    }

    pub fn value_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({value:?}) @ {}", self.kind, self.position),
            None => write!(f, "{} @ {}", self.kind, self.position),
        }
    }
}

/// Renders as `Kind(Subkind): value`, the format used by the CLI listing.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind)?;
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}
