//! Line classification.
//!
//! [`LineScanner`] turns one physical line into one token, plus a second
//! Comment token when a music or field line carries a trailing `%` comment.

use std::borrow::Cow;

use abc_diagnostic::ErrorSink;
use abc_ir::{Position, TextKind, Token, TokenKind};
use tracing::trace;

use crate::{decode_escapes, ScanConfig, ScanErrorKind, SourceLines};

/// Pull-based line scanner.
///
/// Lines are handed out in order. Once the input is exhausted every call
/// returns an `Eof` token at `(line_count + 1, 1)`.
pub struct LineScanner<'src> {
    lines: SourceLines<'src>,
    config: ScanConfig,
    /// `%` + pseudo-comment prefix.
    marker: String,
    /// 0-based index of the line the next call scans.
    cursor: usize,
    /// Trailing comment split off the line at `cursor`.
    pending_comment: Option<Token>,
    in_text_block: bool,
}

impl<'src> LineScanner<'src> {
    pub fn new(source: &'src str, config: ScanConfig) -> Self {
        LineScanner {
            lines: SourceLines::split(source, config.line_terminator),
            marker: config.directive_marker(),
            config,
            cursor: 0,
            pending_comment: None,
            in_text_block: false,
        }
    }

    /// Number of physical lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Whether a `%%begintext` block is open.
    pub fn in_text_block(&self) -> bool {
        self.in_text_block
    }

    /// Scan the next line.
    ///
    /// `in_tune` decides whether an unclassified line is MusicCode (inside a
    /// tune) or FreeText. Line-level problems go to `sink`; the returned
    /// token is never an Error token.
    pub fn next_line_token(&mut self, in_tune: bool, sink: &mut dyn ErrorSink) -> Token {
        if let Some(comment) = self.pending_comment.take() {
            self.cursor += 1;
            return comment;
        }

        let Some(line) = self.lines.get(self.cursor) else {
            let position = Position::line_start(line_number(self.lines.line_count()));
            if self.in_text_block {
                self.in_text_block = false;
                sink.report(ScanErrorKind::UnterminatedTextBlock.at(position));
            }
            return Token::eof(position);
        };

        let position = Position::line_start(line_number(self.cursor));
        let (kind, mut value) = self.classify(line, in_tune, position, sink);

        if matches!(kind, TokenKind::MusicCode | TokenKind::InformationField) {
            if let Some(index) = comment_start(line) {
                let mut comment = Token::new(
                    TokenKind::Comment,
                    position.with_column(char_column(line, index)),
                )
                .with_original_line(line);
                comment.value = non_empty(line[index + 1..].trim());
                value = Some(line[..index].to_owned());
                self.pending_comment = Some(comment);
            }
        }

        if self.config.decode_text && decodes_value(kind) {
            if let Some(raw) = value.as_mut() {
                let decoded = match decode_escapes(raw) {
                    Cow::Owned(decoded) => Some(decoded),
                    Cow::Borrowed(_) => None,
                };
                if let Some(decoded) = decoded {
                    *raw = decoded;
                }
            }
        }

        trace!(
            line = position.line,
            kind = %kind,
            comment = self.pending_comment.is_some(),
            "classified line"
        );

        if self.pending_comment.is_none() {
            self.cursor += 1;
        }

        let mut token = Token::new(kind, position).with_original_line(line);
        token.value = value;
        token
    }

    /// Classify a line; first matching rule wins.
    fn classify(
        &mut self,
        line: &str,
        in_tune: bool,
        position: Position,
        sink: &mut dyn ErrorSink,
    ) -> (TokenKind, Option<String>) {
        if self.cursor == 0 && line.starts_with("%abc") {
            let version = line
                .strip_prefix("%abc-")
                .or_else(|| line.strip_prefix("%abc"))
                .unwrap_or_default();
            return (TokenKind::AbcDeclaration, Some(version.trim().to_owned()));
        }

        if self.in_text_block {
            return self.classify_in_text_block(line, position, sink);
        }

        if is_information_field(line) {
            return (TokenKind::InformationField, Some(line.to_owned()));
        }

        if let Some(directive) = line.strip_prefix(self.marker.as_str()) {
            if let Some(rest) = directive.strip_prefix("begintext") {
                if !rest.trim().is_empty() {
                    sink.report(ScanErrorKind::TrailingTextAfterBeginText.at(position));
                }
                self.in_text_block = true;
                return (TokenKind::Text(TextKind::BeginText), non_empty(rest));
            }
            if let Some(rest) = strip_keyword(directive, "text") {
                return (TokenKind::Text(TextKind::Text), non_empty(rest.trim_start()));
            }
            if let Some(rest) = strip_keyword(directive, "center") {
                return (TokenKind::Text(TextKind::Center), non_empty(rest.trim_start()));
            }
            return (TokenKind::StyleSheet, non_empty(directive));
        }

        let content = line.trim_start();
        if let Some(comment) = content.strip_prefix('%') {
            return (TokenKind::Comment, non_empty(comment.trim()));
        }

        if content.is_empty() {
            return (TokenKind::BlankLine, None);
        }

        let kind = if in_tune {
            TokenKind::MusicCode
        } else {
            TokenKind::FreeText
        };
        (kind, Some(line.to_owned()))
    }

    fn classify_in_text_block(
        &mut self,
        line: &str,
        position: Position,
        sink: &mut dyn ErrorSink,
    ) -> (TokenKind, Option<String>) {
        let Some(directive) = line.strip_prefix(self.marker.as_str()) else {
            sink.report(ScanErrorKind::TextBlockLineWithoutDirective.at(position));
            return (TokenKind::Text(TextKind::Text), non_empty(line));
        };
        match directive.strip_prefix("endtext") {
            Some(rest) => {
                if !rest.trim().is_empty() {
                    sink.report(ScanErrorKind::TrailingTextAfterEndText.at(position));
                }
                self.in_text_block = false;
                (TokenKind::Text(TextKind::EndText), non_empty(rest))
            }
            None => (TokenKind::Text(TextKind::Text), non_empty(directive)),
        }
    }
}

/// `^[A-Za-z]:`
fn is_information_field(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Strip a directive keyword that stands alone: `%%textfont` is not `%%text`.
///
/// Only `text` and `center` need this; the block delimiters match as plain
/// prefixes, with any suffix reported as trailing content.
fn strip_keyword<'a>(directive: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = directive.strip_prefix(keyword)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Byte index of the first `%` not preceded by a backslash.
fn comment_start(line: &str) -> Option<usize> {
    let mut previous = None;
    for (index, c) in line.char_indices() {
        if c == '%' && previous != Some('\\') {
            return Some(index);
        }
        previous = Some(c);
    }
    None
}

fn decodes_value(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::InformationField | TokenKind::FreeText | TokenKind::Text(_)
    )
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// 1-based line number for a 0-based line index.
fn line_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// 1-based character column of the byte at `index`.
fn char_column(line: &str, index: usize) -> u32 {
    u32::try_from(line[..index].chars().count() + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
