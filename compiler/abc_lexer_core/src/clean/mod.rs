//! Line cleaning and text decoding.
//!
//! ABC text may spell characters three ways besides literally:
//!
//! - `\\`, `\%`, `\&` for the literal characters
//! - `\uXXXX` / `\UXXXXXXXX` code points, and two-character mnemonics such
//!   as `\'e` or `\"u` (see [`MNEMONICS`])
//! - `&name;` entities (see [`ENTITIES`]) and `&#NNN;` / `&#xHH;` references
//!
//! Anything that does not decode is kept verbatim. Decoding never fails.

mod entities;
mod mnemonics;

use std::borrow::Cow;

pub use entities::ENTITIES;
pub use mnemonics::MNEMONICS;

/// Whether an unescaped `%` ends the text.
#[derive(Copy, Clone, PartialEq, Eq)]
enum CommentPolicy {
    Truncate,
    Keep,
}

/// Clean one physical line.
///
/// The line is trimmed. A leading directive marker (`%` followed by
/// `pseudo_comment_prefix`) is kept as is; the rest is decoded. An
/// unescaped `%` after the marker starts a comment: the line is cut there
/// and whitespace before the cut is dropped.
pub fn clean_line(line: &str, pseudo_comment_prefix: char) -> String {
    let trimmed = line.trim();
    let mut out = String::with_capacity(trimmed.len());

    let mut rest = trimmed;
    if let Some(after_marker) = trimmed
        .strip_prefix('%')
        .and_then(|s| s.strip_prefix(pseudo_comment_prefix))
    {
        out.push('%');
        out.push(pseudo_comment_prefix);
        rest = after_marker;
    }

    decode_into(rest, &mut out, CommentPolicy::Truncate);
    out
}

/// Decode escapes, mnemonics and character references in `text`.
///
/// Unlike [`clean_line`] this neither trims nor treats `%` as a comment.
///
/// Fast path: text without `\` or `&` is returned borrowed.
pub fn decode_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '&']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    decode_into(text, &mut out, CommentPolicy::Keep);
    Cow::Owned(out)
}

fn decode_into(text: &str, out: &mut String, policy: CommentPolicy) {
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let after = &rest[c.len_utf8()..];
        match c {
            '\\' => match decode_backslash(after) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    rest = &after[consumed..];
                }
                None => {
                    out.push('\\');
                    rest = after;
                }
            },
            '&' => match entities::decode_reference(after) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    rest = &after[consumed..];
                }
                None => {
                    out.push('&');
                    rest = after;
                }
            },
            '%' if policy == CommentPolicy::Truncate => {
                let kept = out.trim_end().len();
                out.truncate(kept);
                return;
            }
            _ => {
                out.push(c);
                rest = after;
            }
        }
    }
}

/// Decode an escape starting just after `\`.
///
/// Returns the decoded character and the number of bytes consumed after
/// the backslash. `\uXXXX` takes precedence over the breve mnemonics
/// (`\uA`, `\ue`, ...).
fn decode_backslash(after: &str) -> Option<(char, usize)> {
    let mut chars = after.chars();
    let first = chars.next()?;
    match first {
        '\\' | '%' | '&' => return Some((first, 1)),
        'u' => {
            if let Some(c) = code_point(&after[1..], 4) {
                return Some((c, 5));
            }
        }
        'U' => {
            if let Some(c) = code_point(&after[1..], 8) {
                return Some((c, 9));
            }
        }
        _ => {}
    }
    let second = chars.next()?;
    mnemonics::lookup(first, second).map(|c| (c, first.len_utf8() + second.len_utf8()))
}

fn code_point(text: &str, digits: usize) -> Option<char> {
    let hex = text.get(..digits)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
