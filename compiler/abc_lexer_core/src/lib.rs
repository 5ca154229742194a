//! Line-level scanner for ABC notation.
//!
//! First of the two tokenizer stages. It knows nothing about document
//! sections: it splits the source into physical lines under an explicit
//! [`LineTerminator`], classifies each line, splits trailing comments off
//! music and field lines, and decodes the text escapes of the format.
//!
//! ```text
//! source → SourceLines → LineScanner::next_line_token(in_tune) → Token
//! ```
//!
//! The only context the scanner needs from its caller is whether the
//! current line sits inside a tune, which decides between MusicCode and
//! FreeText for otherwise unclassified lines.

mod clean;
mod config;
mod scan_error;
mod scanner;
mod source_lines;

pub use clean::{clean_line, decode_escapes, ENTITIES, MNEMONICS};
pub use config::ScanConfig;
pub use scan_error::ScanErrorKind;
pub use scanner::LineScanner;
pub use source_lines::{LineTerminator, SourceLines};
