//! The `clean` command: print every line after the cleaning pass.

use std::io::{self, Write};

use abc_lexer_core::{clean_line, LineTerminator, SourceLines};

use super::{read_file, CliOptions};
use crate::CliError;

pub fn clean_file(options: &CliOptions) -> Result<u8, CliError> {
    let source = read_file(&options.path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    clean_source(
        &source,
        options.terminator_for(&source),
        options.prefix,
        &mut out,
    )?;
    Ok(0)
}

/// Write `clean_line` of each physical line, one per output line.
pub fn clean_source(
    source: &str,
    terminator: LineTerminator,
    prefix: char,
    out: &mut impl Write,
) -> io::Result<()> {
    for line in SourceLines::split(source, terminator).iter() {
        writeln!(out, "{}", clean_line(line, prefix))?;
    }
    out.flush()
}
