//! ABC tokenizer command-line front end.
//!
//! The `abc` binary is a thin layer over `abc_lexer`: it reads one file,
//! maps flags onto a [`TokenizerConfig`](abc_lexer::TokenizerConfig) and
//! renders tokens or diagnostics. Command handlers live in [`commands`] and
//! write to any `io::Write`, so they are testable without a process.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging
/// cost. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
