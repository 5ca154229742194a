//! Diagnostic system for the ABC tokenizer.
//!
//! Both tokenizer stages report recoverable problems through the
//! [`ErrorSink`] capability instead of failing. A report:
//! - carries an error code for searchability ([`ErrorCode`])
//! - says what went wrong ([`Diagnostic::message`])
//! - says where ([`Diagnostic::position`])
//!
//! [`DiagnosticSink`] is the standard implementation. It logs every report
//! through `tracing`, keeps an ordered list for later inspection, and
//! forwards an Error token to an optional observer so callers can watch
//! problems interleaved with the token stream.

mod diagnostic;
pub mod emitter;
mod error_code;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use sink::{DiagnosticSink, ErrorObserver, ErrorSink};
