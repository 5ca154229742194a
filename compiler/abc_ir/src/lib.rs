//! ABC IR - token types shared by the tokenizer stages.
//!
//! This crate contains the data structures that flow between the line
//! scanner, the file-section state machine and downstream consumers:
//! - [`Position`] for 1-based line/column source locations
//! - [`Token`] and [`TokenKind`] for the token stream
//! - [`TextKind`] for the typeset-text directives
//!
//! Every type derives `Clone, Eq, PartialEq, Hash, Debug`. With the `serde`
//! feature enabled they also implement `Serialize`/`Deserialize`.

mod position;
mod token;

pub use position::Position;
pub use token::{TextKind, Token, TokenKind};
