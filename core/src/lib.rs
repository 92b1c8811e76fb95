//! Generic, rule-driven lexical analysis.
//!
//! The [`lexer`] module holds the engine: a character [`Cursor`](lexer::Cursor),
//! an ordered registry of predicate/handler rules and the dispatch loop that
//! turns them into position-tagged tokens. [`json`] and [`script`] are front
//! ends built on it.

pub mod errors;
pub mod json;
pub mod lexer;
pub mod script;

pub use errors::{LexError, LexErrorKind, ParseError, SyntaxError};
pub use lexer::{Lexer, Token};
