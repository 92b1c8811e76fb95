//! Rule-driven lexer engine.
//!
//! A [`Lexer`] walks a [`Cursor`] over the input and, on every
//! [`next_token`](Lexer::next_token) call, hands control to the first
//! registered [`TokenDefinition`] whose predicate accepts the current
//! character.
//!
//! ```
//! use lexkit::lexer::{definitions, Lexer};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Kind { Number, Plus, Eof }
//!
//! let mut lexer = Lexer::new("1 + 2")
//!     .with(definitions::skip_whitespace())
//!     .with(definitions::number(Kind::Number))
//!     .with(definitions::single_char(Kind::Plus, '+'))
//!     .with(definitions::end_of_input(Kind::Eof));
//!
//! let kinds: Vec<Kind> = lexer.tokenize().unwrap().into_iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [Kind::Number, Kind::Plus, Kind::Number, Kind::Eof]);
//! ```

mod context;
pub mod cursor;
pub mod definitions;
mod engine;
mod rule;
pub mod token;

pub use context::Context;
pub use cursor::Cursor;
pub use engine::{Lexer, LexerState};
pub use rule::{HandlerResult, TokenDefinition};
pub use token::{Position, Span, Token};
