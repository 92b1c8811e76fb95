mod lex_error;
mod syntax_error;

pub use lex_error::{LexError, LexErrorKind};
pub use syntax_error::SyntaxError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for front ends that lex and then parse.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// 1-based line the error points at.
    pub fn line(&self) -> usize {
        match self {
            Self::Lex(err) => err.line,
            Self::Syntax(err) => err.line,
        }
    }

    /// 1-based column the error points at.
    pub fn column(&self) -> usize {
        match self {
            Self::Lex(err) => err.column,
            Self::Syntax(err) => err.column,
        }
    }
}
