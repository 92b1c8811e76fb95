use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::{Span, Token};

/// Structural error raised by a consumer of the token stream.
///
/// Displays as `<line>:<column>: <message>`.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{line}:{column}: {message}")]
#[diagnostic(code(lexkit::syntax), help("check the syntax around this location"))]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            line: span.start.line,
            column: span.start.column,
            span: span.into(),
        }
    }

    /// Error positioned at the start of `token`.
    pub fn at<K>(token: &Token<'_, K>, message: impl Into<String>) -> Self {
        Self::new(message, token.span)
    }
}
