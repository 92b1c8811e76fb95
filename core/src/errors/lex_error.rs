use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::Position;

/// What went wrong while producing a token.
///
/// Handlers return this; the engine attaches the position and offending
/// character to build a [`LexError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("no rule matched")]
    NoRuleMatched,

    #[error("unexpected end of string")]
    UnterminatedString,

    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("{0}")]
    Custom(String),
}

/// Positioned lexical error. Fatal to the `next()` call that produced it.
///
/// Displays as `<line>:<column>: <message>: '<char>'`, or with `<eof>` in
/// place of the character at end of input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{line}:{column}: {kind}: '{}'", display_char(.offending))]
#[diagnostic(code(lexkit::lex))]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    /// Character under the cursor when the error was raised; `None` at end of input.
    pub offending: Option<char>,
    pub kind: LexErrorKind,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl LexError {
    pub fn new(kind: LexErrorKind, at: Position, offending: Option<char>) -> Self {
        let len = offending.map_or(0, char::len_utf8);
        Self {
            line: at.line,
            column: at.column,
            offset: at.offset,
            offending,
            kind,
            span: (at.offset, len).into(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

fn display_char(ch: &Option<char>) -> String {
    match ch {
        Some('\n') => "\\n".to_string(),
        Some(c) => c.to_string(),
        None => "<eof>".to_string(),
    }
}
