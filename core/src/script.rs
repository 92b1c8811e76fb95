//! Token set for a small assignment language:
//!
//! ```text
//! # comment
//! let x = 1
//! x + y
//! ```

use serde::Serialize;

use crate::errors::LexError;
use crate::lexer::{Context, HandlerResult, Lexer, Token, definitions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScriptTokenKind {
    Assignment,
    Plus,
    Minus,
    Star,
    Slash,
    Identifier,
    Number,
    Keyword,
    Comment,
    Eof,
}

impl ScriptTokenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Star => "star",
            Self::Slash => "slash",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::Eof => "eof",
        }
    }
}

const KEYWORDS: &[&str] = &["let"];

/// Lexer loaded with the script rule set.
///
/// There is no catch-all rule, so an unexpected character is a lexical error.
pub fn lexer(source: &str) -> Lexer<'_, ScriptTokenKind> {
    use ScriptTokenKind as K;

    let mut lexer = Lexer::new(source)
        .with(definitions::skip_whitespace())
        .with(definitions::end_of_input(K::Eof))
        .with(definitions::single_char(K::Assignment, '='))
        .with(definitions::single_char(K::Plus, '+'))
        .with(definitions::single_char(K::Minus, '-'))
        .with(definitions::single_char(K::Star, '*'))
        .with(definitions::single_char(K::Slash, '/'));
    for keyword in KEYWORDS {
        lexer.add(definitions::keyword(K::Keyword, *keyword));
    }
    lexer
        .add(definitions::identifier(K::Identifier))
        .add(definitions::number(K::Number))
        .define(|c| c == Some('#'), comment);
    lexer
}

fn comment(ctx: &mut Context<'_, '_>) -> HandlerResult<ScriptTokenKind> {
    while ctx.current().is_some_and(|c| c != '\n') {
        ctx.advance();
    }
    Ok(Some(ScriptTokenKind::Comment))
}

/// Tokenize a whole script, ending with the `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_, ScriptTokenKind>>, LexError> {
    lexer(source).tokenize()
}
