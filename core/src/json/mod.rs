//! JSON front end built on the rule-driven lexer.
//!
//! Numbers follow the lexer's `number` rule: digits with an optional single
//! decimal point, no sign or exponent.

mod parser;
mod value;

pub use value::{JsonArray, JsonObject, JsonValue};

use crate::errors::ParseError;
use crate::lexer::{Lexer, definitions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum JsonTokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,

    String,
    Number,
    Boolean,
    Null,

    Eof,
    Unknown,
}

impl JsonTokenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftBrace => "lbrace",
            Self::RightBrace => "rbrace",
            Self::LeftBracket => "lbracket",
            Self::RightBracket => "rbracket",
            Self::Colon => "colon",
            Self::Comma => "comma",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Eof => "eof",
            Self::Unknown => "unknown",
        }
    }
}

/// Lexer loaded with the JSON rule set. Unrecognized characters become
/// [`JsonTokenKind::Unknown`] tokens rather than lexical errors.
pub fn lexer(source: &str) -> Lexer<'_, JsonTokenKind> {
    use JsonTokenKind as K;

    Lexer::new(source)
        .with(definitions::skip_whitespace())
        .with(definitions::single_char(K::LeftBrace, '{'))
        .with(definitions::single_char(K::RightBrace, '}'))
        .with(definitions::single_char(K::LeftBracket, '['))
        .with(definitions::single_char(K::RightBracket, ']'))
        .with(definitions::single_char(K::Colon, ':'))
        .with(definitions::single_char(K::Comma, ','))
        .with(definitions::keyword(K::Null, "null"))
        .with(definitions::boolean(K::Boolean))
        .with(definitions::string(K::String))
        .with(definitions::number(K::Number))
        .with(definitions::end_of_input(K::Eof))
        .with(definitions::anything(K::Unknown))
}

/// Parse a complete JSON document.
///
/// The first lexical or structural error aborts the parse. Arrays and
/// objects may nest at most 128 levels deep.
pub fn parse(source: &str) -> Result<JsonValue, ParseError> {
    parser::Parser::new(source)?.parse_document()
}
