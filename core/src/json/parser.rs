use super::{JsonArray, JsonObject, JsonTokenKind, JsonValue};
use crate::errors::{ParseError, SyntaxError};
use crate::lexer::{Lexer, Token};

/// Deepest allowed nesting of arrays and objects.
pub(crate) const MAX_DEPTH: usize = 128;

/// Recursive-descent JSON parser pulling tokens from the lexer one at a time.
pub(crate) struct Parser<'src> {
    lexer: Lexer<'src, JsonTokenKind>,
    current: Token<'src, JsonTokenKind>,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut lexer = super::lexer(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    pub(crate) fn parse_document(&mut self) -> Result<JsonValue, ParseError> {
        let value = self.parse_value()?;
        if !self.check(JsonTokenKind::Eof) {
            return Err(self.error("expected end of input"));
        }
        Ok(value)
    }

    fn check(&self, kind: JsonTokenKind) -> bool {
        self.current.kind == kind
    }

    /// Move to the next token and return the one just consumed.
    fn advance(&mut self) -> Result<Token<'src, JsonTokenKind>, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: JsonTokenKind, message: &str) -> Result<(), ParseError> {
        if !self.check(kind) {
            return Err(self.error(message));
        }
        self.advance()?;
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        SyntaxError::at(&self.current, message).into()
    }

    fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        match self.current.kind {
            JsonTokenKind::String => {
                let token = self.advance()?;
                Ok(JsonValue::String(unescape(&token)?))
            }
            JsonTokenKind::Number => {
                let token = self.advance()?;
                // Digit runs too long for f64 parse to infinity.
                token
                    .lexeme
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(JsonValue::Number)
                    .ok_or_else(|| SyntaxError::at(&token, "invalid number format").into())
            }
            JsonTokenKind::Boolean => {
                let token = self.advance()?;
                Ok(JsonValue::Boolean(token.lexeme == "true"))
            }
            JsonTokenKind::Null => {
                self.advance()?;
                Ok(JsonValue::Null)
            }
            JsonTokenKind::LeftBrace => self.nested(Self::parse_object),
            JsonTokenKind::LeftBracket => self.nested(Self::parse_array),
            JsonTokenKind::Eof => Err(self.error("unexpected end of input")),
            JsonTokenKind::Unknown => {
                Err(self.error(format!("unknown token '{}'", self.current.lexeme)))
            }
            JsonTokenKind::RightBrace
            | JsonTokenKind::RightBracket
            | JsonTokenKind::Colon
            | JsonTokenKind::Comma => {
                Err(self.error(format!("unexpected token '{}'", self.current.lexeme)))
            }
        }
    }

    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<JsonValue, ParseError>,
    ) -> Result<JsonValue, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.advance()?; // consume '{'
        let mut object = JsonObject::new();
        if self.check(JsonTokenKind::RightBrace) {
            self.advance()?;
            return Ok(JsonValue::Object(object));
        }

        loop {
            // Past the first member, reaching here means a comma was just consumed.
            match self.current.kind {
                JsonTokenKind::String => {}
                JsonTokenKind::RightBrace => return Err(self.error("trailing comma")),
                JsonTokenKind::Eof => return Err(self.error("expected closing brace")),
                _ => return Err(self.error("expected string key")),
            }
            let key_token = self.advance()?;
            let key = unescape(&key_token)?;
            self.expect(JsonTokenKind::Colon, "expected colon")?;
            let value = self.parse_value()?;
            object.insert(key, value);

            match self.current.kind {
                JsonTokenKind::Comma => {
                    self.advance()?;
                }
                JsonTokenKind::RightBrace => {
                    self.advance()?;
                    return Ok(JsonValue::Object(object));
                }
                JsonTokenKind::Eof => return Err(self.error("expected closing brace")),
                _ => return Err(self.error("expected comma")),
            }
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.advance()?; // consume '['
        let mut array = JsonArray::new();
        if self.check(JsonTokenKind::RightBracket) {
            self.advance()?;
            return Ok(JsonValue::Array(array));
        }

        loop {
            if self.check(JsonTokenKind::RightBracket) {
                return Err(self.error("trailing comma"));
            }
            array.push(self.parse_value()?);

            match self.current.kind {
                JsonTokenKind::Comma => {
                    self.advance()?;
                }
                JsonTokenKind::RightBracket => {
                    self.advance()?;
                    return Ok(JsonValue::Array(array));
                }
                JsonTokenKind::Eof => return Err(self.error("expected closing bracket")),
                _ => return Err(self.error("expected comma")),
            }
        }
    }
}

/// Strip the quotes from a string token and decode its escapes.
fn unescape(token: &Token<'_, JsonTokenKind>) -> Result<String, SyntaxError> {
    let body = token
        .lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| SyntaxError::at(token, "malformed string"))?;

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        let decoded = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| SyntaxError::at(token, format!("invalid unicode escape '\\u{hex}'")))?
            }
            Some(other) => {
                return Err(SyntaxError::at(token, format!("invalid escape character '{other}'")));
            }
            None => return Err(SyntaxError::at(token, "unexpected end of string")),
        };
        value.push(decoded);
    }
    Ok(value)
}
