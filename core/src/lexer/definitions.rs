//! Ready-made token definitions for common rule shapes.
//!
//! Register narrow rules (single characters, literals, strings, numbers)
//! before broad ones (identifier, [`anything`]); the first accepting rule wins.

use super::context::Context;
use super::rule::TokenDefinition;
use crate::errors::LexErrorKind;

/// Skips a run of whitespace without producing a token.
pub fn skip_whitespace<K: 'static>() -> TokenDefinition<K> {
    TokenDefinition::new(
        |c| c.is_some_and(char::is_whitespace),
        |ctx| {
            ctx.eat_while(char::is_whitespace);
            Ok(None)
        },
    )
}

/// Matches exactly one fixed character.
pub fn single_char<K: Copy + 'static>(kind: K, expected: char) -> TokenDefinition<K> {
    TokenDefinition::new(
        move |c| c == Some(expected),
        move |ctx| {
            ctx.advance();
            Ok(Some(kind))
        },
    )
}

/// Matches a fixed multi-character literal such as `==` or `let`.
///
/// No word boundary is required after the literal; see [`keyword`] for that.
/// On a partial match the cursor is restored and the rule declines.
pub fn literal<K: Copy + 'static>(kind: K, text: impl Into<String>) -> TokenDefinition<K> {
    fixed_text(kind, text.into(), false)
}

/// Like [`literal`], but only matches when the text is not followed by an
/// identifier character, so `let` does not match the start of `letter`.
pub fn keyword<K: Copy + 'static>(kind: K, text: impl Into<String>) -> TokenDefinition<K> {
    fixed_text(kind, text.into(), true)
}

fn fixed_text<K: Copy + 'static>(kind: K, text: String, whole_word: bool) -> TokenDefinition<K> {
    let first = text.chars().next();
    TokenDefinition::new(
        move |c| first.is_some() && c == first,
        move |ctx| {
            let checkpoint = ctx.checkpoint();
            let matched = text.chars().all(|expected| ctx.match_char(expected))
                && !(whole_word && ctx.current().is_some_and(is_ident_continue));
            if matched {
                Ok(Some(kind))
            } else {
                ctx.restore(checkpoint);
                Ok(None)
            }
        },
    )
}

/// Matches an identifier: a letter or `_` followed by letters, digits or `_`.
pub fn identifier<K: Copy + 'static>(kind: K) -> TokenDefinition<K> {
    TokenDefinition::new(
        |c| c.is_some_and(is_ident_start),
        move |ctx| {
            ctx.eat_while(is_ident_continue);
            Ok(Some(kind))
        },
    )
}

/// Matches digits with at most one decimal point, which must be followed by
/// at least one digit.
pub fn number<K: Copy + 'static>(kind: K) -> TokenDefinition<K> {
    TokenDefinition::new(
        |c| c.is_some_and(|c| c.is_ascii_digit()),
        move |ctx| {
            ctx.eat_while(|c| c.is_ascii_digit());
            if ctx.match_char('.') {
                if !ctx.current().is_some_and(|c| c.is_ascii_digit()) {
                    return Err(LexErrorKind::MalformedNumber(ctx.lexeme().to_owned()));
                }
                ctx.eat_while(|c| c.is_ascii_digit());
                if ctx.matches('.') {
                    return Err(LexErrorKind::MalformedNumber(ctx.lexeme().to_owned()));
                }
            }
            Ok(Some(kind))
        },
    )
}

/// Matches a double-quoted string on a single line.
///
/// Accepts the escapes `\" \\ \/ \b \f \n \r \t` and `\uXXXX`. The lexeme
/// keeps the quotes and escapes as written.
pub fn string<K: Copy + 'static>(kind: K) -> TokenDefinition<K> {
    TokenDefinition::new(
        |c| c == Some('"'),
        move |ctx| {
            ctx.advance();
            loop {
                match ctx.current() {
                    None | Some('\n') => return Err(LexErrorKind::UnterminatedString),
                    Some('"') => {
                        ctx.advance();
                        return Ok(Some(kind));
                    }
                    Some('\\') => {
                        ctx.advance();
                        scan_escape(ctx)?;
                    }
                    Some(_) => {
                        ctx.advance();
                    }
                }
            }
        },
    )
}

fn scan_escape(ctx: &mut Context<'_, '_>) -> Result<(), LexErrorKind> {
    match ctx.current() {
        None | Some('\n') => Err(LexErrorKind::UnterminatedString),
        Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
            ctx.advance();
            Ok(())
        }
        Some('u') => {
            ctx.advance();
            for _ in 0..4 {
                if !ctx.current().is_some_and(|c| c.is_ascii_hexdigit()) {
                    return Err(LexErrorKind::InvalidEscape('u'));
                }
                ctx.advance();
            }
            Ok(())
        }
        Some(c) => Err(LexErrorKind::InvalidEscape(c)),
    }
}

/// Matches `true` or `false` as a whole alphabetic run.
///
/// Any other run starting with `t` or `f` is left untouched for later rules.
pub fn boolean<K: Copy + 'static>(kind: K) -> TokenDefinition<K> {
    TokenDefinition::new(
        |c| matches!(c, Some('t' | 'f')),
        move |ctx| {
            let checkpoint = ctx.checkpoint();
            ctx.eat_while(char::is_alphabetic);
            if matches!(ctx.lexeme(), "true" | "false") {
                Ok(Some(kind))
            } else {
                ctx.restore(checkpoint);
                Ok(None)
            }
        },
    )
}

/// Matches the end-of-input sentinel, producing the terminal token.
pub fn end_of_input<K: Copy + 'static>(kind: K) -> TokenDefinition<K> {
    TokenDefinition::new(|c| c.is_none(), move |_| Ok(Some(kind)))
}

/// Catch-all: consumes any single character. Register it last.
pub fn anything<K: Copy + 'static>(kind: K) -> TokenDefinition<K> {
    TokenDefinition::new(
        |_| true,
        move |ctx| {
            ctx.advance();
            Ok(Some(kind))
        },
    )
}

/// Matches from `marker` up to, not including, the end of the line.
pub fn line_comment<K: Copy + 'static>(kind: K, marker: char) -> TokenDefinition<K> {
    TokenDefinition::new(
        move |c| c == Some(marker),
        move |ctx| {
            ctx.eat_while(|c| c != '\n');
            Ok(Some(kind))
        },
    )
}

/// Like [`line_comment`] but discards the comment.
pub fn skip_line_comment<K: 'static>(marker: char) -> TokenDefinition<K> {
    TokenDefinition::new(
        move |c| c == Some(marker),
        |ctx| {
            ctx.eat_while(|c| c != '\n');
            Ok(None)
        },
    )
}

pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
