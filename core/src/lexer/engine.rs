use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use super::context::Context;
use super::cursor::Cursor;
use super::rule::{HandlerResult, TokenDefinition};
use super::token::{Position, Span, Token};
use crate::errors::{LexError, LexErrorKind};

/// Where the lexer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerState {
    /// Waiting for the next `next_token()` call.
    Ready,
    /// A rule handler is running. Transient: set and cleared within a single
    /// `next_token()` call, so [`Lexer::state`] never reports it.
    Scanning,
    /// The terminal token has been produced.
    Exhausted,
}

/// Rule-driven lexer: an input cursor plus an ordered list of token definitions.
///
/// Each [`next_token`](Self::next_token) call dispatches to the earliest
/// registered rule whose predicate accepts the current character. Rules that
/// consume input without producing a token are skipped transparently.
///
/// Once a token has been produced by a rule selected at end of input, that
/// token is terminal: every later `next_token()` returns a copy of it without
/// consulting the rules again.
pub struct Lexer<'src, K> {
    cursor: Cursor<'src>,
    definitions: Vec<TokenDefinition<K>>,
    state: LexerState,
    terminal: Option<Token<'src, K>>,
    started: bool,
    fused: bool,
}

impl<'src, K> Lexer<'src, K>
where
    K: Copy + fmt::Debug,
{
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            definitions: Vec::new(),
            state: LexerState::Ready,
            terminal: None,
            started: false,
            fused: false,
        }
    }

    /// Append a rule built from a predicate and a handler.
    pub fn define(
        &mut self,
        predicate: impl Fn(Option<char>) -> bool + 'static,
        handler: impl Fn(&mut Context<'_, '_>) -> HandlerResult<K> + 'static,
    ) -> &mut Self {
        self.add(TokenDefinition::new(predicate, handler))
    }

    /// Append a prebuilt rule, typically one from [`definitions`](super::definitions).
    ///
    /// The registry is fixed once lexing has started; late registrations are
    /// dropped.
    pub fn add(&mut self, definition: TokenDefinition<K>) -> &mut Self {
        debug_assert!(
            !self.started,
            "rules must be registered before the first token is requested"
        );
        if self.started {
            warn!("ignoring rule registered after lexing started");
            return self;
        }
        self.definitions.push(definition);
        self
    }

    /// By-value variant of [`add`](Self::add) for building rule sets inline.
    pub fn with(mut self, definition: TokenDefinition<K>) -> Self {
        self.add(definition);
        self
    }

    /// `Ready` or `Exhausted` between calls.
    pub fn state(&self) -> LexerState {
        self.state
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.definitions.len()
    }

    /// Produce the next token.
    ///
    /// After an error the cursor is left wherever the failing handler stopped
    /// and the instance should not be used for further tokenization.
    #[tracing::instrument(level = "trace", skip_all, fields(offset = self.cursor.offset()))]
    pub fn next_token(&mut self) -> Result<Token<'src, K>, LexError> {
        if let Some(token) = &self.terminal {
            trace!("input exhausted, repeating terminal token");
            return Ok(token.clone());
        }

        self.started = true;
        self.state = LexerState::Scanning;
        let result = self.scan();
        self.state = if self.terminal.is_some() {
            LexerState::Exhausted
        } else {
            LexerState::Ready
        };
        result
    }

    /// Drain the lexer up to and including the terminal token.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'src, K>>, LexError> {
        self.by_ref().collect()
    }

    fn scan(&mut self) -> Result<Token<'src, K>, LexError> {
        let mut first = 0;
        loop {
            let ch = self.cursor.peek();
            let Some(index) = self.select(ch, first) else {
                debug!(?ch, line = self.cursor.line(), column = self.cursor.column(), "no rule matched");
                return Err(LexError::new(
                    LexErrorKind::NoRuleMatched,
                    self.cursor.position(),
                    ch,
                ));
            };
            trace!(rule = index, ?ch, "rule selected");

            let start = self.cursor.position();
            let outcome = self.definitions[index].run(&mut Context::new(&mut self.cursor));

            match outcome {
                Ok(Some(kind)) => {
                    let token = Token {
                        kind,
                        lexeme: self.cursor.slice_from(start.offset),
                        span: Span::new(start, self.cursor.position()),
                    };
                    debug!(
                        kind = ?token.kind,
                        lexeme = token.lexeme,
                        line = start.line,
                        column = start.column,
                        "produced token"
                    );
                    if ch.is_none() {
                        self.terminal = Some(token.clone());
                    }
                    return Ok(token);
                }
                Ok(None) if self.cursor.offset() == start.offset => {
                    trace!(rule = index, "rule declined");
                    self.cursor.restore(start);
                    first = index + 1;
                }
                Ok(None) => {
                    trace!(rule = index, skipped = self.cursor.slice_from(start.offset), "skipped input");
                    first = 0;
                }
                Err(kind) => {
                    let at = self.cursor.position();
                    debug!(%kind, line = at.line, column = at.column, "handler failed");
                    return Err(LexError::new(kind, at, self.cursor.peek()));
                }
            }
        }
    }

    /// Index of the first rule at or after `first` that accepts `ch`.
    fn select(&self, ch: Option<char>, first: usize) -> Option<usize> {
        self.definitions
            .iter()
            .enumerate()
            .skip(first)
            .find(|(_, definition)| definition.accepts(ch))
            .map(|(index, _)| index)
    }
}

impl<'src, K> Iterator for Lexer<'src, K>
where
    K: Copy + fmt::Debug,
{
    type Item = Result<Token<'src, K>, LexError>;

    /// Yields tokens through the terminal token, or up to the first error,
    /// then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let result = self.next_token();
        if result.is_err() || self.terminal.is_some() {
            self.fused = true;
        }
        Some(result)
    }
}

impl<K> FusedIterator for Lexer<'_, K> where K: Copy + fmt::Debug {}
