use super::context::Context;
use crate::errors::LexErrorKind;

/// Outcome of a handler: a token kind, `None` for "no token", or an error.
///
/// Returning `None` after consuming input skips that input (whitespace,
/// comments). Returning `None` without consuming anything declines the
/// character so later rules get a chance at it.
pub type HandlerResult<K> = Result<Option<K>, LexErrorKind>;

type Predicate = Box<dyn Fn(Option<char>) -> bool>;
type Handler<K> = Box<dyn Fn(&mut Context<'_, '_>) -> HandlerResult<K>>;

/// A (predicate, handler) pair recognizing one token class.
///
/// The predicate sees the current character, or `None` at end of input.
pub struct TokenDefinition<K> {
    predicate: Predicate,
    handler: Handler<K>,
}

impl<K> TokenDefinition<K> {
    pub fn new(
        predicate: impl Fn(Option<char>) -> bool + 'static,
        handler: impl Fn(&mut Context<'_, '_>) -> HandlerResult<K> + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            handler: Box::new(handler),
        }
    }

    pub fn accepts(&self, ch: Option<char>) -> bool {
        (self.predicate)(ch)
    }

    pub(crate) fn run(&self, ctx: &mut Context<'_, '_>) -> HandlerResult<K> {
        (self.handler)(ctx)
    }
}

impl<K> std::fmt::Debug for TokenDefinition<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDefinition").finish_non_exhaustive()
    }
}
