use super::cursor::Cursor;
use super::token::Position;

/// View over the lexer's cursor for the duration of one handler call.
///
/// The position at which the handler started is the *mark*. [`retreat`](Self::retreat)
/// and [`restore`](Self::restore) never move the cursor before it, so a handler
/// can only undo its own advances.
pub struct Context<'c, 'src> {
    cursor: &'c mut Cursor<'src>,
    mark: Position,
}

impl<'c, 'src> Context<'c, 'src> {
    pub(crate) fn new(cursor: &'c mut Cursor<'src>) -> Self {
        let mark = cursor.position();
        Self { cursor, mark }
    }

    /// Character under the cursor, `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.cursor.peek()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.cursor.peek_next()
    }

    pub fn matches(&self, expected: char) -> bool {
        self.cursor.matches(expected)
    }

    pub fn advance(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    /// Undo one advance made by this handler. Returns `None` at the mark.
    pub fn retreat(&mut self) -> Option<char> {
        if self.cursor.offset() <= self.mark.offset {
            return None;
        }
        self.cursor.retreat()
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        self.cursor.match_char(expected)
    }

    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        self.cursor.eat_while(pred);
    }

    /// Text consumed since the handler started.
    pub fn lexeme(&self) -> &'src str {
        self.cursor.slice_from(self.mark.offset)
    }

    /// Absolute byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Position where this handler started.
    pub fn mark(&self) -> Position {
        self.mark
    }

    pub fn checkpoint(&self) -> Position {
        self.cursor.checkpoint()
    }

    /// Return to `checkpoint`, clamped to the mark.
    pub fn restore(&mut self, checkpoint: Position) {
        if checkpoint.offset < self.mark.offset {
            self.cursor.restore(self.mark);
        } else {
            self.cursor.restore(checkpoint);
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}
