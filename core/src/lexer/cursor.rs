use super::token::Position;

/// Character-level reader over the source string.
///
/// Tracks the byte offset together with a 1-based line and column. The offset
/// always sits on a char boundary, so [`slice_from`](Self::slice_from) never
/// splits a code point.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: Position,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: Position::start(),
        }
    }

    /// The full input buffer.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Current byte offset in the source.
    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    pub fn line(&self) -> usize {
        self.pos.line
    }

    pub fn column(&self) -> usize {
        self.pos.column
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Peek at the current character without advancing.
    ///
    /// Returns `None` once the end of input is reached.
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos.offset..].chars().next()
    }

    /// Peek at the character after the current one.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos.offset..].chars();
        chars.next();
        chars.next()
    }

    /// Whether the current character equals `expected`.
    pub fn matches(&self, expected: char) -> bool {
        self.peek() == Some(expected)
    }

    /// Advance one character and return it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos.offset += ch.len_utf8();
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        Some(ch)
    }

    /// Step back over the previous character and return it.
    ///
    /// Exactly undoes the line/column effect of the matching [`advance`](Self::advance).
    /// Returns `None` at the start of input.
    pub fn retreat(&mut self) -> Option<char> {
        let ch = self.source[..self.pos.offset].chars().next_back()?;
        self.pos.offset -= ch.len_utf8();
        if ch == '\n' {
            self.pos.line -= 1;
            self.pos.column = self.column_at(self.pos.offset);
        } else {
            self.pos.column -= 1;
        }
        Some(ch)
    }

    /// Advance if the current character matches `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.matches(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current character.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Return a slice of the source from `start` to the current position.
    ///
    /// `start` must be an offset previously observed on this cursor and not
    /// past the current one; anything else yields an empty slice.
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.source.get(start..self.pos.offset).unwrap_or_default()
    }

    /// Snapshot the current position for a later [`restore`](Self::restore).
    pub fn checkpoint(&self) -> Position {
        self.pos
    }

    pub fn restore(&mut self, checkpoint: Position) {
        self.pos = checkpoint;
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    /// 1-based column of the char at byte `offset`, counted from the last newline.
    fn column_at(&self, offset: usize) -> usize {
        let line_start = self.source[..offset].rfind('\n').map_or(0, |i| i + 1);
        self.source[line_start..offset].chars().count() + 1
    }
}
