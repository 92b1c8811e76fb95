use serde::Serialize;

/// A point in the source: byte offset plus 1-based line and column.
///
/// Also serves as the cursor checkpoint type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// Half-open source range covered by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start.offset, span.len()).into()
    }
}

/// A single token with its kind, matched text and source span.
///
/// `lexeme` is always the exact source text between `span.start` and `span.end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<'src, K> {
    pub kind: K,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<K> Token<'_, K> {
    pub fn start_line(&self) -> usize {
        self.span.start.line
    }

    pub fn start_column(&self) -> usize {
        self.span.start.column
    }

    pub fn end_line(&self) -> usize {
        self.span.end.line
    }

    pub fn end_column(&self) -> usize {
        self.span.end.column
    }
}
