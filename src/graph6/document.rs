use std::ops::Range;

/// A half-open range of byte offsets within one input line.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span {
            start: Position::new(start),
            end: Position::new(end),
        }
    }

    /// Shifts the span right by `offset` bytes.
    pub fn offset(&self, offset: usize) -> Span {
        Span::new(self.start.offset + offset, self.end.offset + offset)
    }
}

impl From<Range<usize>> for Span {
    fn from(span: Range<usize>) -> Span {
        Span::new(span.start, span.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Position {
    pub offset: usize,
}

impl Position {
    pub fn new(offset: usize) -> Position {
        Position { offset }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.offset)
    }
}
