use thiserror::Error;

use crate::graph6::document::Span;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Degree bounds are undefined for a graph without vertices")]
    EmptyGraph,

    #[error("Every vertex has degree {degree}; minimum- and maximum-degree vertex sets coincide")]
    RegularDegrees { degree: usize },
}

#[derive(Error, Debug)]
#[error("line {line}: {kind}")]
pub struct DecodeError {
    /// 1-based line number in the input.
    pub line: usize,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(line: usize, kind: DecodeErrorKind) -> Self {
        DecodeError { line, kind }
    }
}

#[derive(Error, Debug)]
pub enum DecodeErrorKind {
    #[error("Invalid characters {text:?} at {span}")]
    InvalidCharacters { text: String, span: Span },

    #[error("Expected a single graph6 string, found {found} words")]
    UnexpectedWords { found: usize },

    #[error("`>>graph6<<` header is not followed by a graph")]
    MissingGraph,

    #[error("Malformed size field at {span}")]
    MalformedSize { span: Span },

    #[error("Expected {expected} adjacency characters for {vertices} vertices, found {found}")]
    BodyLength {
        vertices: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Any failure of the decode-classify pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
