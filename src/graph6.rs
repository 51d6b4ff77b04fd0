//! Decoding of graph6 files, one graph per line.
//!
//! Blank lines are skipped and vertices are numbered from 0. The first
//! malformed line is reported with its line number.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{DecodeError, DecodeErrorKind},
    graph::Graph,
};

use self::{
    document::Span,
    lexer::{tokenize, TokenKind},
};

pub mod document;
mod lexer;
mod parser;

/// Decodes one line. Returns `None` for a blank line.
pub fn decode_line(line: &str) -> Result<Option<Graph>, DecodeErrorKind> {
    let mut tokens = tokenize(line);

    if let Some(invalid) = tokens.iter().find_map(|token| match token.token {
        TokenKind::Invalid(text) => Some((text, token.span)),
        _ => None,
    }) {
        let (text, span) = invalid;
        return Err(DecodeErrorKind::InvalidCharacters {
            text: text.to_string(),
            span,
        });
    }

    let header = matches!(tokens.first(), Some(token) if token.token == TokenKind::Header);
    if header {
        tokens.remove(0);
    }

    match tokens.as_slice() {
        [] if header => Err(DecodeErrorKind::MissingGraph),
        [] => Ok(None),
        [token] => match token.token {
            TokenKind::Encoded(word) => decode_word(word, token.span).map(Some),
            _ => Err(DecodeErrorKind::UnexpectedWords { found: 1 }),
        },
        _ => Err(DecodeErrorKind::UnexpectedWords {
            found: tokens.len(),
        }),
    }
}

fn decode_word(word: &str, span: Span) -> Result<Graph, DecodeErrorKind> {
    let (n, body) = parser::parse(word).map_err(|errors| {
        let at = errors
            .first()
            .map_or(span, |err| Span::from(err.span()).offset(span.start.offset));
        DecodeErrorKind::MalformedSize { span: at }
    })?;

    let expected = n
        .checked_mul(n.saturating_sub(1))
        .map(|pairs| (pairs / 2 + 5) / 6)
        .ok_or(DecodeErrorKind::MalformedSize { span })?;
    if body.len() != expected {
        return Err(DecodeErrorKind::BodyLength {
            vertices: n,
            expected,
            found: body.len(),
        });
    }

    let bits = (1..n).flat_map(|j| (0..j).map(move |i| (i, j)));
    let edges = bits.enumerate().filter_map(|(k, edge)| {
        let sextet = body[k / 6];
        let bit = (sextet >> (5 - k % 6)) & 1;
        (bit == 1).then_some(edge)
    });
    Ok(Graph::from_edges(n, edges))
}

/// A lazy reader yielding one graph per non-blank line.
pub struct Graph6Reader<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Graph6Reader<R> {
    pub fn new(reader: R) -> Self {
        Graph6Reader {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl Graph6Reader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for Graph6Reader<R> {
    type Item = Result<Graph, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.lines.next()?;
            self.line += 1;

            let decoded = next
                .map_err(DecodeErrorKind::from)
                .and_then(|text| decode_line(&text));
            match decoded {
                Ok(Some(graph)) => return Some(Ok(graph)),
                Ok(None) => continue,
                Err(kind) => return Some(Err(DecodeError::new(self.line, kind))),
            }
        }
    }
}
