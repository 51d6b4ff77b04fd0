//! Splits one line of a graph6 file into words.
//!
//! A line holds at most one encoded graph, optionally preceded by the
//! `>>graph6<<` header. Anything outside the printable range `?`..=`~` is an
//! invalid token, which also catches sparse6 (`:`) and digraph6 (`&`) lines.

use logos::Logos;

use super::document::Span;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind<'src> {
    #[token(">>graph6<<")]
    Header,

    // Every character encodes six bits as its code minus 63.
    #[regex(r"[?-~]+")]
    Encoded(&'src str),

    #[regex(r"[^?-~ \t\r\n\f]+")]
    Invalid(&'src str),
}

#[derive(PartialEq)]
pub struct Token<'src> {
    pub token: TokenKind<'src>,
    /// The position of the token in the line.
    pub span: Span,
}

impl Token<'_> {
    #[cfg(test)]
    fn new(token: TokenKind, start: usize, end: usize) -> Token {
        Token {
            token,
            span: Span::new(start, end),
        }
    }
}

/// Takes one line of input and splits it into tokens.
pub fn tokenize(line: &str) -> Vec<Token> {
    TokenKind::lexer(line)
        .spanned()
        .map(|(result, span)| Token {
            token: result.unwrap_or_else(|_| TokenKind::Invalid(&line[span.clone()])),
            span: Span::from(span),
        })
        .collect()
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{{:?} at {}}}", self.token, self.span)
    }
}
