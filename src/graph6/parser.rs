//! Parses an encoded graph6 word into its size field and adjacency body.
//!
//! The size `n` is one character when `n < 63`, `~` followed by three
//! characters when `n < 258048`, and `~~` followed by six characters beyond
//! that. Every character carries six bits, most significant first.

use chumsky::prelude::*;

pub type ParseError = Simple<char>;

/// The size field and the six-bit values of the adjacency characters.
pub fn parse(word: &str) -> Result<(usize, Vec<u8>), Vec<ParseError>> {
    graph6_parser().parse(word)
}

fn graph6_parser() -> impl Parser<char, (usize, Vec<u8>), Error = ParseError> {
    size_parser()
        .then(sextet().repeated())
        .then_ignore(end())
        .labelled("graph6")
}

fn size_parser() -> impl Parser<char, usize, Error = ParseError> + Clone {
    let long = just("~~").ignore_then(sextet().repeated().exactly(6));
    let medium = just('~').ignore_then(sextet().repeated().exactly(3));
    // A lone `~` would be 63, which must use the three-character form.
    let short = filter::<_, _, ParseError>(|c: &char| ('?'..'~').contains(c))
        .map(|c| c as u8 - b'?')
        .repeated()
        .exactly(1);

    choice((long, medium, short))
        .map(|digits| {
            digits
                .into_iter()
                .fold(0usize, |n, digit| (n << 6) | usize::from(digit))
        })
        .labelled("size")
}

fn sextet() -> impl Parser<char, u8, Error = ParseError> + Clone {
    filter(|c: &char| ('?'..='~').contains(c))
        .map(|c| c as u8 - b'?')
        .labelled("graph6 character")
}
