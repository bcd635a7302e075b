//! Lexer for interpolated template strings using logos

use logos::{Lexer, Logos};

use super::marker::Reference;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Markers - only well-formed ones, anything else falls through to text
    #[regex(r"\{Resource\|[^|{}]+\}", marker)]
    #[regex(r"\{Parameter\|[^|{}]+\}", marker)]
    #[regex(r"\{Attribute\|[^|{}]+\|[^|{}]+\}", marker)]
    Marker(Reference),

    // Literal text: any run without an opening brace, or a stray brace
    #[regex(r"[^{]+", |lex| lex.slice().to_string())]
    #[token("{", |lex| lex.slice().to_string())]
    Text(String),
}

fn marker(lex: &mut Lexer<Token>) -> Option<Reference> {
    Reference::from_marker(lex.slice())
}

/// Lex input string into tokens with spans
///
/// Every byte of the input is covered by exactly one token; input the lexer
/// cannot classify is handed back as literal text.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(move |(tok, span)| match tok {
        Ok(t) => (t, span),
        Err(()) => (Token::Text(input[span.clone()].to_string()), span),
    })
}
