//! Splitting interpolated strings into literal and reference chunks

use serde_json::Value as JsonValue;

use super::lexer::{lex, Token};
use super::marker::Reference;
use crate::functions;

/// One piece of an interpolated string
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    Literal(String),
    Reference(Reference),
}

impl Chunk {
    pub fn is_reference(&self) -> bool {
        matches!(self, Chunk::Reference(_))
    }

    pub fn to_wire(&self) -> JsonValue {
        match self {
            Chunk::Literal(text) => JsonValue::String(text.clone()),
            Chunk::Reference(r) => r.to_wire(),
        }
    }
}

/// Split a string into chunks, merging adjacent literal runs
pub fn parse(input: &str) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    for (token, _span) in lex(input) {
        match token {
            Token::Marker(r) => chunks.push(Chunk::Reference(r)),
            Token::Text(text) => match chunks.last_mut() {
                Some(Chunk::Literal(prev)) => prev.push_str(&text),
                _ => chunks.push(Chunk::Literal(text)),
            },
        }
    }
    chunks
}

/// Rewrite a string into its wire form
///
/// - no markers: the string itself
/// - a single marker and nothing else: that reference's wire form
/// - anything mixed: `Fn::Join` with an empty glue, chunks in order
pub fn interpolate(input: &str) -> JsonValue {
    let chunks = parse(input);
    if !chunks.iter().any(Chunk::is_reference) {
        return JsonValue::String(input.to_string());
    }
    match chunks.as_slice() {
        [single] => single.to_wire(),
        _ => functions::join("", chunks.iter().map(Chunk::to_wire).collect()),
    }
}
