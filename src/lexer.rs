//! JSON lexer/tokenizer.
//!
//! Converts raw JSON text into a flat sequence of tokens for the parser.
//! The lexer knows nothing about grammar nesting: it only recognizes
//! token boundaries.
//!
//! The scan is deliberately permissive in two places, with validation
//! deferred to the parser:
//!
//! - String contents are copied literally between quotes, escape
//!   sequences included; no decoding happens here. An unterminated
//!   string consumes the rest of the input and still produces a token.
//! - Number text may contain more than one `.`; the parser rejects such
//!   text when it materializes the value.

use crate::error::{BindError, BindResult};
use std::fmt;

/// A single lexed token.
///
/// Structural tokens carry no payload; string and number tokens carry
/// the raw text they were lexed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// String contents without the surrounding quotes, escapes untouched.
    String(String),
    /// Raw number text, digits and dots only.
    Number(String),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::ObjectStart => f.write_str("'{'"),
            Token::ObjectEnd => f.write_str("'}'"),
            Token::ArrayStart => f.write_str("'['"),
            Token::ArrayEnd => f.write_str("']'"),
            Token::Comma => f.write_str("','"),
            Token::Colon => f.write_str("':'"),
            Token::String(s) => write!(f, "string \"{s}\""),
            Token::Number(n) => write!(f, "number {n}"),
            Token::Bool(b) => write!(f, "{b}"),
            Token::Null => f.write_str("null"),
        }
    }
}

/// Tokenize JSON text into an ordered token sequence.
///
/// One-shot and strictly forward-scanning. Whitespace between tokens is
/// skipped. Empty input yields an empty sequence, which the parser then
/// rejects as an empty document.
///
/// Fails with [`BindError::InvalidCharacter`] on any character that
/// cannot start a token, carrying the character and its byte offset.
pub fn tokenize(input: &str) -> BindResult<Vec<Token>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
            b'{' => {
                tokens.push(Token::ObjectStart);
                pos += 1;
            }
            b'}' => {
                tokens.push(Token::ObjectEnd);
                pos += 1;
            }
            b'[' => {
                tokens.push(Token::ArrayStart);
                pos += 1;
            }
            b']' => {
                tokens.push(Token::ArrayEnd);
                pos += 1;
            }
            b',' => {
                tokens.push(Token::Comma);
                pos += 1;
            }
            b':' => {
                tokens.push(Token::Colon);
                pos += 1;
            }
            b'"' => {
                pos += 1;
                let start = pos;
                while pos < bytes.len() && bytes[pos] != b'"' {
                    pos += 1;
                }
                tokens.push(Token::String(input[start..pos].to_string()));
                // Steps past the closing quote, or past the end when the
                // string is unterminated; the parser surfaces the damage.
                pos += 1;
            }
            b'0'..=b'9' => {
                let start = pos;
                while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                    pos += 1;
                }
                tokens.push(Token::Number(input[start..pos].to_string()));
            }
            b't' if input[pos..].starts_with("true") => {
                tokens.push(Token::Bool(true));
                pos += 4;
            }
            b'f' if input[pos..].starts_with("false") => {
                tokens.push(Token::Bool(false));
                pos += 5;
            }
            b'n' if input[pos..].starts_with("null") => {
                tokens.push(Token::Null);
                pos += 4;
            }
            _ => {
                // pos sits on a char boundary: every multi-byte
                // continuation is consumed inside string contents, never
                // at token-start position.
                let found = input[pos..].chars().next().unwrap_or('\u{FFFD}');
                return Err(BindError::InvalidCharacter { found, offset: pos });
            }
        }
    }

    Ok(tokens)
}
