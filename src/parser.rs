//! Recursive descent JSON parser.
//!
//! Consumes the token sequence produced by [`crate::lexer::tokenize`]
//! through a single forward cursor, no backtracking, and builds a
//! [`Value`] tree bottom-up.
//!
//! The parser keeps a running count of consumed tokens; every
//! [`BindError::InvalidSyntax`] carries that count as its position so a
//! caller can locate the offending token in the sequence.

use crate::error::{BindError, BindResult};
use crate::lexer::{tokenize, Token};
use crate::value::{Members, Value};

/// Parse a token sequence into a [`Value`] tree.
///
/// The document must begin with `{` or `[`; an empty sequence or any
/// other opening token is an [`BindError::InvalidSyntax`]. Duplicate
/// keys within one object silently overwrite, last occurrence wins.
/// Tokens after the matching top-level closer are ignored.
pub fn parse(tokens: &[Token]) -> BindResult<Value> {
    Parser::new(tokens).document()
}

/// Tokenize and parse JSON text into a [`Value`] tree in one call.
///
/// Convenience for callers that want the dynamic tree without binding
/// it onto a target type.
pub fn parse_text(input: &str) -> BindResult<Value> {
    parse(&tokenize(input)?)
}

/// Forward cursor over a token slice with a consumed-token counter.
struct Parser<'a> {
    tokens: std::slice::Iter<'a, Token>,
    consumed: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens: tokens.iter(),
            consumed: 0,
        }
    }

    /// Consume the next token, advancing the position counter.
    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.next();
        if token.is_some() {
            self.consumed += 1;
        }
        token
    }

    fn syntax_error(&self, expected: impl Into<String>) -> BindError {
        BindError::syntax(expected, self.consumed)
    }

    fn document(&mut self) -> BindResult<Value> {
        match self.next() {
            None => Err(self.syntax_error("empty document")),
            Some(Token::ObjectStart) => self.object(),
            Some(Token::ArrayStart) => self.array(),
            Some(token) => Err(self.syntax_error(format!(
                "document must start with '{{' or '[', found {token}"
            ))),
        }
    }

    /// Parse object members after the opening `{` has been consumed.
    fn object(&mut self) -> BindResult<Value> {
        let mut members = Members::new();

        loop {
            let key = match self.next() {
                None => return Err(self.syntax_error("expected '}' or object key")),
                Some(Token::ObjectEnd) => return Ok(Value::Object(members)),
                Some(Token::String(s)) => s.clone(),
                Some(token) => {
                    return Err(
                        self.syntax_error(format!("object key must be a string, found {token}"))
                    )
                }
            };

            match self.next() {
                Some(Token::Colon) => {}
                _ => return Err(self.syntax_error("expected ':' after object key")),
            }

            let token = self
                .next()
                .ok_or_else(|| self.syntax_error("expected value after ':'"))?;
            let value = self.value(token)?;
            // Last write wins on duplicate keys.
            members.insert(key, value);

            match self.next() {
                Some(Token::Comma) => {}
                Some(Token::ObjectEnd) => return Ok(Value::Object(members)),
                Some(token) => {
                    return Err(self.syntax_error(format!("expected ',' or '}}', found {token}")))
                }
                None => return Err(self.syntax_error("expected ',' or '}'")),
            }
        }
    }

    /// Parse array elements after the opening `[` has been consumed.
    fn array(&mut self) -> BindResult<Value> {
        let mut elements = Vec::new();

        loop {
            let token = match self.next() {
                None => return Err(self.syntax_error("expected ']' or value")),
                Some(Token::ArrayEnd) => return Ok(Value::Array(elements)),
                Some(token) => token,
            };

            elements.push(self.value(token)?);

            match self.next() {
                Some(Token::Comma) => {}
                Some(Token::ArrayEnd) => return Ok(Value::Array(elements)),
                Some(token) => {
                    return Err(self.syntax_error(format!("expected ',' or ']', found {token}")))
                }
                None => return Err(self.syntax_error("expected ',' or ']'")),
            }
        }
    }

    /// Materialize a value from its opening token, recursing into
    /// nested objects and arrays.
    fn value(&mut self, token: &Token) -> BindResult<Value> {
        match token {
            Token::Null => Ok(Value::Null),
            Token::Bool(b) => Ok(Value::Bool(*b)),
            Token::String(s) => Ok(Value::String(s.clone())),
            Token::Number(text) => self.number(text),
            Token::ObjectStart => self.object(),
            Token::ArrayStart => self.array(),
            token => Err(self.syntax_error(format!("expected a value, found {token}"))),
        }
    }

    /// A decimal point makes the number a float; otherwise it is an
    /// integer. Text the lexer let through but that fits neither form
    /// (for example `1.2.3`) is rejected here.
    fn number(&self, text: &str) -> BindResult<Value> {
        if text.contains('.') {
            text.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.syntax_error(format!("malformed number {text}")))
        } else {
            text.parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.syntax_error(format!("malformed number {text}")))
        }
    }
}
