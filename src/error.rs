//! Error types for the lexing, parsing, and binding stages.
//!
//! Each stage owns one variant of [`BindError`]:
//!
//! - [`BindError::InvalidCharacter`] — the lexer hit a character it
//!   cannot start a token with.
//! - [`BindError::InvalidSyntax`] — the parser saw a token sequence that
//!   violates the grammar.
//! - [`BindError::Conversion`] — the binder could not map a value onto
//!   the target type.
//!
//! All three are unrecoverable for the call in progress: a call either
//! returns a fully valid result or fails without a partially built
//! instance escaping.

use thiserror::Error;

/// Result type used throughout the crate.
pub type BindResult<T> = std::result::Result<T, BindError>;

/// All failure conditions of the tokenize/parse/bind pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The lexer encountered a character that cannot start a token.
    #[error("invalid character {found:?} at byte offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Byte offset into the input where the character was found.
        offset: usize,
    },

    /// The parser encountered a token sequence violating the grammar.
    ///
    /// `position` counts tokens consumed so far, so it points just past
    /// the token that triggered the error.
    #[error("invalid syntax at token {position}: {expected}")]
    InvalidSyntax {
        /// Human-readable description of what the grammar expected.
        expected: String,
        /// Number of tokens consumed when the error was detected.
        position: usize,
    },

    /// The binder could not map a parsed value onto the target type.
    #[error("cannot convert {value} into {target}")]
    Conversion {
        /// Compact rendering of the offending value.
        value: String,
        /// Name of the target type or shape.
        target: String,
    },
}

impl BindError {
    /// Build an [`BindError::InvalidSyntax`] from an expectation message.
    pub(crate) fn syntax(expected: impl Into<String>, position: usize) -> Self {
        BindError::InvalidSyntax {
            expected: expected.into(),
            position,
        }
    }

    /// Build a [`BindError::Conversion`] from a value rendering and a target name.
    pub(crate) fn conversion(value: impl Into<String>, target: impl Into<String>) -> Self {
        BindError::Conversion {
            value: value.into(),
            target: target.into(),
        }
    }
}
