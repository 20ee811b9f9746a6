//! jsonbind - a small JSON data-interchange library.
//!
//! Converts raw JSON text into a generic [`Value`] tree and binds that
//! tree onto statically declared record types, including nested
//! records, ordered collections, and field-level remapping and
//! composite-merge rules.
//!
//! # Architecture
//!
//! Three stages, each a pure in-memory transformation:
//!
//! - [`lexer`] - tokenizer: text to an ordered token sequence
//! - [`parser`] - recursive descent: tokens to a [`Value`] tree
//! - [`bind`] - structural binder: [`Value`] tree to typed records
//!
//! Target types declare their binding descriptors with
//! [`bind_record!`]; the binder resolves remapped keys, merges
//! composite sub-keys, and coerces scalars through an explicit
//! per-type table.
//!
//! # Example
//!
//! ```
//! use jsonbind::{bind_record, parse_single};
//!
//! bind_record! {
//!     pub struct Product {
//!         pub id: i64,
//!         pub name: String,
//!         pub tags: Vec<String>,
//!     }
//! }
//!
//! let product: Product =
//!     parse_single(r#"{"id": 7, "name": "lamp", "tags": ["home", "light"]}"#).unwrap();
//! assert_eq!(product.id, 7);
//! assert_eq!(product.tags, vec!["home", "light"]);
//! ```
//!
//! # Limitations
//!
//! Deliberately out of scope: escape-sequence decoding (string contents
//! are kept literal), exponent-notation and negative number literals,
//! JSON5 extensions, key-order preservation, and streaming input.

// Library code must propagate errors, never panic.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

mod macros;

pub mod bind;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

// Re-export the full public surface at the crate root
pub use bind::{bind, bind_many, parse_list, parse_single, Bind, FieldBinding, FieldSource, FromValue};
pub use error::{BindError, BindResult};
pub use lexer::{tokenize, Token};
pub use parser::{parse, parse_text};
pub use value::{Members, Value};
