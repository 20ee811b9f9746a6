//! Structural binder: maps a [`Value`] tree onto typed records.
//!
//! Binding is driven by per-field descriptors ([`FieldBinding`])
//! declared once per target type through the
//! [`bind_record!`](crate::bind_record) macro and exposed as
//! [`Bind::FIELDS`]. Descriptors are `const` data, so there is nothing
//! to cache or lock at run time.
//!
//! Fields are evaluated independently: each one resolves its source key
//! (or composite sub-keys) in the current object, then coerces the
//! found value through [`FromValue`] — the exhaustive per-type coercion
//! table in [`coerce`]. A missing key is treated as `null`, which
//! `Option` fields absorb and every other target rejects as a
//! Conversion error.
//!
//! The binder never mutates the input tree; bound values are copies.

mod coerce;

use crate::error::{BindError, BindResult};
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::value::{Members, Value};

/// Where a field's value comes from within the source object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Plain lookup of one key.
    Key(&'static str),
    /// Composite merge: the value under `key` must be a nested object;
    /// the members named by `parts` are stringified and joined with
    /// single spaces, in declaration order.
    Composite {
        /// Key of the nested source object.
        key: &'static str,
        /// Ordered sub-keys to merge; absent ones are skipped.
        parts: &'static [&'static str],
    },
}

/// One field's binding descriptor: the struct field name plus its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    /// Declared field name on the target struct.
    pub field: &'static str,
    /// Where the field's value is looked up.
    pub source: FieldSource,
}

/// A record type that can be bound from a JSON object.
///
/// Implemented by the [`bind_record!`](crate::bind_record) macro; not
/// meant to be hand-written.
pub trait Bind: Sized {
    /// The statically declared binding-descriptor table for this type.
    const FIELDS: &'static [FieldBinding];

    /// Populate a fresh instance from the members of a source object.
    fn bind_fields(members: &Members) -> BindResult<Self>;
}

/// A type that can be coerced from a single [`Value`].
///
/// Implementations form the coercion table: every (source shape, target
/// type) pair is either explicitly supported or an explicit
/// [`BindError::Conversion`].
pub trait FromValue: Sized {
    /// Coerce `value` into `Self`, copying as needed.
    fn from_value(value: &Value) -> BindResult<Self>;
}

/// Bind a parsed value onto a record type.
///
/// The value must be a non-empty object; any other shape — including an
/// empty object, by contract — fails with [`BindError::Conversion`].
pub fn bind<T: Bind>(value: &Value) -> BindResult<T> {
    match value {
        Value::Object(members) if !members.is_empty() => T::bind_fields(members),
        Value::Object(_) => Err(BindError::conversion("{}", "record (object has no members)")),
        other => Err(BindError::conversion(
            other.to_string(),
            format!("record (expected object, found {})", other.type_name()),
        )),
    }
}

/// Bind each element of a parsed array, preserving order.
///
/// The value must be an array; an empty array yields an empty vector.
/// Every element must coerce to the element type — records recurse
/// through [`bind`], scalars go through their coercion rule — and an
/// element of the wrong shape fails the whole call.
pub fn bind_many<T: FromValue>(value: &Value) -> BindResult<Vec<T>> {
    match value {
        Value::Array(elements) => elements.iter().map(T::from_value).collect(),
        other => Err(BindError::conversion(
            other.to_string(),
            format!("sequence (expected array, found {})", other.type_name()),
        )),
    }
}

/// Tokenize, parse, and bind JSON text onto one record.
///
/// Fails with any of the three pipeline errors: Invalid-Character from
/// the lexer, Invalid-Syntax from the parser, or Conversion from the
/// binder.
pub fn parse_single<T: Bind>(input: &str) -> BindResult<T> {
    let value = parse(&tokenize(input)?)?;
    bind(&value)
}

/// Tokenize, parse, and bind JSON text onto an ordered sequence.
///
/// The document must be a top-level array. `parse_list::<T>("[]")`
/// yields an empty vector without error.
pub fn parse_list<T: FromValue>(input: &str) -> BindResult<Vec<T>> {
    let value = parse(&tokenize(input)?)?;
    bind_many(&value)
}

/// Resolve one field from the source object per its descriptor.
///
/// Not part of the intended public API; exposed for the code generated
/// by [`bind_record!`](crate::bind_record).
#[doc(hidden)]
pub fn field<T: FromValue>(members: &Members, source: &FieldSource) -> BindResult<T> {
    match source {
        FieldSource::Key(key) => T::from_value(members.get(*key).unwrap_or(&Value::Null)),
        FieldSource::Composite { key, parts } => {
            let source_value = members.get(*key).unwrap_or(&Value::Null);
            let merged = compose(source_value, parts)?;
            T::from_value(&merged)
        }
    }
}

/// Merge composite sub-keys out of a nested source object.
///
/// Present, non-null parts are stringified and joined with single
/// spaces; if nothing contributed, the merge yields `Null`. An array
/// source is a Conversion error — composite merging is defined only
/// over a nested object's direct children. A missing or scalar source
/// contributes nothing and yields `Null`.
fn compose(source: &Value, parts: &[&'static str]) -> BindResult<Value> {
    match source {
        Value::Object(members) => {
            let mut merged = String::new();
            for part in parts {
                let Some(value) = members.get(*part) else {
                    continue;
                };
                if value.is_null() {
                    continue;
                }
                if !merged.is_empty() {
                    merged.push(' ');
                }
                merged.push_str(&fragment(value));
            }
            if merged.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::String(merged))
            }
        }
        Value::Array(_) => Err(BindError::conversion(
            source.to_string(),
            "composite field (source must be an object, not an array)",
        )),
        _ => Ok(Value::Null),
    }
}

/// Stringify one composite part: strings contribute their raw text,
/// everything else its compact JSON rendering.
fn fragment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
