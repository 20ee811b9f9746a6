//! Scalar and container coercions: the [`FromValue`] implementations.
//!
//! Each implementation is an exhaustive match over the source value's
//! shape, so every unsupported (source, target) pair is a visible
//! `Conversion` arm rather than a runtime surprise. The integer/float
//! split made by the parser matters here: a float source never coerces
//! into an integer target.

use super::FromValue;
use crate::error::{BindError, BindResult};
use crate::value::Value;

fn conversion(value: &Value, target: &str) -> BindError {
    BindError::conversion(value.to_string(), target)
}

impl FromValue for String {
    fn from_value(value: &Value) -> BindResult<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(x) => Ok(x.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(conversion(value, "String")),
        }
    }
}

/// Signed integer targets accept an in-range integer source or a string
/// that parses as one. A float source is rejected: the target declares
/// an exact integer.
macro_rules! int_from_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> BindResult<$ty> {
                match value {
                    Value::Int(n) => {
                        <$ty>::try_from(*n).map_err(|_| conversion(value, stringify!($ty)))
                    }
                    Value::String(s) => {
                        s.trim().parse().map_err(|_| conversion(value, stringify!($ty)))
                    }
                    Value::Float(_)
                    | Value::Bool(_)
                    | Value::Null
                    | Value::Array(_)
                    | Value::Object(_) => Err(conversion(value, stringify!($ty))),
                }
            }
        }
    )+};
}

int_from_value!(i8, i16, i32, i64);

macro_rules! float_from_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> BindResult<$ty> {
                match value {
                    Value::Int(n) => Ok(*n as $ty),
                    Value::Float(x) => Ok(*x as $ty),
                    Value::String(s) => {
                        s.trim().parse().map_err(|_| conversion(value, stringify!($ty)))
                    }
                    Value::Bool(_)
                    | Value::Null
                    | Value::Array(_)
                    | Value::Object(_) => Err(conversion(value, stringify!($ty))),
                }
            }
        }
    )+};
}

float_from_value!(f32, f64);

impl FromValue for bool {
    fn from_value(value: &Value) -> BindResult<bool> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| conversion(value, "bool")),
            Value::Int(_) | Value::Float(_) | Value::Null | Value::Array(_) | Value::Object(_) => {
                Err(conversion(value, "bool"))
            }
        }
    }
}

/// `Option` is how a field represents absence: a null (or missing,
/// which the binder turns into null) source becomes `None`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> BindResult<Option<T>> {
        match value {
            Value::Null => Ok(None),
            present => T::from_value(present).map(Some),
        }
    }
}

/// Ordered collections come only from arrays; element order is
/// preserved. A null source is an error — an absent list needs an
/// `Option<Vec<T>>` field.
impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> BindResult<Vec<T>> {
        match value {
            Value::Array(elements) => elements.iter().map(T::from_value).collect(),
            other => Err(conversion(other, "Vec")),
        }
    }
}
