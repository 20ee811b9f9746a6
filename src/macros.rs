//! The [`bind_record!`] macro: statically declared binding descriptors.
//!
//! Every target type declares its field bindings up front, so field
//! names, remaps, and composite merges are checked data known at
//! compile time, not strings resolved at bind time.

/// Declare a bindable record type.
///
/// Emits the struct itself (with `Debug`, `Clone`, `Default`, and
/// `PartialEq` derives) plus [`Bind`](crate::bind::Bind) and
/// [`FromValue`](crate::bind::FromValue) implementations driven by a
/// per-field [`FieldSource`](crate::bind::FieldSource).
///
/// Field forms:
///
/// - `name: Ty` — bound from the object key `"name"`.
/// - `name: Ty => "key"` — bound from the remapped key `"key"`.
/// - `name: Ty => { "key" => ["a", "b"] }` — composite: the value under
///   `"key"` must be a nested object whose members `"a"` and `"b"` are
///   merged, space-separated, into one string.
/// - `name: Ty => { ["a", "b"] }` — composite with the source key
///   defaulting to the field name.
///
/// # Example
///
/// ```
/// use jsonbind::{bind_record, parse_single};
///
/// bind_record! {
///     pub struct Person {
///         pub name: String,
///         pub age: i64 => "years",
///         pub birthday: Option<String> => { "birth" => ["day", "month"] },
///     }
/// }
///
/// let person: Person =
///     parse_single(r#"{"name":"Ada","years":36,"birth":{"day":10,"month":"December"}}"#)
///         .unwrap();
/// assert_eq!(person.age, 36);
/// assert_eq!(person.birthday.as_deref(), Some("10 December"));
/// ```
#[macro_export]
macro_rules! bind_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $fname:ident : $fty:ty $(=> $src:tt)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $fname: $fty,
            )*
        }

        impl $crate::bind::Bind for $name {
            const FIELDS: &'static [$crate::bind::FieldBinding] = &[
                $(
                    $crate::bind::FieldBinding {
                        field: stringify!($fname),
                        source: $crate::bind_record!(@source $fname $(=> $src)?),
                    },
                )*
            ];

            fn bind_fields(
                members: &$crate::value::Members,
            ) -> $crate::error::BindResult<Self> {
                Ok(Self {
                    $(
                        $fname: $crate::bind::field(
                            members,
                            &$crate::bind_record!(@source $fname $(=> $src)?),
                        )?,
                    )*
                })
            }
        }

        impl $crate::bind::FromValue for $name {
            fn from_value(value: &$crate::value::Value) -> $crate::error::BindResult<Self> {
                $crate::bind::bind(value)
            }
        }
    };

    // Field source resolution: plain field name.
    (@source $fname:ident) => {
        $crate::bind::FieldSource::Key(stringify!($fname))
    };
    // Remapped key.
    (@source $fname:ident => $key:literal) => {
        $crate::bind::FieldSource::Key($key)
    };
    // Composite with an explicit source key.
    (@source $fname:ident => { $key:literal => [$($part:literal),+ $(,)?] }) => {
        $crate::bind::FieldSource::Composite {
            key: $key,
            parts: &[$($part),+],
        }
    };
    // Composite keyed by the field name itself.
    (@source $fname:ident => { [$($part:literal),+ $(,)?] }) => {
        $crate::bind::FieldSource::Composite {
            key: stringify!($fname),
            parts: &[$($part),+],
        }
    };
}
