//! Binder integration tests.
//!
//! Exercises the full text -> typed record pipeline: remapped keys,
//! composite merges, nested records, ordered collections, scalar
//! coercion, and the Conversion error contract.

use jsonbind::{bind_record, parse_list, parse_single, Bind, BindError, FieldSource};
use pretty_assertions::assert_eq;

bind_record! {
    pub struct Address {
        pub street: String,
        pub number: i64,
    }
}

bind_record! {
    pub struct Person {
        pub name: String,
        pub age: i64 => "years",
        pub address: Option<Address>,
        pub birthday: Option<String> => { "birth" => ["day", "month"] },
    }
}

bind_record! {
    pub struct Order {
        pub id: i64,
        pub numbers: Vec<i64>,
        pub products: Vec<String>,
    }
}

// ============================================================================
// Plain and remapped fields
// ============================================================================

#[test]
fn fields_bind_by_declared_name() {
    let person: Person = parse_single(r#"{"name": "Ada", "years": 36}"#).unwrap();
    assert_eq!(person.name, "Ada");
    assert_eq!(person.age, 36);
    assert_eq!(person.address, None);
    assert_eq!(person.birthday, None);
}

#[test]
fn remapped_key_takes_the_source_name() {
    // "years" feeds `age`; a literal "age" key is ignored.
    let person: Person = parse_single(r#"{"name": "Ada", "age": 1, "years": 36}"#).unwrap();
    assert_eq!(person.age, 36);
}

#[test]
fn descriptor_table_is_static_data() {
    assert_eq!(Person::FIELDS.len(), 4);
    assert_eq!(Person::FIELDS[1].field, "age");
    assert_eq!(Person::FIELDS[1].source, FieldSource::Key("years"));
    assert_eq!(
        Person::FIELDS[3].source,
        FieldSource::Composite {
            key: "birth",
            parts: &["day", "month"],
        }
    );
}

// ============================================================================
// Composite fields
// ============================================================================

#[test]
fn composite_merges_subkeys_in_order() {
    let person: Person = parse_single(
        r#"{"name": "Ada", "years": 36, "birth": {"day": 1, "month": "February"}}"#,
    )
    .unwrap();
    assert_eq!(person.birthday.as_deref(), Some("1 February"));
}

#[test]
fn composite_skips_absent_subkeys() {
    let person: Person =
        parse_single(r#"{"name": "Ada", "years": 36, "birth": {"month": "February"}}"#).unwrap();
    assert_eq!(person.birthday.as_deref(), Some("February"));
}

#[test]
fn composite_with_nothing_to_merge_is_absent() {
    let person: Person =
        parse_single(r#"{"name": "Ada", "years": 36, "birth": {"era": "modern"}}"#).unwrap();
    assert_eq!(person.birthday, None);
}

#[test]
fn composite_over_array_source_is_a_conversion_error() {
    let result: Result<Person, _> =
        parse_single(r#"{"name": "Ada", "years": 36, "birth": [1, "February"]}"#);
    assert!(matches!(result, Err(BindError::Conversion { .. })));
}

#[test]
fn composite_with_missing_source_key_is_absent() {
    let person: Person = parse_single(r#"{"name": "Ada", "years": 36}"#).unwrap();
    assert_eq!(person.birthday, None);
}

// ============================================================================
// Nested records
// ============================================================================

#[test]
fn nested_object_binds_recursively() {
    let person: Person = parse_single(
        r#"{"name": "Ada", "years": 36, "address": {"street": "Main", "number": 7}}"#,
    )
    .unwrap();
    assert_eq!(
        person.address,
        Some(Address {
            street: "Main".to_string(),
            number: 7,
        })
    );
}

#[test]
fn nested_empty_object_is_a_conversion_error() {
    let result: Result<Person, _> =
        parse_single(r#"{"name": "Ada", "years": 36, "address": {}}"#);
    assert!(matches!(result, Err(BindError::Conversion { .. })));
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn arrays_bind_to_ordered_collections() {
    let order: Order =
        parse_single(r#"{"id": 1, "numbers": [1, 2, 3], "products": ["a", "b"]}"#).unwrap();
    assert_eq!(order.numbers, vec![1, 2, 3]);
    assert_eq!(order.products, vec!["a", "b"]);
}

#[test]
fn empty_array_binds_to_empty_collection_not_absence() {
    let order: Order = parse_single(r#"{"id": 1, "numbers": [9], "products": []}"#).unwrap();
    assert_eq!(order.products, Vec::<String>::new());
}

#[test]
fn array_of_objects_binds_each_element() {
    let addresses: Vec<Address> = parse_list(
        r#"[{"street": "Main", "number": 1}, {"street": "Side", "number": 2}]"#,
    )
    .unwrap();
    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].street, "Main");
    assert_eq!(addresses[1].number, 2);
}

#[test]
fn scalar_list_binds_element_wise() {
    let numbers: Vec<i64> = parse_list("[3, 1, 2]").unwrap();
    assert_eq!(numbers, vec![3, 1, 2]);
}

#[test]
fn empty_list_parses_without_error() {
    let addresses: Vec<Address> = parse_list("[]").unwrap();
    assert!(addresses.is_empty());

    let numbers: Vec<i64> = parse_list("[]").unwrap();
    assert!(numbers.is_empty());
}

#[test]
fn list_element_of_wrong_shape_is_a_conversion_error() {
    let result: Result<Vec<Address>, _> =
        parse_list(r#"[{"street": "Main", "number": 1}, 42]"#);
    assert!(matches!(result, Err(BindError::Conversion { .. })));
}

// ============================================================================
// Coercion
// ============================================================================

#[test]
fn numeric_text_coerces_into_integer_fields() {
    let order: Order =
        parse_single(r#"{"id": "17", "numbers": [], "products": []}"#).unwrap();
    assert_eq!(order.id, 17);
}

#[test]
fn float_source_into_integer_field_is_a_conversion_error() {
    let result: Result<Order, _> =
        parse_single(r#"{"id": 1.5, "numbers": [], "products": []}"#);
    assert!(matches!(result, Err(BindError::Conversion { .. })));
}

#[test]
fn number_source_coerces_into_string_field() {
    let person: Person = parse_single(r#"{"name": 404, "years": 36}"#).unwrap();
    assert_eq!(person.name, "404");
}

#[test]
fn missing_key_on_non_optional_field_is_a_conversion_error() {
    let result: Result<Person, _> = parse_single(r#"{"years": 36}"#);
    match result {
        Err(BindError::Conversion { value, target }) => {
            assert_eq!(value, "null");
            assert_eq!(target, "String");
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

// ============================================================================
// Top-level contract
// ============================================================================

#[test]
fn empty_object_fails_even_without_required_fields() {
    bind_record! {
        pub struct Empty {}
    }

    let result: Result<Empty, _> = parse_single("{}");
    assert!(matches!(result, Err(BindError::Conversion { .. })));
}

#[test]
fn binding_a_top_level_array_as_record_is_a_conversion_error() {
    let result: Result<Person, _> = parse_single("[]");
    assert!(matches!(result, Err(BindError::Conversion { .. })));
}

#[test]
fn pipeline_errors_keep_their_stage() {
    // Lexer error
    let result: Result<Person, _> = parse_single("@");
    assert!(matches!(result, Err(BindError::InvalidCharacter { .. })));

    // Parser error
    let result: Result<Person, _> = parse_single(r#"{"name" "Ada"}"#);
    assert!(matches!(result, Err(BindError::InvalidSyntax { .. })));

    // Binder error
    let result: Result<Person, _> = parse_single(r#"{"name": "Ada", "years": "not a number"}"#);
    assert!(matches!(result, Err(BindError::Conversion { .. })));
}
