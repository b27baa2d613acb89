use conform::{FailureReason, PathElement, Schema, SchemaPath, Validator, Value};
use serde_json::json;

#[test]
fn test_array_schema_accepts_array() {
    let validator = Validator::new();
    let schema = Schema::array().build();

    assert!(validator.is_valid(&Value::from(json!([1, "two", null])), &schema));
    assert!(!validator.is_valid(&Value::from(json!("not an array")), &schema));
}

#[test]
fn test_length_bounds() {
    let validator = Validator::new();
    let schema = Schema::array().min_items(1).max_items(3).build();

    assert!(validator.is_valid(&Value::from(json!([1])), &schema));
    assert!(validator.is_valid(&Value::from(json!([1, 2, 3])), &schema));

    let error = validator
        .validate(&Value::from(json!([])), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::ArrayTooShort {
            min_items: 1,
            length: 0,
        }
    );

    let error = validator
        .validate(&Value::from(json!([1, 2, 3, 4])), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::ArrayTooLong {
            max_items: 3,
            length: 4,
        }
    );
}

#[test]
fn test_unique_items() {
    let validator = Validator::new();
    let schema = Schema::array().unique().build();

    assert!(validator.is_valid(&Value::from(json!([1, 2, 3])), &schema));

    let error = validator
        .validate(&Value::from(json!([1, 1, 2])), &schema)
        .unwrap_err();
    assert_eq!(error.len(), 1);
    assert_eq!(error.first().reason, FailureReason::ArrayItemsNotUnique);
}

#[test]
fn test_unique_items_structural_equality() {
    let validator = Validator::new();
    let schema = Schema::array().unique().build();

    // Structurally equal objects count as duplicates regardless of key order.
    let dup = Value::array([
        Value::object([("a", Value::from(1)), ("b", Value::from(2))]),
        Value::object([("b", Value::from(2)), ("a", Value::from(1))]),
    ]);
    assert!(!validator.is_valid(&dup, &schema));

    // Integer and float variants are distinct values.
    let mixed = Value::array([Value::Integer(1), Value::Number(1.0)]);
    assert!(validator.is_valid(&mixed, &schema));
}

#[test]
fn test_uniform_items_reports_each_failing_index() {
    let validator = Validator::new();
    let schema = Schema::array()
        .items(Schema::integer().minimum(0).build())
        .build();

    let error = validator
        .validate(&Value::from(json!([1, -2, 3, -4])), &schema)
        .unwrap_err();

    let paths: Vec<String> = error.failures().map(|f| f.path.to_string()).collect();
    assert_eq!(paths, vec!["[1]", "[3]"]);
}

#[test]
fn test_positional_items() {
    let validator = Validator::new();
    let schema = Schema::array()
        .positional_items([Schema::string().build(), Schema::integer().build()])
        .build();

    assert!(validator.is_valid(&Value::from(json!(["id", 3])), &schema));

    let error = validator
        .validate(&Value::from(json!([3, "id"])), &schema)
        .unwrap_err();
    assert_eq!(error.len(), 2);

    // Elements past the positional list are unconstrained without
    // additionalItems.
    assert!(validator.is_valid(&Value::from(json!(["id", 3, null, true])), &schema));
}

#[test]
fn test_additional_items_applies_past_positional_list() {
    let validator = Validator::new();
    let schema = Schema::array()
        .positional_items([Schema::string().build()])
        .additional_items(Schema::integer().build())
        .build();

    assert!(validator.is_valid(&Value::from(json!(["id", 1, 2])), &schema));

    let error = validator
        .validate(&Value::from(json!(["id", 1, "oops"])), &schema)
        .unwrap_err();
    assert_eq!(error.len(), 1);
    assert_eq!(
        error.first().path,
        SchemaPath::root().push(PathElement::Index(2))
    );
}

#[test]
fn test_additional_items_inert_without_positional_list() {
    let validator = Validator::new();
    let schema = Schema::array().additional_items(Schema::never()).build();

    assert!(validator.is_valid(&Value::from(json!([1, 2, 3])), &schema));
}

#[test]
fn test_contains() {
    let validator = Validator::new();
    let schema = Schema::array()
        .contains(Schema::integer().minimum(10).build())
        .build();

    assert!(validator.is_valid(&Value::from(json!([1, 2, 30])), &schema));

    let error = validator
        .validate(&Value::from(json!([1, 2, 3])), &schema)
        .unwrap_err();
    assert_eq!(error.first().reason, FailureReason::ArrayContainsMismatch);
}

#[test]
fn test_contains_absent_is_vacuous() {
    let validator = Validator::new();
    let schema = Schema::array().build();

    assert!(validator.is_valid(&Value::from(json!([])), &schema));
}

#[test]
fn test_contains_runs_independently_of_positional_schemas() {
    let validator = Validator::new();
    let schema = Schema::array()
        .positional_items([Schema::string().build()])
        .contains(Schema::integer().build())
        .build();

    // The integer satisfying `contains` sits past the positional list.
    assert!(validator.is_valid(&Value::from(json!(["id", 7])), &schema));
    assert!(!validator.is_valid(&Value::from(json!(["id"])), &schema));
}

#[test]
fn test_nested_arrays() {
    let validator = Validator::new();
    let schema = Schema::array()
        .items(Schema::array().items(Schema::integer().build()).build())
        .build();

    assert!(validator.is_valid(&Value::from(json!([[1, 2], [3]])), &schema));

    let error = validator
        .validate(&Value::from(json!([[1], ["x"]])), &schema)
        .unwrap_err();
    assert_eq!(error.first().path.to_string(), "[1][0]");
}
