use conform::{FailureReason, PathElement, Schema, SchemaPath, Validator, Value};
use serde_json::json;

#[test]
fn test_object_schema_accepts_object() {
    let validator = Validator::new();
    let schema = Schema::object().build();

    assert!(validator.is_valid(&Value::from(json!({})), &schema));
    assert!(!validator.is_valid(&Value::from(json!([1])), &schema));
}

#[test]
fn test_property_count_bounds() {
    let validator = Validator::new();
    let schema = Schema::object().min_properties(1).max_properties(2).build();

    assert!(validator.is_valid(&Value::from(json!({"a": 1})), &schema));

    let error = validator
        .validate(&Value::from(json!({})), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::ObjectTooFewProperties {
            min_properties: 1,
            count: 0,
        }
    );

    let error = validator
        .validate(&Value::from(json!({"a": 1, "b": 2, "c": 3})), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::ObjectTooManyProperties {
            max_properties: 2,
            count: 3,
        }
    );
}

#[test]
fn test_missing_required_properties_aggregated() {
    let validator = Validator::new();
    let schema = Schema::object().required(["a", "b"]).build();

    let error = validator
        .validate(&Value::from(json!({"a": 1})), &schema)
        .unwrap_err();

    // One aggregated failure listing every missing key.
    assert_eq!(error.len(), 1);
    assert_eq!(
        error.first().reason,
        FailureReason::ObjectMissingRequiredProperties {
            missing: vec!["b".into()],
        }
    );
}

#[test]
fn test_all_missing_keys_listed_in_order() {
    let validator = Validator::new();
    let schema = Schema::object().required(["a", "b", "c"]).build();

    let error = validator
        .validate(&Value::from(json!({"b": 1})), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::ObjectMissingRequiredProperties {
            missing: vec!["a".into(), "c".into()],
        }
    );
}

#[test]
fn test_named_property_schemas() {
    let validator = Validator::new();
    let schema = Schema::object()
        .property("name", Schema::string().min_length(1).build())
        .property("age", Schema::integer().minimum(0).build())
        .build();

    assert!(validator.is_valid(&Value::from(json!({"name": "Alice", "age": 30})), &schema));

    let error = validator
        .validate(&Value::from(json!({"name": "", "age": -1})), &schema)
        .unwrap_err();
    assert_eq!(error.len(), 2);
    let paths: Vec<String> = error.failures().map(|f| f.path.to_string()).collect();
    assert_eq!(paths, vec!["name", "age"]);
}

#[test]
fn test_additional_properties_fallback() {
    let validator = Validator::new();
    let schema = Schema::object()
        .property("id", Schema::integer().build())
        .additional_properties(Schema::string().build())
        .build();

    // Named schema wins for "id"; everything else falls back.
    assert!(validator.is_valid(&Value::from(json!({"id": 1, "note": "ok"})), &schema));

    let error = validator
        .validate(&Value::from(json!({"id": 1, "note": 2})), &schema)
        .unwrap_err();
    assert_eq!(error.first().path.to_string(), "note");
}

#[test]
fn test_additional_properties_false_rejects_unknown_keys() {
    let validator = Validator::new();
    let schema = Schema::object()
        .property("name", Schema::string().build())
        .additional_properties(Schema::never())
        .build();

    assert!(validator.is_valid(&Value::from(json!({"name": "x"})), &schema));

    let error = validator
        .validate(&Value::from(json!({"name": "x", "extra": 1})), &schema)
        .unwrap_err();
    assert_eq!(error.first().path.to_string(), "extra");
    assert_eq!(error.first().reason, FailureReason::FalseSchema);
}

#[test]
fn test_pattern_properties() {
    let validator = Validator::new();
    let schema = Schema::object()
        .pattern_property(r"^num_", Schema::integer().build())
        .pattern_property(r"^str_", Schema::string().build())
        .build();

    assert!(validator.is_valid(
        &Value::from(json!({"num_a": 1, "str_b": "x", "other": null})),
        &schema
    ));

    let error = validator
        .validate(&Value::from(json!({"num_a": "not a number"})), &schema)
        .unwrap_err();
    assert_eq!(error.first().path.to_string(), "num_a");
}

#[test]
fn test_key_matching_several_patterns_gets_all_schemas() {
    let validator = Validator::new();
    let schema = Schema::object()
        .pattern_property(r"^a", Schema::integer().minimum(10).build())
        .pattern_property(r"b$", Schema::integer().multiple_of(2).build())
        .build();

    // "ab" matches both patterns; both constraint sets apply.
    assert!(validator.is_valid(&Value::from(json!({"ab": 12})), &schema));

    let error = validator
        .validate(&Value::from(json!({"ab": 5})), &schema)
        .unwrap_err();
    assert_eq!(error.len(), 2);
}

#[test]
fn test_pattern_properties_and_named_schema_both_apply() {
    let validator = Validator::new();
    let schema = Schema::object()
        .property("count", Schema::integer().minimum(0).build())
        .pattern_property(r"^c", Schema::integer().maximum(100).build())
        .build();

    assert!(validator.is_valid(&Value::from(json!({"count": 50})), &schema));
    assert!(!validator.is_valid(&Value::from(json!({"count": -1})), &schema));
    assert!(!validator.is_valid(&Value::from(json!({"count": 500})), &schema));
}

#[test]
fn test_bad_pattern_property_reported_once() {
    let validator = Validator::new();
    let schema = Schema::object()
        .pattern_property(r"[broken", Schema::string().build())
        .build();

    let error = validator
        .validate(&Value::from(json!({"a": 1, "b": 2, "c": 3})), &schema)
        .unwrap_err();

    // One compile failure per validation, not one per key.
    assert_eq!(error.len(), 1);
    assert!(matches!(
        &error.first().reason,
        FailureReason::PatternCompilationError { pattern, .. } if pattern == "[broken"
    ));
}

#[test]
fn test_property_names() {
    let validator = Validator::new();
    let schema = Schema::object()
        .property_names(Schema::string().max_length(3).build())
        .build();

    assert!(validator.is_valid(&Value::from(json!({"abc": 1})), &schema));

    let error = validator
        .validate(&Value::from(json!({"toolong": 1})), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().path,
        SchemaPath::root().push(PathElement::PropertyName("toolong".into()))
    );
    assert_eq!(
        error.first().reason,
        FailureReason::StringTooLong {
            max_length: 3,
            length: 7,
        }
    );
}

#[test]
fn test_nested_objects() {
    let validator = Validator::new();
    let schema = Schema::object()
        .property(
            "address",
            Schema::object()
                .property("city", Schema::string().min_length(1).build())
                .required(["city"])
                .build(),
        )
        .build();

    assert!(validator.is_valid(
        &Value::from(json!({"address": {"city": "Berlin"}})),
        &schema
    ));

    let error = validator
        .validate(&Value::from(json!({"address": {"city": ""}})), &schema)
        .unwrap_err();
    assert_eq!(error.first().path.to_string(), "address.city");
}
