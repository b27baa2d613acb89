use std::sync::Arc;

use conform::{RegexCache, Schema, Validator, Value};

#[test]
fn test_pattern_compiled_once_across_validations() {
    let validator = Validator::new();
    let schema = Schema::string().pattern(r"^\d{3}$").build();

    assert!(validator.is_valid(&Value::from("123"), &schema));
    assert!(!validator.is_valid(&Value::from("12"), &schema));
    assert!(validator.is_valid(&Value::from("456"), &schema));

    assert_eq!(validator.regex_cache().compile_count(), 1);
}

#[test]
fn test_cache_shared_between_string_and_pattern_properties() {
    let validator = Validator::new();
    let string_schema = Schema::string().pattern(r"^v\d+$").build();
    let object_schema = Schema::object()
        .pattern_property(r"^v\d+$", Schema::integer().build())
        .build();

    assert!(validator.is_valid(&Value::from("v1"), &string_schema));
    assert!(validator.is_valid(&Value::object([("v2", Value::from(1))]), &object_schema));

    // Both keywords consult the same cache entry.
    assert_eq!(validator.regex_cache().compile_count(), 1);
}

#[test]
fn test_injected_cache_outlives_validator() {
    let cache = RegexCache::new();
    cache.compile(r"^[a-z]+$").unwrap();

    let validator = Validator::with_cache(cache);
    let schema = Schema::string().pattern(r"^[a-z]+$").build();
    assert!(validator.is_valid(&Value::from("warm"), &schema));

    // The pre-warmed entry is reused, not recompiled.
    assert_eq!(validator.regex_cache().compile_count(), 1);
}

#[test]
fn test_invalid_pattern_compiled_once() {
    let validator = Validator::new();
    let schema = Schema::string().pattern(r"[broken").build();

    assert!(!validator.is_valid(&Value::from("a"), &schema));
    assert!(!validator.is_valid(&Value::from("b"), &schema));

    assert_eq!(validator.regex_cache().compile_count(), 1);
}

#[test]
fn test_concurrent_first_use_compiles_once() {
    let validator = Arc::new(Validator::new());
    let schema = Arc::new(Schema::string().pattern(r"^\d+$").build());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validator = Arc::clone(&validator);
            let schema = Arc::clone(&schema);
            std::thread::spawn(move || validator.is_valid(&Value::from(i.to_string()), &schema))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    assert_eq!(validator.regex_cache().compile_count(), 1);
    assert_eq!(validator.regex_cache().len(), 1);
}
