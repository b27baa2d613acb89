use conform::{FailureReason, Schema, Validator, Value};

#[test]
fn test_string_schema_accepts_string() {
    let validator = Validator::new();
    let schema = Schema::string().build();

    assert!(validator.is_valid(&Value::from("hello"), &schema));
    assert!(!validator.is_valid(&Value::Integer(42), &schema));
}

#[test]
fn test_min_length() {
    let validator = Validator::new();
    let schema = Schema::string().min_length(5).build();

    assert!(validator.is_valid(&Value::from("hello"), &schema));

    let error = validator.validate(&Value::from("hi"), &schema).unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::StringTooShort {
            min_length: 5,
            length: 2,
        }
    );
}

#[test]
fn test_max_length() {
    let validator = Validator::new();
    let schema = Schema::string().max_length(3).build();

    assert!(validator.is_valid(&Value::from("abc"), &schema));

    let error = validator
        .validate(&Value::from("abcd"), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::StringTooLong {
            max_length: 3,
            length: 4,
        }
    );
}

#[test]
fn test_empty_string() {
    let validator = Validator::new();
    let schema = Schema::string().min_length(1).build();

    let error = validator.validate(&Value::from(""), &schema).unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::StringTooShort {
            min_length: 1,
            length: 0,
        }
    );
}

#[test]
fn test_length_is_utf8_byte_count() {
    let validator = Validator::new();

    // "🎉" is one character but four UTF-8 bytes.
    let emoji = Value::from("🎉");

    // Satisfies a minimum no single-byte character could under char count.
    assert!(validator.is_valid(&emoji, &Schema::string().min_length(2).build()));
    assert!(validator.is_valid(&emoji, &Schema::string().min_length(4).build()));

    // And exceeds a byte-based maximum despite being "one character long".
    let error = validator
        .validate(&emoji, &Schema::string().max_length(3).build())
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::StringTooLong {
            max_length: 3,
            length: 4,
        }
    );
}

#[test]
fn test_pattern_match() {
    let validator = Validator::new();
    let schema = Schema::string().pattern(r"^\d+$").build();

    assert!(validator.is_valid(&Value::from("12345"), &schema));

    let error = validator
        .validate(&Value::from("abc"), &schema)
        .unwrap_err();
    assert_eq!(
        error.first().reason,
        FailureReason::StringPatternMismatch {
            pattern: r"^\d+$".into(),
        }
    );
}

#[test]
fn test_invalid_pattern_degrades_gracefully() {
    let validator = Validator::new();
    let schema = Schema::string().min_length(10).pattern(r"[invalid").build();

    let error = validator
        .validate(&Value::from("abc"), &schema)
        .unwrap_err();

    // The bad pattern is reported and skipped; other checks still run.
    assert_eq!(error.len(), 2);
    let compile_errors = error.matching(|r| {
        matches!(r, FailureReason::PatternCompilationError { pattern, .. } if pattern == "[invalid")
    });
    assert_eq!(compile_errors.len(), 1);
    let short = error.matching(|r| matches!(r, FailureReason::StringTooShort { .. }));
    assert_eq!(short.len(), 1);
}

#[test]
fn test_all_violations_reported() {
    let validator = Validator::new();
    let schema = Schema::string().min_length(10).pattern(r"^\d+$").build();

    let error = validator
        .validate(&Value::from("abc"), &schema)
        .unwrap_err();
    assert_eq!(error.len(), 2);
}
