//! String constraint schemas.
//!
//! This module provides [`StringConstraints`]: length bounds and a regex
//! pattern. Lengths are measured in UTF-8 bytes, not code points, so a
//! single multi-byte character can satisfy a `minLength` greater than one.
//! The pattern is kept as a raw string and compiled through the validator's
//! [`RegexCache`](crate::RegexCache) at validation time; a pattern that
//! fails to compile becomes a reported failure and the check is skipped.

use crate::error::FailureReason;
use crate::schema::{Schema, SchemaObject, ValueConstraints};
use crate::validator::Context;
use crate::value::ValueType;

/// Constraints applied to string values.
///
/// # Example
///
/// ```rust
/// use conform::{Schema, Validator, Value};
///
/// let schema = Schema::string().min_length(1).pattern(r"^[a-z ]+$").build();
/// let validator = Validator::new();
///
/// assert!(validator.is_valid(&Value::from("hello world"), &schema));
/// assert!(!validator.is_valid(&Value::from(""), &schema));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringConstraints {
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<String>,
}

impl StringConstraints {
    /// Creates an empty set of string constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the string to be at least `min` UTF-8 bytes long.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Requires the string to be at most `max` UTF-8 bytes long.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Requires the string to match the given regex pattern.
    ///
    /// The pattern is not compiled here; an invalid pattern surfaces as a
    /// `PatternCompilationError` failure during validation.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Finishes the builder, producing a schema tagged `type: string`.
    pub fn build(self) -> Schema {
        SchemaObject::default()
            .value_type(ValueType::String)
            .string(self)
            .build()
    }

    pub(crate) fn check(&self, value: &str, ctx: &mut Context<'_>) {
        // Byte length, not character count.
        let length = value.len();
        if let Some(min_length) = self.min_length {
            if length < min_length {
                ctx.fail(FailureReason::StringTooShort { min_length, length });
            }
        }
        if let Some(max_length) = self.max_length {
            if length > max_length {
                ctx.fail(FailureReason::StringTooLong { max_length, length });
            }
        }
        if let Some(pattern) = &self.pattern {
            match ctx.regex_cache().compile(pattern) {
                Ok(regex) => {
                    if !regex.is_match(value) {
                        ctx.fail(FailureReason::StringPatternMismatch {
                            pattern: pattern.clone(),
                        });
                    }
                }
                Err(error) => ctx.fail(FailureReason::PatternCompilationError {
                    pattern: pattern.clone(),
                    error: error.to_string(),
                }),
            }
        }
    }
}

impl From<StringConstraints> for ValueConstraints {
    fn from(constraints: StringConstraints) -> Self {
        ValueConstraints::String(constraints)
    }
}
