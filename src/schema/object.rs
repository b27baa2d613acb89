//! Object constraint schemas.
//!
//! This module provides [`ObjectConstraints`]: property-count bounds, named
//! property schemas with an `additionalProperties` fallback, regex-keyed
//! `patternProperties`, a `propertyNames` schema applied to keys, and the
//! `required` set. Missing required keys are reported as one aggregated
//! failure listing every absent key.

use indexmap::IndexMap;

use crate::error::FailureReason;
use crate::path::PathElement;
use crate::schema::{Schema, SchemaObject, ValueConstraints};
use crate::validator::Context;
use crate::value::{Value, ValueType};

/// Constraints applied to object values.
///
/// # Example
///
/// ```rust
/// use conform::{Schema, Validator, Value};
///
/// let schema = Schema::object()
///     .property("name", Schema::string().min_length(1).build())
///     .required(["name"])
///     .build();
/// let validator = Validator::new();
///
/// let value = Value::object([("name", Value::from("Alice"))]);
/// assert!(validator.is_valid(&value, &schema));
///
/// let empty = Value::object::<&str, _>([]);
/// assert!(!validator.is_valid(&empty, &schema));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectConstraints {
    pub(crate) min_properties: Option<usize>,
    pub(crate) max_properties: Option<usize>,
    pub(crate) properties: IndexMap<String, Schema>,
    pub(crate) pattern_properties: IndexMap<String, Schema>,
    pub(crate) additional_properties: Option<Box<Schema>>,
    pub(crate) required: Vec<String>,
    pub(crate) property_names: Option<Box<Schema>>,
}

impl ObjectConstraints {
    /// Creates an empty set of object constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the object to have at least `min` properties.
    pub fn min_properties(mut self, min: usize) -> Self {
        self.min_properties = Some(min);
        self
    }

    /// Requires the object to have at most `max` properties.
    pub fn max_properties(mut self, max: usize) -> Self {
        self.max_properties = Some(max);
        self
    }

    /// Declares a schema for the named property.
    pub fn property(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(key.into(), schema);
        self
    }

    /// Declares a schema for every property whose key matches `pattern`.
    ///
    /// A key may match several patterns; every matching schema is applied.
    pub fn pattern_property(mut self, pattern: impl Into<String>, schema: Schema) -> Self {
        self.pattern_properties.insert(pattern.into(), schema);
        self
    }

    /// Declares the fallback schema for properties without a named schema.
    pub fn additional_properties(mut self, schema: impl Into<Schema>) -> Self {
        self.additional_properties = Some(Box::new(schema.into()));
        self
    }

    /// Declares keys that must be present.
    pub fn required<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.required.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Declares a schema every key must satisfy (as a string value).
    pub fn property_names(mut self, schema: Schema) -> Self {
        self.property_names = Some(Box::new(schema));
        self
    }

    /// Finishes the builder, producing a schema tagged `type: object`.
    pub fn build(self) -> Schema {
        SchemaObject::default()
            .value_type(ValueType::Object)
            .object(self)
            .build()
    }

    pub(crate) fn check(&self, entries: &IndexMap<String, Value>, ctx: &mut Context<'_>) {
        let count = entries.len();
        if let Some(min_properties) = self.min_properties {
            if count < min_properties {
                ctx.fail(FailureReason::ObjectTooFewProperties {
                    min_properties,
                    count,
                });
            }
        }
        if let Some(max_properties) = self.max_properties {
            if count > max_properties {
                ctx.fail(FailureReason::ObjectTooManyProperties {
                    max_properties,
                    count,
                });
            }
        }

        // Compile pattern schemas up front so a bad pattern is reported
        // once per validation, not once per key.
        let mut pattern_matchers = Vec::with_capacity(self.pattern_properties.len());
        for (pattern, schema) in &self.pattern_properties {
            match ctx.regex_cache().compile(pattern) {
                Ok(regex) => pattern_matchers.push((regex, schema)),
                Err(error) => ctx.fail(FailureReason::PatternCompilationError {
                    pattern: pattern.clone(),
                    error: error.to_string(),
                }),
            }
        }

        let mut missing: Vec<&String> = self.required.iter().collect();

        for (key, value) in entries {
            if let Some(names) = &self.property_names {
                let key_value = Value::String(key.clone());
                ctx.in_scope(PathElement::PropertyName(key.clone()), |ctx| {
                    ctx.walk(&key_value, names);
                });
            }

            let schema = self
                .properties
                .get(key)
                .or_else(|| self.additional_properties.as_deref());
            if let Some(schema) = schema {
                ctx.in_scope(PathElement::PropertyValue(key.clone()), |ctx| {
                    ctx.walk(value, schema);
                });
            }

            for (regex, schema) in &pattern_matchers {
                if regex.is_match(key) {
                    ctx.in_scope(PathElement::PropertyValue(key.clone()), |ctx| {
                        ctx.walk(value, schema);
                    });
                }
            }

            missing.retain(|required| *required != key);
        }

        if !missing.is_empty() {
            ctx.fail(FailureReason::ObjectMissingRequiredProperties {
                missing: missing.into_iter().cloned().collect(),
            });
        }
    }
}

impl From<ObjectConstraints> for ValueConstraints {
    fn from(constraints: ObjectConstraints) -> Self {
        ValueConstraints::Object(constraints)
    }
}
