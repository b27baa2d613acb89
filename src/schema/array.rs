//! Array constraint schemas.
//!
//! This module provides [`ArrayConstraints`]: length bounds, `uniqueItems`,
//! per-element schemas (a single schema for every element or a positional
//! list with `additionalItems`), and `contains`.

use crate::error::FailureReason;
use crate::path::PathElement;
use crate::schema::{Schema, SchemaObject, ValueConstraints};
use crate::validator::Context;
use crate::value::{Value, ValueType};

/// The two forms of the `items` keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Items {
    /// One schema applied to every element.
    Uniform(Box<Schema>),
    /// A positional list; `additionalItems` applies past its end.
    Positional(Vec<Schema>),
}

/// Constraints applied to array values.
///
/// # Example
///
/// ```rust
/// use conform::{Schema, Validator, Value};
///
/// let schema = Schema::array()
///     .items(Schema::integer().minimum(0).build())
///     .min_items(1)
///     .unique()
///     .build();
/// let validator = Validator::new();
///
/// let good = Value::array([Value::from(1), Value::from(2)]);
/// assert!(validator.is_valid(&good, &schema));
///
/// let dup = Value::array([Value::from(1), Value::from(1)]);
/// assert!(!validator.is_valid(&dup, &schema));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayConstraints {
    pub(crate) min_items: Option<usize>,
    pub(crate) max_items: Option<usize>,
    pub(crate) unique_items: bool,
    pub(crate) items: Option<Items>,
    pub(crate) additional_items: Option<Box<Schema>>,
    pub(crate) contains: Option<Box<Schema>>,
}

impl ArrayConstraints {
    /// Creates an empty set of array constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the array to have at least `min` elements.
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Requires the array to have at most `max` elements.
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Requires all elements to be distinct (structural equality).
    pub fn unique(mut self) -> Self {
        self.unique_items = true;
        self
    }

    /// Applies one schema to every element.
    pub fn items(mut self, schema: Schema) -> Self {
        self.items = Some(Items::Uniform(Box::new(schema)));
        self
    }

    /// Applies schemas positionally; see [`ArrayConstraints::additional_items`]
    /// for elements past the end of the list.
    pub fn positional_items<I: IntoIterator<Item = Schema>>(mut self, schemas: I) -> Self {
        self.items = Some(Items::Positional(schemas.into_iter().collect()));
        self
    }

    /// Applies a schema to elements beyond the positional list.
    ///
    /// Inert unless `items` is the positional form.
    pub fn additional_items(mut self, schema: Schema) -> Self {
        self.additional_items = Some(Box::new(schema));
        self
    }

    /// Requires at least one element to match the given schema.
    pub fn contains(mut self, schema: Schema) -> Self {
        self.contains = Some(Box::new(schema));
        self
    }

    /// Finishes the builder, producing a schema tagged `type: array`.
    pub fn build(self) -> Schema {
        SchemaObject::default()
            .value_type(ValueType::Array)
            .array(self)
            .build()
    }

    /// Returns the effective schema for the element at `index`.
    fn schema_for_index(&self, index: usize) -> Option<&Schema> {
        match &self.items {
            Some(Items::Uniform(schema)) => Some(schema),
            Some(Items::Positional(list)) => list
                .get(index)
                .or_else(|| self.additional_items.as_deref()),
            None => None,
        }
    }

    pub(crate) fn check(&self, items: &[Value], ctx: &mut Context<'_>) {
        let length = items.len();
        if let Some(min_items) = self.min_items {
            if length < min_items {
                ctx.fail(FailureReason::ArrayTooShort { min_items, length });
            }
        }
        if let Some(max_items) = self.max_items {
            if length > max_items {
                ctx.fail(FailureReason::ArrayTooLong { max_items, length });
            }
        }

        if self.unique_items {
            let mut seen: Vec<&Value> = Vec::with_capacity(length);
            let mut duplicate = false;
            for item in items {
                if seen.contains(&item) {
                    duplicate = true;
                    break;
                }
                seen.push(item);
            }
            if duplicate {
                ctx.fail(FailureReason::ArrayItemsNotUnique);
            }
        }

        for (index, item) in items.iter().enumerate() {
            if let Some(schema) = self.schema_for_index(index) {
                ctx.in_scope(PathElement::Index(index), |ctx| ctx.walk(item, schema));
            }
        }

        // `contains` runs over all elements regardless of positional schemas.
        if let Some(contains) = &self.contains {
            let found = items.iter().any(|item| ctx.satisfies(item, contains));
            if !found {
                ctx.fail(FailureReason::ArrayContainsMismatch);
            }
        }
    }
}

impl From<ArrayConstraints> for ValueConstraints {
    fn from(constraints: ArrayConstraints) -> Self {
        ValueConstraints::Array(constraints)
    }
}
