//! Numeric constraint schemas.
//!
//! This module provides [`IntegerConstraints`] and [`NumberConstraints`],
//! the kind-specific constraint blocks for integer and floating-point
//! values: inclusive and exclusive bounds plus `multipleOf`. Each bound is
//! checked independently, so a value outside several bounds reports every
//! violation.

use crate::error::FailureReason;
use crate::schema::{Schema, SchemaObject, ValueConstraints};
use crate::validator::Context;
use crate::value::ValueType;

/// Constraints applied to integer values.
///
/// `multipleOf` uses integer modulus. A `multipleOf` of zero is never
/// satisfied.
///
/// # Example
///
/// ```rust
/// use conform::{Schema, Validator, Value};
///
/// let schema = Schema::integer().minimum(0).multiple_of(2).build();
/// let validator = Validator::new();
///
/// assert!(validator.is_valid(&Value::Integer(6), &schema));
/// assert!(!validator.is_valid(&Value::Integer(5), &schema));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegerConstraints {
    pub(crate) minimum: Option<i64>,
    pub(crate) maximum: Option<i64>,
    pub(crate) exclusive_minimum: Option<i64>,
    pub(crate) exclusive_maximum: Option<i64>,
    pub(crate) multiple_of: Option<i64>,
}

impl IntegerConstraints {
    /// Creates an empty set of integer constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the value to be at least `minimum` (inclusive).
    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Requires the value to be at most `maximum` (inclusive).
    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Requires the value to be strictly greater than `bound`.
    pub fn exclusive_minimum(mut self, bound: i64) -> Self {
        self.exclusive_minimum = Some(bound);
        self
    }

    /// Requires the value to be strictly less than `bound`.
    pub fn exclusive_maximum(mut self, bound: i64) -> Self {
        self.exclusive_maximum = Some(bound);
        self
    }

    /// Requires the value to be a multiple of `divisor`.
    pub fn multiple_of(mut self, divisor: i64) -> Self {
        self.multiple_of = Some(divisor);
        self
    }

    /// Finishes the builder, producing a schema tagged `type: integer`.
    pub fn build(self) -> Schema {
        SchemaObject::default()
            .value_type(ValueType::Integer)
            .integer(self)
            .build()
    }

    pub(crate) fn check(&self, value: i64, ctx: &mut Context<'_>) {
        if let Some(divisor) = self.multiple_of {
            // multipleOf: 0 is never satisfied. checked_rem also covers the
            // i64::MIN % -1 overflow, whose mathematical remainder is 0.
            let satisfied = divisor != 0 && value.checked_rem(divisor).unwrap_or(0) == 0;
            if !satisfied {
                ctx.fail(FailureReason::IntegerNotMultipleOf {
                    multiple_of: divisor,
                });
            }
        }
        if let Some(minimum) = self.minimum {
            if value < minimum {
                ctx.fail(FailureReason::IntegerBelowMinimum {
                    minimum,
                    exclusive: false,
                });
            }
        }
        if let Some(bound) = self.exclusive_minimum {
            if value <= bound {
                ctx.fail(FailureReason::IntegerBelowMinimum {
                    minimum: bound,
                    exclusive: true,
                });
            }
        }
        if let Some(maximum) = self.maximum {
            if value > maximum {
                ctx.fail(FailureReason::IntegerAboveMaximum {
                    maximum,
                    exclusive: false,
                });
            }
        }
        if let Some(bound) = self.exclusive_maximum {
            if value >= bound {
                ctx.fail(FailureReason::IntegerAboveMaximum {
                    maximum: bound,
                    exclusive: true,
                });
            }
        }
    }
}

/// Constraints applied to numeric values.
///
/// Integer values also consult a `Number` constraint block, since integers
/// are numbers. `multipleOf` uses the floating remainder compared to
/// exactly zero, with no epsilon tolerance; fractional divisors can
/// therefore reject values that are mathematically exact multiples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberConstraints {
    pub(crate) minimum: Option<f64>,
    pub(crate) maximum: Option<f64>,
    pub(crate) exclusive_minimum: Option<f64>,
    pub(crate) exclusive_maximum: Option<f64>,
    pub(crate) multiple_of: Option<f64>,
}

impl NumberConstraints {
    /// Creates an empty set of number constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the value to be at least `minimum` (inclusive).
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Requires the value to be at most `maximum` (inclusive).
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Requires the value to be strictly greater than `bound`.
    pub fn exclusive_minimum(mut self, bound: f64) -> Self {
        self.exclusive_minimum = Some(bound);
        self
    }

    /// Requires the value to be strictly less than `bound`.
    pub fn exclusive_maximum(mut self, bound: f64) -> Self {
        self.exclusive_maximum = Some(bound);
        self
    }

    /// Requires the value to be a multiple of `divisor`.
    pub fn multiple_of(mut self, divisor: f64) -> Self {
        self.multiple_of = Some(divisor);
        self
    }

    /// Finishes the builder, producing a schema tagged `type: number`.
    pub fn build(self) -> Schema {
        SchemaObject::default()
            .value_type(ValueType::Number)
            .number(self)
            .build()
    }

    pub(crate) fn check(&self, value: f64, ctx: &mut Context<'_>) {
        if let Some(divisor) = self.multiple_of {
            // multipleOf: 0 is never satisfied; the remainder is compared
            // to exactly zero, no epsilon.
            if divisor == 0.0 || value % divisor != 0.0 {
                ctx.fail(FailureReason::NumberNotMultipleOf {
                    multiple_of: divisor,
                });
            }
        }
        if let Some(minimum) = self.minimum {
            if value < minimum {
                ctx.fail(FailureReason::NumberBelowMinimum {
                    minimum,
                    exclusive: false,
                });
            }
        }
        if let Some(bound) = self.exclusive_minimum {
            if value <= bound {
                ctx.fail(FailureReason::NumberBelowMinimum {
                    minimum: bound,
                    exclusive: true,
                });
            }
        }
        if let Some(maximum) = self.maximum {
            if value > maximum {
                ctx.fail(FailureReason::NumberAboveMaximum {
                    maximum,
                    exclusive: false,
                });
            }
        }
        if let Some(bound) = self.exclusive_maximum {
            if value >= bound {
                ctx.fail(FailureReason::NumberAboveMaximum {
                    maximum: bound,
                    exclusive: true,
                });
            }
        }
    }
}

// Both builders can also be attached without a type tag via
// SchemaObject::integer / SchemaObject::number; ValueConstraints carries
// them either way.
impl From<IntegerConstraints> for ValueConstraints {
    fn from(constraints: IntegerConstraints) -> Self {
        ValueConstraints::Integer(constraints)
    }
}

impl From<NumberConstraints> for ValueConstraints {
    fn from(constraints: NumberConstraints) -> Self {
        ValueConstraints::Number(constraints)
    }
}
