//! Validation failure types.
//!
//! This module provides [`FailureReason`] for the closed taxonomy of ways a
//! value can violate a schema, [`Failure`] pairing a reason with the schema
//! path where it occurred, and [`ValidationError`] for the always-non-empty
//! aggregate returned by a failed validation.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::SchemaPath;
use crate::value::{Value, ValueType};

/// Why a value failed to satisfy a schema node.
///
/// The validator never stops at the first problem, so one validation run can
/// surface many reasons. Combinator variants (`allOf`/`anyOf`/`oneOf`) nest
/// the failures of their constituent branches for full diagnosability.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FailureReason {
    /// The schema is the boolean `false` schema, which rejects everything.
    #[error("schema is false and accepts no value")]
    FalseSchema,

    /// The value's kind is not among the schema's declared types.
    #[error("expected {expected:?}, got {actual}")]
    TypeMismatch {
        /// The type tags the schema accepts.
        expected: Vec<ValueType>,
        /// The value's actual type tag.
        actual: ValueType,
    },

    /// The value is not equal to the schema's `const`.
    #[error("value must equal {expected}")]
    ConstMismatch {
        /// The single value the schema accepts.
        expected: Value,
    },

    /// The value is not a member of the schema's `enum`.
    #[error("value must be one of {allowed:?}")]
    EnumMismatch {
        /// The values the schema accepts.
        allowed: Vec<Value>,
    },

    /// The value matched a schema it must not match.
    #[error("value matches the schema it must not match")]
    MatchesNot,

    /// At least one `allOf` branch rejected the value.
    #[error("value does not satisfy every allOf schema ({} nested failure(s))", failures.len())]
    AllOfMismatch {
        /// All failures from every rejecting branch.
        failures: Vec<Failure>,
    },

    /// No `anyOf` branch accepted the value.
    #[error("value does not satisfy any anyOf schema ({} nested failure(s))", failures.len())]
    AnyOfMismatch {
        /// Failures from every branch tried before giving up.
        failures: Vec<Failure>,
    },

    /// The number of matching `oneOf` branches was not exactly one.
    #[error("value satisfies {matched} oneOf schemas, expected exactly one")]
    OneOfMismatch {
        /// How many branches accepted the value.
        matched: usize,
        /// Failures from every rejecting branch.
        failures: Vec<Failure>,
    },

    /// An integer is not a multiple of the required divisor.
    #[error("integer must be a multiple of {multiple_of}")]
    IntegerNotMultipleOf {
        /// The required divisor.
        multiple_of: i64,
    },

    /// An integer is below the schema's lower bound.
    #[error("integer must be {} {minimum}", bound_word(*exclusive, false))]
    IntegerBelowMinimum {
        /// The bound the value fell below.
        minimum: i64,
        /// Whether the bound itself is excluded.
        exclusive: bool,
    },

    /// An integer is above the schema's upper bound.
    #[error("integer must be {} {maximum}", bound_word(*exclusive, true))]
    IntegerAboveMaximum {
        /// The bound the value exceeded.
        maximum: i64,
        /// Whether the bound itself is excluded.
        exclusive: bool,
    },

    /// A number is not a multiple of the required divisor.
    #[error("number must be a multiple of {multiple_of}")]
    NumberNotMultipleOf {
        /// The required divisor.
        multiple_of: f64,
    },

    /// A number is below the schema's lower bound.
    #[error("number must be {} {minimum}", bound_word(*exclusive, false))]
    NumberBelowMinimum {
        /// The bound the value fell below.
        minimum: f64,
        /// Whether the bound itself is excluded.
        exclusive: bool,
    },

    /// A number is above the schema's upper bound.
    #[error("number must be {} {maximum}", bound_word(*exclusive, true))]
    NumberAboveMaximum {
        /// The bound the value exceeded.
        maximum: f64,
        /// Whether the bound itself is excluded.
        exclusive: bool,
    },

    /// A string is shorter than `minLength` (measured in UTF-8 bytes).
    #[error("string length must be at least {min_length}, got {length}")]
    StringTooShort {
        /// The minimum byte length.
        min_length: usize,
        /// The string's actual byte length.
        length: usize,
    },

    /// A string is longer than `maxLength` (measured in UTF-8 bytes).
    #[error("string length must be at most {max_length}, got {length}")]
    StringTooLong {
        /// The maximum byte length.
        max_length: usize,
        /// The string's actual byte length.
        length: usize,
    },

    /// A string does not match the schema's pattern.
    #[error("string must match pattern {pattern:?}")]
    StringPatternMismatch {
        /// The pattern the string failed to match.
        pattern: String,
    },

    /// A schema pattern failed to compile; the pattern check was skipped.
    #[error("pattern {pattern:?} failed to compile: {error}")]
    PatternCompilationError {
        /// The pattern that did not compile.
        pattern: String,
        /// The compiler's error message.
        error: String,
    },

    /// An array has fewer elements than `minItems`.
    #[error("array must have at least {min_items} items, got {length}")]
    ArrayTooShort {
        /// The minimum element count.
        min_items: usize,
        /// The array's actual length.
        length: usize,
    },

    /// An array has more elements than `maxItems`.
    #[error("array must have at most {max_items} items, got {length}")]
    ArrayTooLong {
        /// The maximum element count.
        max_items: usize,
        /// The array's actual length.
        length: usize,
    },

    /// No element of an array satisfied the `contains` schema.
    #[error("array has no item matching the contains schema")]
    ArrayContainsMismatch,

    /// An array required to hold unique items holds a duplicate.
    #[error("array items must be unique")]
    ArrayItemsNotUnique,

    /// An object has fewer properties than `minProperties`.
    #[error("object must have at least {min_properties} properties, got {count}")]
    ObjectTooFewProperties {
        /// The minimum property count.
        min_properties: usize,
        /// The object's actual property count.
        count: usize,
    },

    /// An object has more properties than `maxProperties`.
    #[error("object must have at most {max_properties} properties, got {count}")]
    ObjectTooManyProperties {
        /// The maximum property count.
        max_properties: usize,
        /// The object's actual property count.
        count: usize,
    },

    /// An object is missing one or more required properties.
    #[error("object is missing required properties {missing:?}")]
    ObjectMissingRequiredProperties {
        /// Every required key absent from the object, in declaration order.
        missing: Vec<String>,
    },
}

fn bound_word(exclusive: bool, upper: bool) -> &'static str {
    match (exclusive, upper) {
        (false, false) => "at least",
        (true, false) => "greater than",
        (false, true) => "at most",
        (true, true) => "less than",
    }
}

/// A single validation failure: a reason tagged with where it occurred.
///
/// # Example
///
/// ```rust
/// use conform::{Failure, FailureReason, SchemaPath};
///
/// let failure = Failure::new(
///     SchemaPath::root().push_property("name"),
///     FailureReason::StringTooShort { min_length: 1, length: 0 },
/// );
/// assert_eq!(failure.path.to_string(), "name");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// The schema path at which the failure occurred.
    pub path: SchemaPath,
    /// Why the value was rejected.
    pub reason: FailureReason,
}

impl Failure {
    /// Creates a new failure at the given path.
    pub fn new(path: SchemaPath, reason: FailureReason) -> Self {
        Self { path, reason }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

impl std::error::Error for Failure {}

/// A non-empty collection of validation failures.
///
/// `ValidationError` wraps a `NonEmptyVec<Failure>` so that a failed
/// validation always carries at least one failure. Failures appear in the
/// order the validator found them, which is deterministic for a given
/// value/schema pair.
///
/// # Combining Errors
///
/// `ValidationError` implements `Semigroup`, allowing failures from multiple
/// validations to be merged:
///
/// ```rust
/// use conform::{Failure, FailureReason, SchemaPath, ValidationError};
/// use stillwater::prelude::*;
///
/// let a = ValidationError::single(Failure::new(
///     SchemaPath::root().push_property("name"),
///     FailureReason::ObjectMissingRequiredProperties { missing: vec!["name".into()] },
/// ));
/// let b = ValidationError::single(Failure::new(
///     SchemaPath::root().push_property("age"),
///     FailureReason::IntegerBelowMinimum { minimum: 0, exclusive: false },
/// ));
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError(NonEmptyVec<Failure>);

impl ValidationError {
    /// Creates a `ValidationError` containing a single failure.
    pub fn single(failure: Failure) -> Self {
        Self(NonEmptyVec::singleton(failure))
    }

    /// Creates a `ValidationError` from a vec of failures.
    ///
    /// Returns `None` if the vec is empty.
    pub fn from_failures(failures: Vec<Failure>) -> Option<Self> {
        NonEmptyVec::from_vec(failures).map(Self)
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained failures.
    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.0.iter()
    }

    /// Returns the first failure.
    pub fn first(&self) -> &Failure {
        self.0.head()
    }

    /// Returns all failures at the given path.
    pub fn at_path(&self, path: &SchemaPath) -> Vec<&Failure> {
        self.0.iter().filter(|f| &f.path == path).collect()
    }

    /// Returns all failures whose reason satisfies the predicate.
    pub fn matching<P>(&self, predicate: P) -> Vec<&Failure>
    where
        P: Fn(&FailureReason) -> bool,
    {
        self.0.iter().filter(|f| predicate(&f.reason)).collect()
    }

    /// Converts this collection into a `Vec<Failure>`.
    pub fn into_vec(self) -> Vec<Failure> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError(self.0.combine(other.0))
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} failure(s):", self.len())?;
        for (i, failure) in self.failures().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl IntoIterator for ValidationError {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

// ValidationError crosses thread boundaries when a shared Validator is used
// from multiple threads; keep these guarantees explicit.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
