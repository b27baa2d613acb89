//! # Conform
//!
//! A JSON Schema (draft-07 subset) structural validator that reports every
//! failure, not just the first.
//!
//! ## Overview
//!
//! Conform walks an in-memory [`Value`] against a declarative [`Schema`]
//! and returns either success or a [`ValidationError`] holding the complete
//! list of failures, each annotated with the schema path where it occurred.
//! The validator never short-circuits on the first problem, so callers get
//! everything that needs fixing in one pass. Combinator schemas (`allOf`,
//! `anyOf`, `oneOf`, `not`, `if`/`then`/`else`) nest their constituent
//! failures for full diagnosability.
//!
//! ## Core Types
//!
//! - [`Value`]: an in-memory JSON-like datum (integers distinct from floats)
//! - [`Schema`]: a boolean schema or a constraint-bearing schema object
//! - [`Validator`]: the recursive engine with `validate` and `is_valid`
//! - [`ValidationError`]: a non-empty, path-annotated failure list
//! - [`RegexCache`]: memoized pattern compilation, shared per validator
//!
//! ## Example
//!
//! ```rust
//! use conform::{Schema, Validator, Value};
//!
//! let schema = Schema::object()
//!     .property("location", Schema::string().min_length(1).build())
//!     .required(["location"])
//!     .build();
//!
//! let validator = Validator::new();
//!
//! let value = Value::object([("location", Value::from("San Francisco"))]);
//! assert!(validator.validate(&value, &schema).is_ok());
//!
//! let empty = Value::object::<&str, _>([]);
//! let error = validator.validate(&empty, &schema).unwrap_err();
//! assert_eq!(error.len(), 1);
//! ```

pub mod error;
pub mod interop;
pub mod path;
pub mod regex_cache;
pub mod schema;
pub mod validator;
pub mod value;

pub use error::{Failure, FailureReason, ValidationError};
pub use interop::ToJsonSchema;
pub use path::{PathElement, SchemaPath};
pub use regex_cache::RegexCache;
pub use schema::{
    ArrayConstraints, IntegerConstraints, Items, NumberConstraints, ObjectConstraints, Schema,
    SchemaObject, StringConstraints, ValueConstraints,
};
pub use validator::Validator;
pub use value::{Value, ValueType};

/// Type alias for validation results.
pub type ValidationResult = Result<(), ValidationError>;
