//! The recursive validation engine.
//!
//! [`Validator`] walks a [`Value`]/[`Schema`] pair and accumulates every
//! failure found into a path-scoped context before returning, so callers
//! get a complete diagnostic instead of one error at a time. Combinators
//! (`not`, `if`/`then`/`else`, `allOf`, `anyOf`, `oneOf`) run their
//! sub-schemas to completion internally and surface a single combinator
//! failure with the constituent failures nested inside it.
//!
//! Validation is synchronous and performs no I/O. A `Validator` can be
//! shared across threads; the only shared mutable state is its
//! [`RegexCache`].

use std::sync::OnceLock;

use crate::error::{Failure, FailureReason, ValidationError};
use crate::path::{PathElement, SchemaPath};
use crate::regex_cache::RegexCache;
use crate::schema::{Schema, SchemaObject, ValueConstraints};
use crate::value::Value;

/// The validation engine.
///
/// Owns a [`RegexCache`] so that every pattern a schema mentions is
/// compiled at most once for the validator's lifetime. The cache is
/// constructor-injected; [`Validator::shared`] offers a process-wide
/// default instance as a thin convenience.
///
/// # Example
///
/// ```rust
/// use conform::{Schema, Validator, Value};
///
/// let validator = Validator::new();
/// let schema = Schema::integer().multiple_of(2).build();
///
/// assert!(validator.is_valid(&Value::Integer(6), &schema));
///
/// let error = validator.validate(&Value::Integer(5), &schema).unwrap_err();
/// assert_eq!(error.len(), 1);
/// ```
#[derive(Default)]
pub struct Validator {
    regex_cache: RegexCache,
}

impl Validator {
    /// Creates a validator with a fresh regex cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator around an existing regex cache.
    pub fn with_cache(regex_cache: RegexCache) -> Self {
        Self { regex_cache }
    }

    /// Returns the process-wide default validator.
    pub fn shared() -> &'static Validator {
        static SHARED: OnceLock<Validator> = OnceLock::new();
        SHARED.get_or_init(Validator::new)
    }

    /// Returns this validator's regex cache.
    pub fn regex_cache(&self) -> &RegexCache {
        &self.regex_cache
    }

    /// Validates `value` against `schema`, collecting every failure.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] holding all failures found during a
    /// full traversal. The failure list is deterministic: repeated calls
    /// with the same pair produce the same failures in the same order.
    pub fn validate(&self, value: &Value, schema: &Schema) -> Result<(), ValidationError> {
        let mut ctx = Context::new(&self.regex_cache);
        ctx.walk(value, schema);
        match ValidationError::from_failures(ctx.failures) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Returns true iff `value` satisfies `schema`.
    pub fn is_valid(&self, value: &Value, schema: &Schema) -> bool {
        self.validate(value, schema).is_ok()
    }
}

/// Mutable traversal state: the current schema path and the failures
/// accumulated so far.
pub(crate) struct Context<'a> {
    cache: &'a RegexCache,
    path: Vec<PathElement>,
    failures: Vec<Failure>,
}

impl<'a> Context<'a> {
    fn new(cache: &'a RegexCache) -> Self {
        Self {
            cache,
            path: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn regex_cache(&self) -> &RegexCache {
        self.cache
    }

    /// Records a failure at the current path.
    pub(crate) fn fail(&mut self, reason: FailureReason) {
        self.failures
            .push(Failure::new(SchemaPath::from(self.path.clone()), reason));
    }

    /// Runs `f` with `element` appended to the path, restoring the path
    /// afterwards whether or not failures occurred.
    pub(crate) fn in_scope<F>(&mut self, element: PathElement, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.path.push(element);
        f(self);
        self.path.pop();
    }

    /// Runs a sub-validation, returning its failures instead of recording
    /// them. The current path still prefixes the returned failures.
    pub(crate) fn probe(&mut self, value: &Value, schema: &Schema) -> Vec<Failure> {
        let saved = std::mem::take(&mut self.failures);
        self.walk(value, schema);
        std::mem::replace(&mut self.failures, saved)
    }

    /// Returns true iff `value` satisfies `schema`, discarding failures.
    pub(crate) fn satisfies(&mut self, value: &Value, schema: &Schema) -> bool {
        self.probe(value, schema).is_empty()
    }

    /// The main recursion: checks `value` against one schema node.
    pub(crate) fn walk(&mut self, value: &Value, schema: &Schema) {
        match schema {
            Schema::Boolean(true) => {}
            Schema::Boolean(false) => self.fail(FailureReason::FalseSchema),
            Schema::Object(object) => self.walk_object(value, object),
        }
    }

    fn walk_object(&mut self, value: &Value, object: &SchemaObject) {
        if let Some(types) = &object.types {
            if !types.iter().any(|t| t.is_compatible(value)) {
                self.fail(FailureReason::TypeMismatch {
                    expected: types.clone(),
                    actual: value.value_type(),
                });
            }
        }

        if let Some(expected) = &object.const_value {
            if value != expected {
                self.fail(FailureReason::ConstMismatch {
                    expected: expected.clone(),
                });
            }
        }

        if let Some(allowed) = &object.enum_values {
            if !allowed.contains(value) {
                self.fail(FailureReason::EnumMismatch {
                    allowed: allowed.clone(),
                });
            }
        }

        // Kind-specific constraints apply only when the value is of the
        // matching kind; the `type` field is the authority on mismatches.
        match (&object.constraints, value) {
            (Some(ValueConstraints::Integer(c)), Value::Integer(n)) => c.check(*n, self),
            // Integers are numbers, so a Number block checks them too.
            (Some(ValueConstraints::Number(c)), Value::Integer(n)) => c.check(*n as f64, self),
            (Some(ValueConstraints::Number(c)), Value::Number(n)) => c.check(*n, self),
            (Some(ValueConstraints::String(c)), Value::String(s)) => c.check(s, self),
            (Some(ValueConstraints::Array(c)), Value::Array(items)) => c.check(items, self),
            (Some(ValueConstraints::Object(c)), Value::Object(entries)) => c.check(entries, self),
            _ => {}
        }

        if let Some(not) = &object.not {
            if self.satisfies(value, not) {
                self.fail(FailureReason::MatchesNot);
            }
        }

        if let Some(condition) = &object.if_schema {
            if self.satisfies(value, condition) {
                if let Some(then) = &object.then_schema {
                    self.in_scope(PathElement::Then, |ctx| ctx.walk(value, then));
                }
            } else if let Some(otherwise) = &object.else_schema {
                self.in_scope(PathElement::Else, |ctx| ctx.walk(value, otherwise));
            }
        }

        if let Some(schemas) = &object.all_of {
            self.check_all_of(value, schemas);
        }
        if let Some(schemas) = &object.any_of {
            self.check_any_of(value, schemas);
        }
        if let Some(schemas) = &object.one_of {
            self.check_one_of(value, schemas);
        }
    }

    /// Every branch must match; failures from every rejecting branch are
    /// aggregated into one `AllOfMismatch`.
    fn check_all_of(&mut self, value: &Value, schemas: &[Schema]) {
        let mut collected = Vec::new();
        for (index, schema) in schemas.iter().enumerate() {
            self.in_scope(PathElement::AllOf(index), |ctx| {
                let branch = ctx.probe(value, schema);
                collected.extend(branch);
            });
        }
        if !collected.is_empty() {
            self.fail(FailureReason::AllOfMismatch {
                failures: collected,
            });
        }
    }

    /// At least one branch must match. Branches are tried in order and the
    /// search stops at the first full match; failures collected up to that
    /// point are discarded on success.
    fn check_any_of(&mut self, value: &Value, schemas: &[Schema]) {
        let mut collected = Vec::new();
        for (index, schema) in schemas.iter().enumerate() {
            let mut branch = Vec::new();
            self.in_scope(PathElement::AnyOf(index), |ctx| {
                branch = ctx.probe(value, schema);
            });
            if branch.is_empty() {
                return;
            }
            collected.extend(branch);
        }
        self.fail(FailureReason::AnyOfMismatch {
            failures: collected,
        });
    }

    /// Exactly one branch must match, so every branch is checked to count
    /// the matches.
    fn check_one_of(&mut self, value: &Value, schemas: &[Schema]) {
        let mut collected = Vec::new();
        let mut matched = 0usize;
        for (index, schema) in schemas.iter().enumerate() {
            let mut branch = Vec::new();
            self.in_scope(PathElement::OneOf(index), |ctx| {
                branch = ctx.probe(value, schema);
            });
            if branch.is_empty() {
                matched += 1;
            } else {
                collected.extend(branch);
            }
        }
        if matched != 1 {
            self.fail(FailureReason::OneOfMismatch {
                matched,
                failures: collected,
            });
        }
    }
}
