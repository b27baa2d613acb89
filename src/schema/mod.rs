//! Schema definitions for validation.
//!
//! This module provides the [`Schema`] tagged union and the builders used to
//! assemble constraint trees programmatically. A schema is either a trivial
//! boolean (`true` accepts everything, `false` rejects everything) or a
//! [`SchemaObject`] carrying constraint fields: declared types, `const`,
//! `enum`, the combinators (`not`, `allOf`, `anyOf`, `oneOf`,
//! `if`/`then`/`else`), and at most one kind-specific constraint block.
//!
//! # Example
//!
//! ```rust
//! use conform::{Schema, Validator, Value};
//!
//! let schema = Schema::object()
//!     .property("location", Schema::string().min_length(1).build())
//!     .required(["location"])
//!     .build();
//!
//! let value = Value::object([("location", Value::from("San Francisco"))]);
//! assert!(Validator::shared().is_valid(&value, &schema));
//! ```

mod array;
mod numeric;
mod object;
mod string;

pub use array::{ArrayConstraints, Items};
pub use numeric::{IntegerConstraints, NumberConstraints};
pub use object::ObjectConstraints;
pub use string::StringConstraints;

use crate::value::{Value, ValueType};

/// A declarative constraint tree describing which values are acceptable.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// `true` accepts every value; `false` accepts none.
    Boolean(bool),
    /// A constraint-bearing schema object.
    Object(Box<SchemaObject>),
}

impl Schema {
    /// The schema that accepts every value.
    pub fn always() -> Schema {
        Schema::Boolean(true)
    }

    /// The schema that rejects every value.
    pub fn never() -> Schema {
        Schema::Boolean(false)
    }

    /// Starts an empty schema-object builder with no constraints set.
    pub fn builder() -> SchemaObject {
        SchemaObject::default()
    }

    /// Starts an integer schema builder (declares `type: integer`).
    pub fn integer() -> IntegerConstraints {
        IntegerConstraints::new()
    }

    /// Starts a number schema builder (declares `type: number`).
    pub fn number() -> NumberConstraints {
        NumberConstraints::new()
    }

    /// Starts a string schema builder (declares `type: string`).
    pub fn string() -> StringConstraints {
        StringConstraints::new()
    }

    /// Starts an array schema builder (declares `type: array`).
    pub fn array() -> ArrayConstraints {
        ArrayConstraints::new()
    }

    /// Starts an object schema builder (declares `type: object`).
    pub fn object() -> ObjectConstraints {
        ObjectConstraints::new()
    }

    /// A schema accepting exactly one value.
    pub fn constant(value: impl Into<Value>) -> Schema {
        Schema::builder().constant(value).build()
    }

    /// A schema accepting any member of the given set of values.
    pub fn enumeration<I>(values: I) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Schema::builder().enumeration(values).build()
    }

    /// A schema accepting values that do NOT match the given schema.
    pub fn not(schema: Schema) -> Schema {
        Schema::builder().not(schema).build()
    }

    /// A schema requiring every sub-schema to match.
    pub fn all_of<I: IntoIterator<Item = Schema>>(schemas: I) -> Schema {
        Schema::builder().all_of(schemas).build()
    }

    /// A schema requiring at least one sub-schema to match.
    pub fn any_of<I: IntoIterator<Item = Schema>>(schemas: I) -> Schema {
        Schema::builder().any_of(schemas).build()
    }

    /// A schema requiring exactly one sub-schema to match.
    pub fn one_of<I: IntoIterator<Item = Schema>>(schemas: I) -> Schema {
        Schema::builder().one_of(schemas).build()
    }

    /// A conditional schema: when `condition` matches, `then` must hold,
    /// otherwise `otherwise` must hold. Either branch may be absent.
    pub fn if_then_else(
        condition: Schema,
        then: Option<Schema>,
        otherwise: Option<Schema>,
    ) -> Schema {
        let mut builder = Schema::builder().if_schema(condition);
        if let Some(then) = then {
            builder = builder.then_schema(then);
        }
        if let Some(otherwise) = otherwise {
            builder = builder.else_schema(otherwise);
        }
        builder.build()
    }
}

impl From<SchemaObject> for Schema {
    fn from(object: SchemaObject) -> Self {
        Schema::Object(Box::new(object))
    }
}

impl From<bool> for Schema {
    fn from(accept: bool) -> Self {
        Schema::Boolean(accept)
    }
}

/// Kind-specific constraints; a schema carries at most one branch.
///
/// A branch is consulted only when the incoming value is of the matching
/// kind (integers also consult a `Number` branch, since integers are
/// numbers). A mismatched branch is inert; rejecting wrong kinds is the
/// job of the schema's `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueConstraints {
    /// Constraints applied to integer values.
    Integer(IntegerConstraints),
    /// Constraints applied to numeric values (integers included).
    Number(NumberConstraints),
    /// Constraints applied to string values.
    String(StringConstraints),
    /// Constraints applied to array values.
    Array(ArrayConstraints),
    /// Constraints applied to object values.
    Object(ObjectConstraints),
}

/// The constraint-bearing schema form.
///
/// Every field is optional; an empty `SchemaObject` accepts every value.
/// Built via [`Schema::builder`] or the kind-specific entry points like
/// [`Schema::string`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaObject {
    pub(crate) types: Option<Vec<ValueType>>,
    pub(crate) const_value: Option<Value>,
    pub(crate) enum_values: Option<Vec<Value>>,
    pub(crate) not: Option<Schema>,
    pub(crate) all_of: Option<Vec<Schema>>,
    pub(crate) any_of: Option<Vec<Schema>>,
    pub(crate) one_of: Option<Vec<Schema>>,
    pub(crate) if_schema: Option<Schema>,
    pub(crate) then_schema: Option<Schema>,
    pub(crate) else_schema: Option<Schema>,
    pub(crate) constraints: Option<ValueConstraints>,
}

impl SchemaObject {
    /// Declares the set of accepted value types.
    pub fn types<I: IntoIterator<Item = ValueType>>(mut self, types: I) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    /// Declares a single accepted value type.
    pub fn value_type(self, value_type: ValueType) -> Self {
        self.types([value_type])
    }

    /// Requires the value to equal `value` exactly.
    pub fn constant(mut self, value: impl Into<Value>) -> Self {
        self.const_value = Some(value.into());
        self
    }

    /// Requires the value to be a member of `values`.
    pub fn enumeration<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Requires the value NOT to match `schema`.
    pub fn not(mut self, schema: Schema) -> Self {
        self.not = Some(schema);
        self
    }

    /// Requires every sub-schema to match.
    pub fn all_of<I: IntoIterator<Item = Schema>>(mut self, schemas: I) -> Self {
        self.all_of = Some(schemas.into_iter().collect());
        self
    }

    /// Requires at least one sub-schema to match.
    pub fn any_of<I: IntoIterator<Item = Schema>>(mut self, schemas: I) -> Self {
        self.any_of = Some(schemas.into_iter().collect());
        self
    }

    /// Requires exactly one sub-schema to match.
    pub fn one_of<I: IntoIterator<Item = Schema>>(mut self, schemas: I) -> Self {
        self.one_of = Some(schemas.into_iter().collect());
        self
    }

    /// Sets the `if` condition schema.
    pub fn if_schema(mut self, schema: Schema) -> Self {
        self.if_schema = Some(schema);
        self
    }

    /// Sets the schema applied when the `if` condition matches.
    pub fn then_schema(mut self, schema: Schema) -> Self {
        self.then_schema = Some(schema);
        self
    }

    /// Sets the schema applied when the `if` condition does not match.
    pub fn else_schema(mut self, schema: Schema) -> Self {
        self.else_schema = Some(schema);
        self
    }

    /// Attaches integer constraints.
    pub fn integer(mut self, constraints: IntegerConstraints) -> Self {
        self.constraints = Some(ValueConstraints::Integer(constraints));
        self
    }

    /// Attaches number constraints.
    pub fn number(mut self, constraints: NumberConstraints) -> Self {
        self.constraints = Some(ValueConstraints::Number(constraints));
        self
    }

    /// Attaches string constraints.
    pub fn string(mut self, constraints: StringConstraints) -> Self {
        self.constraints = Some(ValueConstraints::String(constraints));
        self
    }

    /// Attaches array constraints.
    pub fn array(mut self, constraints: ArrayConstraints) -> Self {
        self.constraints = Some(ValueConstraints::Array(constraints));
        self
    }

    /// Attaches object constraints.
    pub fn object(mut self, constraints: ObjectConstraints) -> Self {
        self.constraints = Some(ValueConstraints::Object(constraints));
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Schema {
        self.into()
    }
}
