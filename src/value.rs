//! The JSON-like value domain model.
//!
//! This module provides [`Value`], a closed tagged union over every datum the
//! validator can inspect, and [`ValueType`], the type tags a schema's `type`
//! keyword can name. Unlike `serde_json::Value`, integers and floating-point
//! numbers are distinct variants, which is what lets a schema's `integer`
//! constraints apply only to actual integers.

use std::fmt::{self, Display};

use indexmap::IndexMap;

/// An in-memory JSON-like datum.
///
/// Equality is structural: two values are equal iff they have the same
/// variant and equal contents. Object key order is irrelevant for equality
/// (but preserved for iteration, so validation output is deterministic).
///
/// # Example
///
/// ```rust
/// use conform::Value;
///
/// let v = Value::from(vec![Value::from(1), Value::from("two")]);
/// assert_eq!(v, Value::Array(vec![Value::Integer(1), Value::String("two".into())]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer. Distinct from [`Value::Number`].
    Integer(i64),
    /// A floating-point number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A string-keyed map of values. Keys are unique; insertion order is
    /// preserved for iteration but does not affect equality.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Returns the type tag for this value's variant.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Builds an object value from key/value pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::Value;
    ///
    /// let v = Value::object([("name", Value::from("Alice")), ("age", Value::from(30))]);
    /// assert_eq!(v.value_type(), conform::ValueType::Object);
    /// ```
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds an array value from an iterator of values.
    pub fn array<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Array(items.into_iter().collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// The type tags a schema's `type` keyword can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Accepts `null`.
    Null,
    /// Accepts booleans.
    Boolean,
    /// Accepts integers only.
    Integer,
    /// Accepts any number, including integers.
    Number,
    /// Accepts strings.
    String,
    /// Accepts arrays.
    Array,
    /// Accepts objects.
    Object,
}

impl ValueType {
    /// Returns true if a value of the given variant satisfies this type tag.
    ///
    /// Integer values satisfy both the `Integer` and `Number` tags, since
    /// integers are numbers. A floating-point value does not satisfy
    /// `Integer`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::{Value, ValueType};
    ///
    /// assert!(ValueType::Number.is_compatible(&Value::Integer(3)));
    /// assert!(!ValueType::Integer.is_compatible(&Value::Number(3.5)));
    /// ```
    pub fn is_compatible(&self, value: &Value) -> bool {
        match self {
            ValueType::Number => matches!(value, Value::Integer(_) | Value::Number(_)),
            other => *other == value.value_type(),
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        };
        write!(f, "{}", name)
    }
}
