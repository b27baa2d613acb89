//! Schema path representation for locating validation failures.
//!
//! This module provides [`SchemaPath`] and [`PathElement`] types that record
//! where in the schema tree a failure occurred: array indexes, object
//! property names and values, and combinator branches.

use std::fmt::{self, Display};

/// One step in a schema path.
///
/// Paths are built from elements that represent container descent (array
/// index, object property) or the combinator branch taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// An array element at the given index.
    Index(usize),
    /// An object key checked against a `propertyNames` schema.
    PropertyName(String),
    /// The value of the named object property.
    PropertyValue(String),
    /// The `then` branch of an `if`/`then`/`else` conditional.
    Then,
    /// The `else` branch of an `if`/`then`/`else` conditional.
    Else,
    /// The `allOf` sub-schema at the given index.
    AllOf(usize),
    /// The `anyOf` sub-schema at the given index.
    AnyOf(usize),
    /// The `oneOf` sub-schema at the given index.
    OneOf(usize),
}

impl Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Index(idx) => write!(f, "[{}]", idx),
            PathElement::PropertyName(key) => write!(f, "propertyNames({:?})", key),
            PathElement::PropertyValue(key) => write!(f, "{}", key),
            PathElement::Then => write!(f, "then"),
            PathElement::Else => write!(f, "else"),
            PathElement::AllOf(idx) => write!(f, "allOf[{}]", idx),
            PathElement::AnyOf(idx) => write!(f, "anyOf[{}]", idx),
            PathElement::OneOf(idx) => write!(f, "oneOf[{}]", idx),
        }
    }
}

/// A path from the schema root to the location of a failure.
///
/// `SchemaPath` renders locations like `users[0].email` or
/// `anyOf[1].count` and provides methods for building paths incrementally.
///
/// # Example
///
/// ```rust
/// use conform::SchemaPath;
///
/// let path = SchemaPath::root()
///     .push_property("users")
///     .push_index(0)
///     .push_property("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SchemaPath {
    elements: Vec<PathElement>,
}

impl SchemaPath {
    /// Creates an empty path representing the schema root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with the given element appended.
    pub fn push(&self, element: PathElement) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element);
        Self { elements }
    }

    /// Returns a new path with a property-value element appended.
    pub fn push_property(&self, key: impl Into<String>) -> Self {
        self.push(PathElement::PropertyValue(key.into()))
    }

    /// Returns a new path with an array-index element appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathElement::Index(index))
    }

    /// Returns true if this is the root path (no elements).
    pub fn is_root(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements in this path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if this path has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the path elements.
    pub fn elements(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter()
    }

    /// Returns the last element, or None if this is root.
    pub fn last(&self) -> Option<&PathElement> {
        self.elements.last()
    }
}

impl From<Vec<PathElement>> for SchemaPath {
    fn from(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }
}

impl Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            // Index elements attach directly; everything else is dot-joined.
            if i > 0 && !matches!(element, PathElement::Index(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}
