//! Conversions between the validator's domain model and `serde_json`.
//!
//! Decoding JSON text is a collaborator's responsibility; this module is the
//! bridge. `serde_json::Value` converts losslessly into [`Value`] (integers
//! stay integers), and schemas export to a draft-07 JSON Schema document via
//! [`ToJsonSchema`].

use serde_json::{json, Map};

use crate::schema::{
    ArrayConstraints, IntegerConstraints, Items, NumberConstraints, ObjectConstraints, Schema,
    SchemaObject, StringConstraints, ValueConstraints,
};
use crate::value::{Value, ValueType};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    // u64 beyond i64::MAX or a float; both land as Number.
                    Value::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Integer(n) => json!(n),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// Trait for exporting schema types as JSON Schema documents (draft-07).
pub trait ToJsonSchema {
    /// Converts this schema to its JSON Schema representation.
    fn to_json_schema(&self) -> serde_json::Value;
}

impl ToJsonSchema for Schema {
    fn to_json_schema(&self) -> serde_json::Value {
        match self {
            Schema::Boolean(accept) => json!(accept),
            Schema::Object(object) => object.to_json_schema(),
        }
    }
}

fn type_name(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::Null => "null",
        ValueType::Boolean => "boolean",
        ValueType::Integer => "integer",
        ValueType::Number => "number",
        ValueType::String => "string",
        ValueType::Array => "array",
        ValueType::Object => "object",
    }
}

impl ToJsonSchema for SchemaObject {
    fn to_json_schema(&self) -> serde_json::Value {
        let mut doc = Map::new();

        if let Some(types) = &self.types {
            let rendered = if types.len() == 1 {
                json!(type_name(types[0]))
            } else {
                serde_json::Value::Array(types.iter().map(|t| json!(type_name(*t))).collect())
            };
            doc.insert("type".into(), rendered);
        }
        if let Some(constant) = &self.const_value {
            doc.insert("const".into(), constant.clone().into());
        }
        if let Some(allowed) = &self.enum_values {
            doc.insert(
                "enum".into(),
                serde_json::Value::Array(allowed.iter().cloned().map(Into::into).collect()),
            );
        }

        match &self.constraints {
            Some(ValueConstraints::Integer(c)) => c.extend_json_schema(&mut doc),
            Some(ValueConstraints::Number(c)) => c.extend_json_schema(&mut doc),
            Some(ValueConstraints::String(c)) => c.extend_json_schema(&mut doc),
            Some(ValueConstraints::Array(c)) => c.extend_json_schema(&mut doc),
            Some(ValueConstraints::Object(c)) => c.extend_json_schema(&mut doc),
            None => {}
        }

        if let Some(not) = &self.not {
            doc.insert("not".into(), not.to_json_schema());
        }
        if let Some(condition) = &self.if_schema {
            doc.insert("if".into(), condition.to_json_schema());
        }
        if let Some(then) = &self.then_schema {
            doc.insert("then".into(), then.to_json_schema());
        }
        if let Some(otherwise) = &self.else_schema {
            doc.insert("else".into(), otherwise.to_json_schema());
        }
        for (keyword, schemas) in [
            ("allOf", &self.all_of),
            ("anyOf", &self.any_of),
            ("oneOf", &self.one_of),
        ] {
            if let Some(schemas) = schemas {
                doc.insert(
                    keyword.into(),
                    serde_json::Value::Array(
                        schemas.iter().map(ToJsonSchema::to_json_schema).collect(),
                    ),
                );
            }
        }

        serde_json::Value::Object(doc)
    }
}

impl IntegerConstraints {
    fn extend_json_schema(&self, doc: &mut Map<String, serde_json::Value>) {
        if let Some(n) = self.minimum {
            doc.insert("minimum".into(), json!(n));
        }
        if let Some(n) = self.maximum {
            doc.insert("maximum".into(), json!(n));
        }
        if let Some(n) = self.exclusive_minimum {
            doc.insert("exclusiveMinimum".into(), json!(n));
        }
        if let Some(n) = self.exclusive_maximum {
            doc.insert("exclusiveMaximum".into(), json!(n));
        }
        if let Some(n) = self.multiple_of {
            doc.insert("multipleOf".into(), json!(n));
        }
    }
}

impl NumberConstraints {
    fn extend_json_schema(&self, doc: &mut Map<String, serde_json::Value>) {
        if let Some(n) = self.minimum {
            doc.insert("minimum".into(), json!(n));
        }
        if let Some(n) = self.maximum {
            doc.insert("maximum".into(), json!(n));
        }
        if let Some(n) = self.exclusive_minimum {
            doc.insert("exclusiveMinimum".into(), json!(n));
        }
        if let Some(n) = self.exclusive_maximum {
            doc.insert("exclusiveMaximum".into(), json!(n));
        }
        if let Some(n) = self.multiple_of {
            doc.insert("multipleOf".into(), json!(n));
        }
    }
}

impl StringConstraints {
    fn extend_json_schema(&self, doc: &mut Map<String, serde_json::Value>) {
        if let Some(n) = self.min_length {
            doc.insert("minLength".into(), json!(n));
        }
        if let Some(n) = self.max_length {
            doc.insert("maxLength".into(), json!(n));
        }
        if let Some(p) = &self.pattern {
            doc.insert("pattern".into(), json!(p));
        }
    }
}

impl ArrayConstraints {
    fn extend_json_schema(&self, doc: &mut Map<String, serde_json::Value>) {
        if let Some(n) = self.min_items {
            doc.insert("minItems".into(), json!(n));
        }
        if let Some(n) = self.max_items {
            doc.insert("maxItems".into(), json!(n));
        }
        if self.unique_items {
            doc.insert("uniqueItems".into(), json!(true));
        }
        match &self.items {
            Some(Items::Uniform(schema)) => {
                doc.insert("items".into(), schema.to_json_schema());
            }
            Some(Items::Positional(list)) => {
                doc.insert(
                    "items".into(),
                    serde_json::Value::Array(
                        list.iter().map(ToJsonSchema::to_json_schema).collect(),
                    ),
                );
            }
            None => {}
        }
        if let Some(schema) = &self.additional_items {
            doc.insert("additionalItems".into(), schema.to_json_schema());
        }
        if let Some(schema) = &self.contains {
            doc.insert("contains".into(), schema.to_json_schema());
        }
    }
}

impl ObjectConstraints {
    fn extend_json_schema(&self, doc: &mut Map<String, serde_json::Value>) {
        if let Some(n) = self.min_properties {
            doc.insert("minProperties".into(), json!(n));
        }
        if let Some(n) = self.max_properties {
            doc.insert("maxProperties".into(), json!(n));
        }
        if !self.properties.is_empty() {
            let mut properties = Map::new();
            for (key, schema) in &self.properties {
                properties.insert(key.clone(), schema.to_json_schema());
            }
            doc.insert("properties".into(), serde_json::Value::Object(properties));
        }
        if !self.pattern_properties.is_empty() {
            let mut patterns = Map::new();
            for (pattern, schema) in &self.pattern_properties {
                patterns.insert(pattern.clone(), schema.to_json_schema());
            }
            doc.insert(
                "patternProperties".into(),
                serde_json::Value::Object(patterns),
            );
        }
        if let Some(schema) = &self.additional_properties {
            doc.insert("additionalProperties".into(), schema.to_json_schema());
        }
        if !self.required.is_empty() {
            doc.insert("required".into(), json!(self.required));
        }
        if let Some(schema) = &self.property_names {
            doc.insert("propertyNames".into(), schema.to_json_schema());
        }
    }
}
