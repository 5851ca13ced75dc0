//! Static value extraction.
//!
//! Evaluates a domain tree down to a plain value. This is literal-value
//! extraction only — the tree admits nothing computable. An owned enum is
//! used rather than a `serde_json::Value` because `NaN` and `Infinity`
//! are representable values here.

use crate::ast::{Expression, LiteralValue, Program, PropertyKey, Statement};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A plain JSON-dialect value.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<StaticValue>),
    /// Key/value pairs in source order; duplicate keys repeat. Last-wins
    /// (or reject) is the consumer's policy, not this crate's.
    Object(Vec<(String, StaticValue)>),
}

impl Serialize for StaticValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StaticValue::Null => serializer.serialize_unit(),
            StaticValue::Bool(b) => serializer.serialize_bool(*b),
            StaticValue::Number(n) => serializer.serialize_f64(*n),
            StaticValue::String(s) => serializer.serialize_str(s),
            StaticValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            StaticValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Extract the static value of an expression.
pub fn static_value(expression: &Expression) -> StaticValue {
    match expression {
        Expression::Literal(lit) => match &lit.value {
            LiteralValue::Null => StaticValue::Null,
            LiteralValue::Boolean(b) => StaticValue::Bool(*b),
            LiteralValue::Number(n) => StaticValue::Number(*n),
            LiteralValue::String(s) => StaticValue::String(s.clone()),
        },
        Expression::Identifier(ident) => match ident.name.as_str() {
            "NaN" => StaticValue::Number(f64::NAN),
            "Infinity" => StaticValue::Number(f64::INFINITY),
            // `undefined` has no JSON rendering; null is the nearest value.
            _ => StaticValue::Null,
        },
        Expression::Array(array) => {
            StaticValue::Array(array.elements.iter().map(static_value).collect())
        }
        Expression::Object(object) => StaticValue::Object(
            object
                .properties
                .iter()
                .map(|property| {
                    let key = match &property.key {
                        PropertyKey::Literal(lit) => match &lit.value {
                            LiteralValue::String(s) => s.clone(),
                            _ => lit.raw.clone(),
                        },
                        PropertyKey::Identifier(ident) => ident.name.clone(),
                    };
                    (key, static_value(&property.value))
                })
                .collect(),
        ),
    }
}

impl Program {
    /// The static value of the document, if it has a body.
    pub fn static_value(&self) -> Option<StaticValue> {
        let Statement::Expression(stmt) = self.body.first()?;
        Some(static_value(&stmt.expression))
    }
}
