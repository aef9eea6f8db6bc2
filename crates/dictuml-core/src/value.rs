//! Dynamically-typed input values.
//!
//! This module provides [`Value`], a closed tree of mappings, sequences and
//! scalars that the traversal walks. Mappings keep insertion order, which is
//! the order every emitted record and edge follows.
//!
//! # String Forms
//!
//! Scalars have pinned [`Display`](fmt::Display) forms so diagrams are stable
//! regardless of where the value came from:
//!
//! | Scalar              | Rendered as          |
//! |---------------------|----------------------|
//! | `Text("a b")`       | `a b`                |
//! | `Integer(-3)`       | `-3`                 |
//! | `Float(1.0)`        | `1.0`                |
//! | `Boolean(true)`     | `true`               |
//! | `Null`              | `null`               |
//!
//! # Example
//!
//! ```
//! # use dictuml_core::value::{Mapping, Scalar, Value};
//! let mut mapping = Mapping::new();
//! mapping.insert("name".to_string(), Value::from("dictuml"));
//! mapping.insert("stars".to_string(), Value::from(42_i64));
//!
//! let value = Value::Mapping(mapping);
//! assert_eq!(value.kind(), "mapping");
//! assert_eq!(Scalar::from(2.0).to_string(), "2.0");
//! ```

use std::fmt;

use indexmap::IndexMap;

/// An insertion-ordered mapping from string keys to values.
pub type Mapping = IndexMap<String, Value>;

/// A node of the input tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String keys to values, in insertion order.
    Mapping(Mapping),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// A leaf value.
    Scalar(Scalar),
}

impl Value {
    /// Returns the inner mapping if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns `true` for mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Mapping(_) | Value::Sequence(_))
    }

    /// Names the variant of this value, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Scalar(Scalar::Text(_)) => "text",
            Value::Scalar(Scalar::Number(_)) => "number",
            Value::Scalar(Scalar::Boolean(_)) => "boolean",
            Value::Scalar(Scalar::Null) => "null",
        }
    }

    /// Returns the runtime type name used to label wrapped sequence elements.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "dict",
            Value::Sequence(_) => "list",
            Value::Scalar(scalar) => scalar.type_name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Value::Mapping(_) | Value::Sequence(_) => write!(f, "[object Object]"),
        }
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Boolean(bool),
    Null,
}

impl Scalar {
    /// Returns the runtime type name of this scalar.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Text(_) => "str",
            Scalar::Number(number) => number.type_name(),
            Scalar::Boolean(_) => "bool",
            Scalar::Null => "NoneType",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(number) => fmt::Display::fmt(number, f),
            Scalar::Boolean(true) => f.write_str("true"),
            Scalar::Boolean(false) => f.write_str("false"),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// A numeric scalar.
///
/// Integers that do not fit in `i64` are kept as [`Number::Unsigned`] rather
/// than losing precision through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Returns the runtime type name of this number.
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Integer(_) | Number::Unsigned(_) => "int",
            Number::Float(_) => "float",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Unsigned(n) => write!(f, "{n}"),
            Number::Float(n) => {
                let text = n.to_string();
                // Keep floats distinguishable from integers
                if n.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

impl From<serde_json::Number> for Number {
    fn from(number: serde_json::Number) -> Self {
        if let Some(n) = number.as_i64() {
            Number::Integer(n)
        } else if let Some(n) = number.as_u64() {
            Number::Unsigned(n)
        } else {
            Number::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Boolean(b)),
            serde_json::Value::Number(n) => Value::Scalar(Scalar::Number(n.into())),
            serde_json::Value::String(s) => Value::Scalar(Scalar::Text(s)),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(Scalar::from(text))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Boolean(b))
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(Number::Integer(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(Number::Float(n))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalar_display_is_pinned() {
        assert_eq!(Scalar::from("hello world").to_string(), "hello world");
        assert_eq!(Scalar::from(-7_i64).to_string(), "-7");
        assert_eq!(Scalar::Number(Number::Unsigned(u64::MAX)).to_string(), "18446744073709551615");
        assert_eq!(Scalar::from(1.0).to_string(), "1.0");
        assert_eq!(Scalar::from(2.5).to_string(), "2.5");
        assert_eq!(Scalar::from(-0.125).to_string(), "-0.125");
        assert_eq!(Scalar::Boolean(true).to_string(), "true");
        assert_eq!(Scalar::Boolean(false).to_string(), "false");
        assert_eq!(Scalar::Null.to_string(), "null");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(1_i64).type_name(), "int");
        assert_eq!(Value::Scalar(Scalar::Number(Number::Unsigned(1))).type_name(), "int");
        assert_eq!(Value::from(1.5).type_name(), "float");
        assert_eq!(Value::from("x").type_name(), "str");
        assert_eq!(Value::from(true).type_name(), "bool");
        assert_eq!(Value::Scalar(Scalar::Null).type_name(), "NoneType");
        assert_eq!(Value::Sequence(vec![]).type_name(), "list");
        assert_eq!(Value::Mapping(Mapping::new()).type_name(), "dict");
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Mapping(Mapping::new()).kind(), "mapping");
        assert_eq!(Value::Sequence(vec![]).kind(), "sequence");
        assert_eq!(Value::from("x").kind(), "text");
        assert_eq!(Value::from(3_i64).kind(), "number");
        assert_eq!(Value::from(false).kind(), "boolean");
        assert_eq!(Value::Scalar(Scalar::Null).kind(), "null");
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let json = json!({"zeta": 1, "alpha": 2, "mid": {"b": 1, "a": 2}});
        let value = Value::from(json);

        let mapping = value.as_mapping().expect("object converts to mapping");
        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);

        let nested = mapping["mid"].as_mapping().expect("nested mapping");
        let keys: Vec<&str> = nested.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(
            Value::from(json!(5)),
            Value::Scalar(Scalar::Number(Number::Integer(5)))
        );
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Scalar(Scalar::Number(Number::Unsigned(u64::MAX)))
        );
        assert_eq!(
            Value::from(json!(0.5)),
            Value::Scalar(Scalar::Number(Number::Float(0.5)))
        );
    }

    #[test]
    fn test_from_json_containers() {
        let value = Value::from(json!([1, "two", null, [true]]));
        assert_eq!(
            value,
            Value::Sequence(vec![
                Value::from(1_i64),
                Value::from("two"),
                Value::Scalar(Scalar::Null),
                Value::Sequence(vec![Value::from(true)]),
            ])
        );
    }

    #[test]
    fn test_container_display_is_placeholder() {
        assert_eq!(Value::Sequence(vec![]).to_string(), "[object Object]");
        assert_eq!(Value::Mapping(Mapping::new()).to_string(), "[object Object]");
        assert!(Value::Sequence(vec![]).is_container());
        assert!(!Value::from(1_i64).is_container());
    }
}
