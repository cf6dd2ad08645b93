//! The nested value type used for request-body schemas and example payloads.
//!
//! Catalog JSON is parsed with `serde_json` (built with `preserve_order`) and
//! then converted into [`Value`], an explicit tree with one variant per shape
//! the renderer distinguishes. Mappings are a `Vec` of pairs, so insertion
//! order is part of the value itself rather than a property of some map type.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fmt;

/// A nested value: mapping, sequence, text, null, or scalar.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Value {
    /// Key/value pairs in insertion order.
    Mapping(Vec<(String, Value)>),
    Sequence(Vec<Value>),
    Text(String),
    #[default]
    Null,
    Scalar(Scalar),
}

/// Non-text leaf values, rendered unquoted.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Value {
    /// Build a mapping from `(key, value)` pairs, keeping their order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// An empty mapping, the example body of a status entry that omits one.
    pub fn empty_mapping() -> Self {
        Value::Mapping(Vec::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Unquoted text for a table cell: text as-is, containers as compact JSON.
    pub fn to_plain_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Null => "null".to_string(),
            Value::Scalar(scalar) => scalar.to_string(),
            Value::Mapping(_) | Value::Sequence(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Number(n) => Value::Scalar(Scalar::Number(n)),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Null => serializer.serialize_unit(),
            Value::Scalar(Scalar::Number(n)) => n.serialize(serializer),
            Value::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_every_json_shape() {
        let value = Value::from(json!({
            "text": "abc",
            "int": 1,
            "float": 0.5,
            "flag": true,
            "none": null,
            "list": [1, "two"]
        }));
        let Value::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        assert_eq!(entries[0], ("text".to_string(), Value::from("abc")));
        assert_eq!(entries[1], ("int".to_string(), Value::from(1)));
        assert!(matches!(entries[2].1, Value::Scalar(Scalar::Number(_))));
        assert_eq!(entries[3].1, Value::from(true));
        assert!(entries[4].1.is_null());
        assert_eq!(
            entries[5].1,
            Value::Sequence(vec![Value::from(1), Value::from("two")])
        );
    }

    #[test]
    fn json_key_order_survives_conversion() {
        let value = Value::from(json!({"b": 1, "a": 2}));
        let Value::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn deserializes_through_json() {
        let value: Value = serde_json::from_str(r#"{"z": [null], "y": false}"#).unwrap();
        assert_eq!(
            value,
            Value::mapping([
                ("z", Value::Sequence(vec![Value::Null])),
                ("y", Value::from(false)),
            ])
        );
    }

    #[test]
    fn serializes_in_insertion_order() {
        let value = Value::mapping([
            ("message", Value::from("login_success")),
            ("data", Value::mapping([("user_id", Value::from(1))])),
        ]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"message":"login_success","data":{"user_id":1}}"#
        );
    }

    #[test]
    fn float_display_keeps_fraction() {
        let value = Value::from(json!(1.0));
        let Value::Scalar(scalar) = value else {
            panic!("expected scalar");
        };
        assert_eq!(scalar.to_string(), "1.0");
    }

    #[test]
    fn plain_text_of_each_shape() {
        assert_eq!(Value::from("score_desc").to_plain_text(), "score_desc");
        assert_eq!(Value::from(20).to_plain_text(), "20");
        assert_eq!(Value::from(true).to_plain_text(), "true");
        assert_eq!(Value::from(json!(0.5)).to_plain_text(), "0.5");
        assert_eq!(Value::Null.to_plain_text(), "null");
        assert_eq!(
            Value::from(json!({"a": [1, "b"]})).to_plain_text(),
            r#"{"a":[1,"b"]}"#
        );
    }

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
    }
}
