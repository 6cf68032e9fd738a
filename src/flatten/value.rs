use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A fully materialized input tree.
///
/// The set of kinds is closed and matched exhaustively wherever a `Value`
/// is inspected, so adding a kind is a compile-checked decision. Mapping
/// entries keep insertion order; output stability depends on it.
///
/// `Bytes` is the one kind the flattener refuses. JSON input can never
/// produce it, but callers assembling trees by hand (say, from a binary
/// format with a blob scalar) can, and they get a typed error instead of a
/// made-up rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
    Bytes(Vec<u8>),
}

impl Value {
    /// Kind descriptor used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Bytes(_) => "bytes",
        }
    }

    /// True for the terminal kinds that produce leaf records.
    /// Note `Bool` and `Number` are separate cases; a boolean is never a number.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_)
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_mapping_order() {
        let value = Value::from(json!({"zebra": 1, "apple": 2, "mango": 3}));

        let Value::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::Bool(true).kind_name(), "boolean");
        assert_eq!(Value::from(json!(1.5)).kind_name(), "number");
        assert_eq!(Value::Text("x".into()).kind_name(), "text");
        assert_eq!(Value::from(json!([])).kind_name(), "sequence");
        assert_eq!(Value::from(json!({})).kind_name(), "mapping");
        assert_eq!(Value::Bytes(vec![0xff]).kind_name(), "bytes");
    }

    #[test]
    fn test_bool_is_not_number() {
        assert!(Value::Bool(true).is_scalar());
        assert_ne!(Value::Bool(true), Value::from(json!(1)));
    }

    #[test]
    fn test_serialize_round_trip() {
        let value = Value::from(json!({"a": [1, null, "two"], "b": true}));

        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_deserialize_keeps_key_order() {
        let back: Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();

        let Value::Mapping(entries) = back else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
