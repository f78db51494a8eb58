//! Encoder — turns a [`Value`] back into a `serde_json::Value` tree and bytes.
//!
//! Encoding is total. Every `Value` variant has a direct counterpart in the
//! serde_json data model, so neither [`encode`] nor the `serialize` methods
//! return a `Result`. The only lossy step is one already taken at decode
//! time: the original integer width and signedness are gone, and integers
//! come back as `i64`.
//!
//! A non-finite `Float` cannot be produced by decoding, but can be composed by
//! hand; it is written as `null`, the same as serde_json does for a bare
//! non-finite `f64`.

use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

/// Convert a `Value` into the equivalent `serde_json::Value`.
///
/// `Null` becomes an explicit JSON `null` (never an omitted entry) and object
/// keys keep their insertion order.
///
/// # Examples
///
/// ```
/// use json_node::{decode_str, encode};
/// use serde_json::json;
///
/// let doc = decode_str(r#"{"a":[1,2.5,null]}"#).unwrap();
/// assert_eq!(encode(&doc), json!({"a": [1, 2.5, null]}));
/// ```
pub fn encode(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Integer(n) => JsonValue::Number(Number::from(*n)),
        Value::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Array(items) => JsonValue::Array(items.iter().map(encode).collect()),
        Value::Object(map) => {
            let mut out = JsonMap::with_capacity(map.len());
            for (key, child) in map {
                out.insert(key.clone(), encode(child));
            }
            JsonValue::Object(out)
        }
    }
}

impl Value {
    /// Serialize to pretty-printed JSON bytes.
    ///
    /// This inherent method takes precedence over [`serde::Serialize::serialize`]
    /// in method-call syntax. To drive a serde `Serializer`, call
    /// `Serialize::serialize(&value, serializer)` instead.
    pub fn serialize(&self) -> Vec<u8> {
        // Writing into a Vec cannot fail, and every Value has string keys and
        // serializable leaves, so serde_json has no error to report here.
        serde_json::to_vec_pretty(self).expect("Value always serializes to JSON")
    }

    /// Serialize to minified JSON bytes.
    pub fn serialize_compact(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("Value always serializes to JSON")
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(_) => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, child) in map {
                    out.serialize_entry(key, child)?;
                }
                out.end()
            }
        }
    }
}
