//! Decoder — classifies a dynamic JSON tree into a [`Value`].
//!
//! The mapping from tree node to `Value` variant is a fixed table over
//! [`NodeKind`]:
//!
//! | node                        | value                          |
//! |-----------------------------|--------------------------------|
//! | string                      | `String`                       |
//! | bool                        | `Boolean`                      |
//! | any integer width/sign      | `Integer` (widened to `i64`)   |
//! | `u64` above `i64::MAX`      | `Float`                        |
//! | double                      | `Float`                        |
//! | null                        | `Null`                         |
//! | array                       | `Array` (children recursively) |
//! | object                      | `Object` (values recursively)  |
//! | anything else               | `Null`                         |
//!
//! The last row is deliberate leniency: an unsupported leaf anywhere in the
//! document becomes `Null` in place, keeping array lengths and object keys
//! intact, and the rest of the document still decodes.
//!
//! Only the byte, text, and reader entry points can fail: when the input is
//! not valid JSON, nests deeper than 128 levels, or the reader fails.

use crate::error::Result;
use crate::tree::{DynamicTree, NodeKind};
use crate::value::{Map, Value};
use serde::de::{Deserialize, Deserializer};
use std::io::Read;

/// Classify any dynamic tree node into a `Value`. Never fails.
pub fn decode_tree<T: DynamicTree + ?Sized>(node: &T) -> Value {
    match node.kind() {
        NodeKind::String(s) => Value::String(s.to_owned()),
        NodeKind::Bool(b) => Value::Boolean(b),
        NodeKind::Int(leaf) => match leaf.widen() {
            Some(n) => Value::Integer(n),
            None => Value::Float(leaf.to_f64()),
        },
        NodeKind::Double(f) => Value::Float(f),
        NodeKind::Null => Value::Null,
        NodeKind::Array(items) => Value::Array(items.map(decode_tree).collect()),
        NodeKind::Object(entries) => {
            let mut map = Map::new();
            for (key, child) in entries {
                map.insert(key.to_owned(), decode_tree(child));
            }
            Value::Object(map)
        }
        NodeKind::Unsupported => Value::Null,
    }
}

/// Parse raw JSON bytes and classify the result.
///
/// Any top-level JSON value is accepted, not only objects and arrays.
/// Documents nested more than 128 levels deep are rejected with
/// [`NodeError::Parse`](crate::NodeError::Parse), the same as malformed text.
///
/// # Examples
///
/// ```
/// use json_node::decode_slice;
///
/// let doc = decode_slice(br#"{"people":[{"name":"Ada","age":36}]}"#).unwrap();
/// assert_eq!(doc["people"][0]["name"].as_string(), Some("Ada"));
/// assert_eq!(doc["people"][0]["age"].as_integer(), Some(36));
/// ```
pub fn decode_slice(bytes: &[u8]) -> Result<Value> {
    let tree: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(decode_tree(&tree))
}

/// Parse JSON text and classify the result.
pub fn decode_str(text: &str) -> Result<Value> {
    let tree: serde_json::Value = serde_json::from_str(text)?;
    Ok(decode_tree(&tree))
}

/// Read JSON from `reader` to the end and classify the result.
pub fn decode_reader<R: Read>(reader: R) -> Result<Value> {
    let tree: serde_json::Value = serde_json::from_reader(reader)?;
    Ok(decode_tree(&tree))
}

impl std::str::FromStr for Value {
    type Err = crate::error::NodeError;

    fn from_str(s: &str) -> Result<Value> {
        decode_str(s)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tree = serde_json::Value::deserialize(deserializer)?;
        Ok(decode_tree(&tree))
    }
}
