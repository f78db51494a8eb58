//! The dynamic tree seam between a generic JSON parser and the decoder.
//!
//! A tree producer describes each of its nodes as a [`NodeKind`]. Numeric
//! leaves carry an explicit [`IntLeaf`] subtype, and the decoder maps each
//! kind to a `Value` variant with a fixed table.
//!
//! `serde_json::Value` implements [`DynamicTree`] out of the box.

use serde_json::Value as JsonValue;

/// Declared width and signedness of an integer leaf.
///
/// The decoder widens every variant to `i64`; the subtype only exists so that
/// producers with narrower integer types can report them faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntLeaf {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl IntLeaf {
    /// Widen to `i64`. Returns `None` only for a `U64` above `i64::MAX`.
    pub fn widen(self) -> Option<i64> {
        match self {
            IntLeaf::I8(n) => Some(i64::from(n)),
            IntLeaf::I16(n) => Some(i64::from(n)),
            IntLeaf::I32(n) => Some(i64::from(n)),
            IntLeaf::I64(n) => Some(n),
            IntLeaf::U8(n) => Some(i64::from(n)),
            IntLeaf::U16(n) => Some(i64::from(n)),
            IntLeaf::U32(n) => Some(i64::from(n)),
            IntLeaf::U64(n) => i64::try_from(n).ok(),
        }
    }

    /// Nearest `f64` to the integer.
    pub fn to_f64(self) -> f64 {
        match self {
            IntLeaf::I8(n) => f64::from(n),
            IntLeaf::I16(n) => f64::from(n),
            IntLeaf::I32(n) => f64::from(n),
            IntLeaf::I64(n) => n as f64,
            IntLeaf::U8(n) => f64::from(n),
            IntLeaf::U16(n) => f64::from(n),
            IntLeaf::U32(n) => f64::from(n),
            IntLeaf::U64(n) => n as f64,
        }
    }
}

/// Borrowed view of one node of a dynamic tree.
pub enum NodeKind<'a, T: ?Sized + 'a> {
    String(&'a str),
    Bool(bool),
    Int(IntLeaf),
    Double(f64),
    Null,
    Array(Box<dyn Iterator<Item = &'a T> + 'a>),
    Object(Box<dyn Iterator<Item = (&'a str, &'a T)> + 'a>),
    /// A leaf shape the decoder has no mapping for (e.g. a producer's
    /// arbitrary-precision decimal). Decodes to `Null`.
    Unsupported,
}

/// A node of a loosely-typed tree produced by some JSON parser.
pub trait DynamicTree {
    fn kind(&self) -> NodeKind<'_, Self>;
}

impl DynamicTree for JsonValue {
    fn kind(&self) -> NodeKind<'_, Self> {
        match self {
            JsonValue::Null => NodeKind::Null,
            JsonValue::Bool(b) => NodeKind::Bool(*b),
            JsonValue::String(s) => NodeKind::String(s),
            // serde_json stores integers as i64 or u64. Anything that does not
            // fit i64 exceeds integer precision and is reported as a double.
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    NodeKind::Int(IntLeaf::I64(i))
                } else if let Some(u) = n.as_u64() {
                    NodeKind::Double(u as f64)
                } else if let Some(f) = n.as_f64() {
                    NodeKind::Double(f)
                } else {
                    NodeKind::Unsupported
                }
            }
            JsonValue::Array(items) => NodeKind::Array(Box::new(items.iter())),
            JsonValue::Object(map) => {
                NodeKind::Object(Box::new(map.iter().map(|(k, v)| (k.as_str(), v))))
            }
        }
    }
}
