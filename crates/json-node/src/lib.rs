//! # json-node
//!
//! An immutable, typed tree for dynamically-shaped JSON.
//!
//! Decode a document once, then read it with accessors that never panic:
//! typed getters return `Option` and only match their exact variant, while
//! `[]` indexing returns `Value::Null` for anything missing, so deep paths
//! chain without intermediate unwrapping.
//!
//! ## Quick start
//!
//! ```rust
//! use json_node::{decode_slice, Value};
//!
//! let doc = decode_slice(br#"{"data":{"memes":[{"name":"One Does Not Simply","width":568}]}}"#).unwrap();
//!
//! assert_eq!(doc["data"]["memes"][0]["name"].as_string(), Some("One Does Not Simply"));
//! assert_eq!(doc["data"]["memes"][0]["width"].as_integer(), Some(568));
//!
//! // Missing paths are Null, never a panic.
//! assert_eq!(doc["data"]["memes"][9]["name"], Value::Null);
//!
//! // Back to bytes.
//! let bytes = doc.serialize_compact();
//! assert_eq!(decode_slice(&bytes).unwrap(), doc);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` enum and typed accessors
//! - [`index`] — `[]` and `get` lookups
//! - [`tree`] — `DynamicTree` seam for parser-produced trees
//! - [`decoder`] — tree/bytes → `Value`
//! - [`encoder`] — `Value` → `serde_json::Value` → bytes
//! - [`format`] — indented debug rendering
//! - [`error`] — decode errors

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod index;
pub mod tree;
pub mod value;

pub use decoder::{decode_reader, decode_slice, decode_str, decode_tree};
pub use encoder::encode;
pub use error::{NodeError, Result};
pub use tree::{DynamicTree, IntLeaf, NodeKind};
pub use value::{Map, Value};
