//! Error types for decoding JSON text into a [`Value`](crate::Value).

use thiserror::Error;

/// Errors that can occur while decoding raw JSON input.
///
/// Only the byte/text/reader entry points can fail. Classifying an
/// already-parsed tree is total, and encoding never fails.
#[derive(Error, Debug)]
pub enum NodeError {
    /// The input was not syntactically valid JSON, or it nested arrays and
    /// objects more than 128 levels deep (serde_json's recursion limit).
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Reading from the underlying reader failed before parsing completed.
    #[error("I/O error while reading JSON: {0}")]
    Io(#[source] serde_json::Error),
}

impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            NodeError::Io(err)
        } else {
            NodeError::Parse(err)
        }
    }
}

/// Convenience alias used throughout json-node.
pub type Result<T> = std::result::Result<T, NodeError>;
