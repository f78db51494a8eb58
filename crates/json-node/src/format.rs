//! Human-readable debug rendering of a [`Value`].
//!
//! The output is meant for eyes, not parsers: strings are unquoted, `null`
//! shows as `NULL`, and floats always carry a fraction (`5.0`) so they stand
//! apart from integers. Containers put one child per line, indented two
//! spaces per nesting level:
//!
//! ```text
//! {
//!   name: Ada
//!   tags: [
//!     math
//!     engines
//!   ]
//! }
//! ```
//!
//! Object entries appear in insertion order. Two objects that compare equal
//! but were built in a different order render differently.

use crate::value::Value;
use std::fmt::{self, Write};

const INDENT: &str = "  ";

impl Value {
    /// Render the value as an indented, multi-line debug string.
    pub fn debug_description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, 0, f)
    }
}

fn write_indent<W: Write>(depth: usize, out: &mut W) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn write_node<W: Write>(value: &Value, depth: usize, out: &mut W) -> fmt::Result {
    match value {
        Value::Null => out.write_str("NULL"),
        Value::String(s) => out.write_str(s),
        Value::Integer(n) => write!(out, "{n}"),
        Value::Float(f) => write!(out, "{f:?}"),
        Value::Boolean(b) => write!(out, "{b}"),
        Value::Array(items) if items.is_empty() => out.write_str("[]"),
        Value::Array(items) => {
            out.write_str("[\n")?;
            for item in items {
                write_indent(depth + 1, out)?;
                write_node(item, depth + 1, out)?;
                out.write_char('\n')?;
            }
            write_indent(depth, out)?;
            out.write_char(']')
        }
        Value::Object(map) if map.is_empty() => out.write_str("{}"),
        Value::Object(map) => {
            out.write_str("{\n")?;
            for (key, child) in map {
                write_indent(depth + 1, out)?;
                write!(out, "{key}: ")?;
                write_node(child, depth + 1, out)?;
                out.write_char('\n')?;
            }
            write_indent(depth, out)?;
            out.write_char('}')
        }
    }
}
