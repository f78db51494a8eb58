//! `jsonnode` CLI — inspect and reformat JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Indented debug view of a whole document (stdin → stdout)
//! echo '{"name":"Alice","tags":["a","b"]}' | jsonnode show
//!
//! # Debug view of one node
//! jsonnode show -i memes.json data.memes.0
//!
//! # Print the node at a path as JSON; fail unless it is a string
//! jsonnode get data.memes.0.name -i memes.json --as string
//!
//! # Re-serialize (pretty by default, or --compact)
//! jsonnode fmt -i data.json -o data.min.json --compact
//! ```
//!
//! Paths are dot-separated. A numeric segment indexes into an array; any other
//! segment is an object key. A path that leads nowhere resolves to `NULL`.

mod path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use json_node::Value;
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(name = "jsonnode", version, about = "Inspect and reformat JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an indented debug view of the document or of one node
    Show {
        /// Dot-separated path to the node to show (whole document if omitted)
        path: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the node at PATH as JSON
    Get {
        /// Dot-separated path, e.g. `data.memes.0.name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Fail unless the node is of this type
        #[arg(long = "as", value_enum)]
        as_type: Option<NodeType>,
    },
    /// Decode and re-serialize the document
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit minified JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum NodeType {
    String,
    Integer,
    Float,
    Boolean,
    Array,
    Object,
    Null,
}

impl NodeType {
    fn matches(self, value: &Value) -> bool {
        match self {
            NodeType::String => value.as_string().is_some(),
            NodeType::Integer => value.as_integer().is_some(),
            NodeType::Float => value.as_float().is_some(),
            NodeType::Boolean => value.as_boolean().is_some(),
            NodeType::Array => value.as_array().is_some(),
            NodeType::Object => value.as_object().is_some(),
            NodeType::Null => value.is_null(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            NodeType::String => "string",
            NodeType::Integer => "integer",
            NodeType::Float => "float",
            NodeType::Boolean => "boolean",
            NodeType::Array => "array",
            NodeType::Object => "object",
            NodeType::Null => "null",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { path, input } => {
            let doc = read_document(input.as_deref())?;
            let node = path::resolve(&doc, path.as_deref().unwrap_or(""));
            println!("{}", node.debug_description());
        }
        Commands::Get {
            path,
            input,
            as_type,
        } => {
            let doc = read_document(input.as_deref())?;
            let node = path::resolve(&doc, &path);
            if let Some(expected) = as_type {
                if !expected.matches(node) {
                    anyhow::bail!(
                        "Expected {} at '{}', found {}",
                        expected.name(),
                        path,
                        node.type_name()
                    );
                }
            }
            let mut bytes = node.serialize();
            bytes.push(b'\n');
            write_output(None, &bytes)?;
        }
        Commands::Fmt {
            input,
            output,
            compact,
        } => {
            let doc = read_document(input.as_deref())?;
            let mut bytes = if compact {
                doc.serialize_compact()
            } else {
                doc.serialize()
            };
            bytes.push(b'\n');
            write_output(output.as_deref(), &bytes)?;
        }
    }

    Ok(())
}

fn read_document(path: Option<&str>) -> Result<Value> {
    let bytes = read_input(path)?;
    json_node::decode_slice(&bytes).context("Failed to decode JSON input")
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
