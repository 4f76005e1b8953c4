//! CLI support for xml-query
//!
//! Loads documents, runs queries and renders outcomes for the `xmlq`
//! binary. Kept in the library so other tools can embed the same behavior.

mod convert;
mod query;
mod raw;

pub use convert::{json_to_node, load_json};
pub use query::{QueryOptions, QueryOutcome, execute_query, load_document};
pub use raw::{RawOptions, read_raw};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// Document does not have the shape of a converted XML tree
    Shape(String),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Shape(msg) => write!(f, "Unsupported document shape: {}", msg),
            CliError::NoInput => write!(
                f,
                "No input provided. Use --input, --file or pipe JSON to stdin."
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
