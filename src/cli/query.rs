//! Execute path queries against JSON input

use std::path::PathBuf;

use super::{CliError, RawOptions, load_json, read_raw};
use crate::{Node, QueryRequest, QueryResult, resolve, to_json, to_json_pretty};

/// Options for the query command
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Dot-separated element path
    pub path: String,
    /// Attribute to extract from the node at `path`
    pub attribute: Option<String>,
    /// Document JSON given inline
    pub input: Option<String>,
    /// Document file, read when `input` is absent
    pub file: Option<PathBuf>,
    /// Pretty-print the result
    pub pretty: bool,
}

/// Rendered outcome of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Rendered JSON of the node found, if any
    pub result: Option<String>,
    /// What was found, or why nothing was
    pub note: String,
    pub found: bool,
}

impl QueryOutcome {
    fn from_result(result: &QueryResult, pretty: bool) -> Self {
        let rendered = result.node().map(|node| {
            if pretty {
                to_json_pretty(node)
            } else {
                to_json(node)
            }
        });

        QueryOutcome {
            result: rendered,
            note: result.note(),
            found: result.is_found(),
        }
    }

    /// `{"result": ..., "note": ...}` with the result kept as rendered text
    pub fn to_envelope(&self) -> serde_json::Value {
        serde_json::json!({
            "result": self.result,
            "note": self.note,
        })
    }
}

/// Load the document named by `options`. A missing file yields `None`.
pub fn load_document(options: &QueryOptions) -> Result<Option<Node>, CliError> {
    let raw = RawOptions {
        input: options.input.clone(),
        file: options.file.clone(),
    };

    read_raw(&raw)?.map(|text| load_json(&text)).transpose()
}

/// Execute a query operation
pub fn execute_query(options: &QueryOptions) -> Result<QueryOutcome, CliError> {
    let document = load_document(options)?;
    let request = QueryRequest::new(&options.path, options.attribute.as_deref());
    let result = resolve(document.as_ref(), &request);

    Ok(QueryOutcome::from_result(&result, options.pretty))
}
