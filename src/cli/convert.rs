//! JSON to Node conversion
//!
//! Documents arrive as the JSON an XML-to-dict converter emits: objects for
//! elements, arrays for repeated siblings, strings for text, `@`-prefixed
//! keys for attributes.

use super::CliError;
use crate::Node;

/// Parse JSON text into a document tree
pub fn load_json(text: &str) -> Result<Node, CliError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    json_to_node(value)
}

/// Convert serde_json::Value to Node
///
/// Numbers keep their source text and booleans become `true`/`false`, since
/// XML carries only text.
/// An array directly inside another array is rejected: repeated siblings never
/// nest that way in a converted XML tree.
pub fn json_to_node(v: serde_json::Value) -> Result<Node, CliError> {
    match v {
        serde_json::Value::Null => Ok(Node::null()),
        serde_json::Value::Bool(b) => Ok(Node::scalar(b.to_string())),
        serde_json::Value::Number(n) => Ok(Node::scalar(n.to_string())),
        serde_json::Value::String(s) => Ok(Node::scalar(s)),
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|item| match item {
                serde_json::Value::Array(_) => Err(CliError::Shape(
                    "array nested directly inside an array".to_string(),
                )),
                item => json_to_node(item),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Sequence),
        serde_json::Value::Object(obj) => obj
            .into_iter()
            .map(|(k, v)| json_to_node(v).map(|node| (k, node)))
            .collect::<Result<_, _>>()
            .map(Node::Mapping),
    }
}
