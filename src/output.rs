//! JSON rendering of query results.
//!
//! Mappings are written in document order, so a rendered element reads in
//! the same order as the XML it came from. Text is always a JSON string and
//! empty elements render as `null`.
//!
//! - **Compact output** via [`to_json()`]
//! - **Pretty output** via [`to_json_pretty()`] with 2-space indentation
//!
//! # Examples
//!
//! ```
//! use xml_query::Node;
//! use xml_query::output::{to_json, to_json_pretty};
//!
//! let order = Node::mapping([("@id", Node::scalar("1")), ("Note", Node::null())]);
//!
//! assert_eq!(to_json(&order), r#"{"@id":"1","Note":null}"#);
//! assert_eq!(
//!     to_json_pretty(&order),
//!     "{\n  \"@id\": \"1\",\n  \"Note\": null\n}"
//! );
//! ```

use indexmap::IndexMap;

use crate::node::Node;

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, node: &Node) -> String {
        self.print_node(node, 0)
    }

    fn print_node(&self, node: &Node, indent: usize) -> String {
        match node {
            Node::Scalar(None) => "null".to_string(),
            Node::Scalar(Some(s)) => format!("\"{}\"", self.escape_string(s)),
            Node::Sequence(items) => self.print_sequence(items, indent),
            Node::Mapping(map) => self.print_mapping(map, indent),
        }
    }

    fn print_sequence(&self, items: &[Node], indent: usize) -> String {
        if items.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let rendered: Vec<String> = items
                .iter()
                .map(|n| format!("{}{}", self.indent(indent + 1), self.print_node(n, indent + 1)))
                .collect();
            format!("[\n{}\n{}]", rendered.join(",\n"), self.indent(indent))
        } else {
            let rendered: Vec<String> = items.iter().map(|n| self.print_node(n, indent)).collect();
            format!("[{}]", rendered.join(","))
        }
    }

    fn print_mapping(&self, map: &IndexMap<String, Node>, indent: usize) -> String {
        if map.is_empty() {
            return "{}".to_string();
        }

        if self.pretty {
            let rendered: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        self.escape_string(k),
                        self.print_node(v, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", rendered.join(",\n"), self.indent(indent))
        } else {
            let rendered: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("\"{}\":{}", self.escape_string(k), self.print_node(v, indent)))
                .collect();
            format!("{{{}}}", rendered.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
                c => escaped.push(c),
            }
        }
        escaped
    }
}

/// Render a node as compact JSON.
pub fn to_json(node: &Node) -> String {
    JsonPrinter::new(false).print(node)
}

/// Render a node as JSON indented by two spaces per level.
pub fn to_json_pretty(node: &Node) -> String {
    JsonPrinter::new(true).print(node)
}
