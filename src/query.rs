//! Query resolution: navigate a document, optionally extract an attribute,
//! and report either the node found or why nothing was found.

use std::fmt;

use crate::{attribute::extract_attribute, navigator::navigate, node::Node, path::Path};

/// A single lookup against a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    /// Element names to follow from the root
    pub path: Path,

    /// Attribute to read from the node at `path`, if any
    pub attribute: Option<String>,
}

impl QueryRequest {
    /// Build a request from a dot-separated path.
    ///
    /// An empty attribute name is the same as no attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use xml_query::QueryRequest;
    ///
    /// let request = QueryRequest::new("Orders.Order", Some(""));
    /// assert_eq!(request.path.segments(), ["Orders", "Order"]);
    /// assert_eq!(request.attribute, None);
    /// ```
    pub fn new(path: &str, attribute: Option<&str>) -> Self {
        QueryRequest {
            path: Path::parse(path),
            attribute: attribute
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        }
    }
}

/// Why a query produced no node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    /// No element matched the path, or the walk ran into a scalar
    PathNotFound,

    /// The node exists but none of its items carry the attribute
    AttributeNotFound(String),

    /// There was no document to query
    SourceUnavailable,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absence::PathNotFound => write!(f, "Path not found"),
            Absence::AttributeNotFound(name) => {
                write!(f, "Attribute '{}' not found at path", name)
            }
            Absence::SourceUnavailable => write!(f, "Document not found"),
        }
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// The node at the path, or the attribute value(s) read from it
    Found {
        node: Node,
        attribute: Option<String>,
    },

    /// Nothing to return, with the reason
    Absent(Absence),
}

impl QueryResult {
    pub fn node(&self) -> Option<&Node> {
        match self {
            QueryResult::Found { node, .. } => Some(node),
            QueryResult::Absent(_) => None,
        }
    }

    pub fn into_node(self) -> Option<Node> {
        match self {
            QueryResult::Found { node, .. } => Some(node),
            QueryResult::Absent(_) => None,
        }
    }

    pub fn absence(&self) -> Option<&Absence> {
        match self {
            QueryResult::Found { .. } => None,
            QueryResult::Absent(absence) => Some(absence),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, QueryResult::Found { .. })
    }

    /// Human-readable note shown next to the result
    pub fn note(&self) -> String {
        match self {
            QueryResult::Found {
                attribute: Some(name),
                ..
            } => format!("Attribute '{}'", name),
            QueryResult::Found {
                attribute: None, ..
            } => "OK".to_string(),
            QueryResult::Absent(absence) => absence.to_string(),
        }
    }
}

/// Resolve `request` against `document`.
///
/// A missing document is reported as [`Absence::SourceUnavailable`]. The
/// document is only read, so any number of resolutions may share it.
///
/// # Examples
///
/// ```
/// use xml_query::{Absence, Node, QueryRequest, QueryResult, resolve};
///
/// let doc = Node::mapping([(
///     "Orders",
///     Node::mapping([("Order", Node::mapping([("@id", Node::scalar("1"))]))]),
/// )]);
///
/// let found = resolve(Some(&doc), &QueryRequest::new("Orders.Order", Some("id")));
/// assert_eq!(found.node(), Some(&Node::scalar("1")));
/// assert_eq!(found.note(), "Attribute 'id'");
///
/// let missing = resolve(Some(&doc), &QueryRequest::new("Orders.Shipment", None));
/// assert_eq!(missing, QueryResult::Absent(Absence::PathNotFound));
/// ```
pub fn resolve(document: Option<&Node>, request: &QueryRequest) -> QueryResult {
    let Some(root) = document else {
        return QueryResult::Absent(Absence::SourceUnavailable);
    };

    let Some(node) = navigate(Some(root), request.path.segments()) else {
        return QueryResult::Absent(Absence::PathNotFound);
    };

    match &request.attribute {
        None => QueryResult::Found {
            node,
            attribute: None,
        },
        Some(name) => match extract_attribute(Some(&node), name) {
            Some(value) => QueryResult::Found {
                node: value,
                attribute: Some(name.clone()),
            },
            None => QueryResult::Absent(Absence::AttributeNotFound(name.clone())),
        },
    }
}

/// Shorthand for [`resolve`] with a freshly built [`QueryRequest`].
pub fn execute(document: Option<&Node>, path: &str, attribute: Option<&str>) -> QueryResult {
    resolve(document, &QueryRequest::new(path, attribute))
}
