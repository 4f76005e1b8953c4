//! Attribute extraction from navigated nodes.

use crate::node::{Node, Selection, attribute_key};

/// Read attribute `name` from a mapping.
///
/// The plain key wins over the `@`-prefixed key when both exist. Sequences
/// and scalars carry no attributes.
///
/// # Examples
///
/// ```
/// use xml_query::{Node, lookup_attribute};
///
/// let order = Node::mapping([("@id", Node::scalar("1"))]);
/// assert_eq!(lookup_attribute(&order, "id"), Some(&Node::scalar("1")));
/// assert_eq!(lookup_attribute(&Node::scalar("1"), "id"), None);
/// ```
pub fn lookup_attribute<'a>(item: &'a Node, name: &str) -> Option<&'a Node> {
    match item {
        Node::Mapping(map) => map.get(name).or_else(|| map.get(&attribute_key(name))),
        Node::Sequence(_) | Node::Scalar(_) => None,
    }
}

/// Extract attribute `name` from `node`, or from each element when `node` is a sequence.
///
/// Elements without the attribute are skipped. The collected values are
/// collapsed the same way navigation collapses a fan-out: none yields
/// `None`, one value is returned bare, several form a sequence in element
/// order.
///
/// # Examples
///
/// ```
/// use xml_query::{Node, extract_attribute};
///
/// let orders = Node::sequence([
///     Node::mapping([("@id", Node::scalar("1"))]),
///     Node::mapping([("Status", Node::scalar("Open"))]),
///     Node::mapping([("@id", Node::scalar("2"))]),
/// ]);
///
/// assert_eq!(
///     extract_attribute(Some(&orders), "id"),
///     Some(Node::sequence([Node::scalar("1"), Node::scalar("2")]))
/// );
/// assert_eq!(extract_attribute(Some(&orders), "tracking"), None);
/// assert_eq!(extract_attribute(None, "id"), None);
/// ```
pub fn extract_attribute(node: Option<&Node>, name: &str) -> Option<Node> {
    let node = node?;
    let collected: Vec<&Node> = match node {
        Node::Sequence(items) => items
            .iter()
            .filter_map(|item| lookup_attribute(item, name))
            .collect(),
        Node::Mapping(_) | Node::Scalar(_) => lookup_attribute(node, name).into_iter().collect(),
    };

    Selection::from_items(collected).map(|selection| selection.to_node())
}
