//! Path navigation over parsed documents.
//!
//! XML-derived trees do not say up front whether an element occurs once or
//! many times: a single occurrence is a bare mapping or scalar, repeated
//! siblings are a [`Node::Sequence`]. Navigation hides that difference by
//! fanning the next segment out over every element of a sequence and then
//! collapsing what it collected (see [`Selection`]). The rule is applied at
//! every segment, not only the last one.

use crate::{
    node::{Node, Selection},
    path::Path,
};

/// Resolve the node reached from `root` by following `segments`.
///
/// Returns `None` when the path does not exist: a segment matched nothing
/// along the fan-out, or the walk tried to descend into a scalar. An empty
/// segment list returns `root` itself, and an absent root stays absent.
///
/// # Examples
///
/// ```
/// use xml_query::{Node, navigate};
///
/// let root = Node::mapping([(
///     "Orders",
///     Node::mapping([(
///         "Order",
///         Node::sequence([
///             Node::mapping([("@id", Node::scalar("1")), ("Status", Node::scalar("Open"))]),
///             Node::mapping([("@id", Node::scalar("2")), ("Status", Node::scalar("Closed"))]),
///         ]),
///     )]),
/// )]);
///
/// let statuses = navigate(Some(&root), &["Orders", "Order", "Status"]);
/// assert_eq!(
///     statuses,
///     Some(Node::sequence([Node::scalar("Open"), Node::scalar("Closed")]))
/// );
///
/// assert_eq!(navigate(Some(&root), &["Orders", "Shipment"]), None);
/// ```
pub fn navigate<S: AsRef<str>>(root: Option<&Node>, segments: &[S]) -> Option<Node> {
    let mut current = Selection::One(root?);

    for segment in segments {
        current = step(current, segment.as_ref())?;
    }

    Some(current.to_node())
}

/// Resolve a dot-separated path, see [`Path::parse`] for how it is split.
pub fn navigate_path(root: Option<&Node>, path: &str) -> Option<Node> {
    navigate(root, Path::parse(path).segments())
}

fn step<'a>(current: Selection<&'a Node>, segment: &str) -> Option<Selection<&'a Node>> {
    match current {
        Selection::One(Node::Mapping(map)) => map.get(segment).map(Selection::One),
        Selection::One(Node::Sequence(items)) => fan_out(items.iter(), segment),
        Selection::One(Node::Scalar(_)) => None,
        Selection::Many(items) => fan_out(items.into_iter(), segment),
    }
}

/// Collect `item[segment]` from every mapping item, in order.
///
/// Items that are not mappings, or lack the segment, contribute nothing.
fn fan_out<'a>(
    items: impl Iterator<Item = &'a Node>,
    segment: &str,
) -> Option<Selection<&'a Node>> {
    let collected = items
        .filter_map(|item| match item {
            Node::Mapping(map) => map.get(segment),
            Node::Sequence(_) | Node::Scalar(_) => None,
        })
        .collect();

    Selection::from_items(collected)
}
