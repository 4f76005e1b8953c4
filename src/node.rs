use indexmap::IndexMap;

/// Prefix that marks a mapping key as an XML attribute rather than a child element.
pub const ATTRIBUTE_PREFIX: char = '@';

/// A node of a parsed XML document.
///
/// Converters such as `xmltodict` turn an XML document into nested
/// mappings, lists and strings. `Node` is the closed form of that shape:
///
/// - elements become [`Node::Mapping`], attributes keyed with a leading `@`
/// - siblings repeated under the same name become a [`Node::Sequence`]
/// - text content and attribute values become [`Node::Scalar`]
///
/// A sequence holds mappings or scalars, never a bare sequence.
///
/// # Examples
///
/// ```
/// use xml_query::Node;
///
/// let order = Node::mapping([
///     ("@id", Node::scalar("1")),
///     ("Status", Node::scalar("Open")),
/// ]);
///
/// assert_eq!(order.get("Status"), Some(&Node::scalar("Open")));
/// assert_eq!(order.get("Missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Element with named children, in document order
    Mapping(IndexMap<String, Node>),

    /// Siblings that occurred more than once under the same name
    Sequence(Vec<Node>),

    /// Text or attribute value; `None` for an empty element
    Scalar(Option<String>),
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(Some(value.into()))
    }

    pub fn null() -> Self {
        Node::Scalar(None)
    }

    /// Build a mapping from `(name, node)` pairs, keeping their order.
    ///
    /// A repeated name keeps its first position and the last node given for it.
    pub fn mapping<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn sequence(items: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(items.into_iter().collect())
    }

    /// Look up a direct child of a mapping. Sequences and scalars have no named children.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(map) => map.get(key),
            Node::Sequence(_) | Node::Scalar(_) => None,
        }
    }
}

/// Key under which an attribute is stored when it follows the `@` convention.
pub fn attribute_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 1);
    key.push(ATTRIBUTE_PREFIX);
    key.push_str(name);
    key
}

/// Zero, one or many collected items, with the empty case ruled out.
///
/// Both navigation and attribute extraction gather results from a fan-out
/// and then apply the same rule: nothing collected is absence, a single
/// item stands on its own, and several items form a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Selection<T> {
    /// Classify collected items. Returns `None` when `items` is empty.
    pub fn from_items(mut items: Vec<T>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(Selection::One),
            _ => Some(Selection::Many(items)),
        }
    }
}

impl Selection<Node> {
    pub fn into_node(self) -> Node {
        match self {
            Selection::One(node) => node,
            Selection::Many(nodes) => Node::Sequence(nodes),
        }
    }
}

impl Selection<&Node> {
    /// Clone the selected nodes out of the borrowed tree.
    pub fn to_node(&self) -> Node {
        match self {
            Selection::One(node) => (*node).clone(),
            Selection::Many(nodes) => Node::Sequence(nodes.iter().map(|n| (*n).clone()).collect()),
        }
    }
}

/// Collapse collected results: none is absent, one is returned bare, many become a sequence.
///
/// # Examples
///
/// ```
/// use xml_query::{Node, collapse_multiplicity};
///
/// assert_eq!(collapse_multiplicity(vec![]), None);
/// assert_eq!(
///     collapse_multiplicity(vec![Node::scalar("1")]),
///     Some(Node::scalar("1"))
/// );
/// assert_eq!(
///     collapse_multiplicity(vec![Node::scalar("1"), Node::scalar("2")]),
///     Some(Node::sequence([Node::scalar("1"), Node::scalar("2")]))
/// );
/// ```
pub fn collapse_multiplicity(items: Vec<Node>) -> Option<Node> {
    Selection::from_items(items).map(Selection::into_node)
}
