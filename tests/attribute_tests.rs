use xml_query::{Node, attribute_key, extract_attribute, lookup_attribute};

fn mapping(pairs: Vec<(&str, Node)>) -> Node {
    Node::mapping(pairs)
}

fn text(s: &str) -> Node {
    Node::scalar(s)
}

// ============================================================================
// Per-item lookup
// ============================================================================

#[test]
fn test_attribute_key_adds_prefix() {
    assert_eq!(attribute_key("id"), "@id");
}

#[test]
fn test_plain_name_takes_precedence() {
    let item = mapping(vec![("@id", text("prefixed")), ("id", text("plain"))]);
    assert_eq!(lookup_attribute(&item, "id"), Some(&text("plain")));
    assert_eq!(extract_attribute(Some(&item), "id"), Some(text("plain")));
}

#[test]
fn test_prefixed_name_fallback() {
    let item = mapping(vec![("@id", text("1")), ("Status", text("Open"))]);
    assert_eq!(extract_attribute(Some(&item), "id"), Some(text("1")));
}

#[test]
fn test_plain_child_element_counts_as_attribute() {
    let item = mapping(vec![("Status", text("Open"))]);
    assert_eq!(extract_attribute(Some(&item), "Status"), Some(text("Open")));
}

#[test]
fn test_prefixed_query_name_is_looked_up_literally() {
    let item = mapping(vec![("@id", text("1"))]);
    assert_eq!(extract_attribute(Some(&item), "@id"), Some(text("1")));
    assert_eq!(lookup_attribute(&mapping(vec![("id", text("1"))]), "@id"), None);
}

#[test]
fn test_scalar_has_no_attributes() {
    assert_eq!(extract_attribute(Some(&text("1")), "id"), None);
    assert_eq!(extract_attribute(Some(&Node::null()), "id"), None);
}

#[test]
fn test_absent_node_yields_absent() {
    assert_eq!(extract_attribute(None, "id"), None);
}

#[test]
fn test_attribute_value_keeps_its_shape() {
    let item = mapping(vec![("Note", mapping(vec![("#text", text("fragile"))]))]);
    assert_eq!(
        extract_attribute(Some(&item), "Note"),
        Some(mapping(vec![("#text", text("fragile"))]))
    );
}

// ============================================================================
// Sequences and multiplicity
// ============================================================================

#[test]
fn test_sequence_collects_in_order() {
    let seq = Node::sequence([
        mapping(vec![("@id", text("1"))]),
        mapping(vec![("@id", text("2"))]),
        mapping(vec![("@id", text("3"))]),
    ]);
    assert_eq!(
        extract_attribute(Some(&seq), "id"),
        Some(Node::sequence([text("1"), text("2"), text("3")]))
    );
}

#[test]
fn test_sequence_single_hit_is_unwrapped() {
    let seq = Node::sequence([
        mapping(vec![("Status", text("Open"))]),
        mapping(vec![("@id", text("2"))]),
    ]);
    assert_eq!(extract_attribute(Some(&seq), "id"), Some(text("2")));
}

#[test]
fn test_sequence_no_hits_is_absent() {
    let seq = Node::sequence([mapping(vec![("Status", text("Open"))]), text("x")]);
    assert_eq!(extract_attribute(Some(&seq), "id"), None);
    assert_eq!(extract_attribute(Some(&Node::Sequence(vec![])), "id"), None);
}

#[test]
fn test_sequence_mixes_conventions_per_element() {
    let seq = Node::sequence([
        mapping(vec![("id", text("plain"))]),
        mapping(vec![("@id", text("prefixed"))]),
        mapping(vec![("id", text("both-plain")), ("@id", text("both-prefixed"))]),
    ]);
    assert_eq!(
        extract_attribute(Some(&seq), "id"),
        Some(Node::sequence([text("plain"), text("prefixed"), text("both-plain")]))
    );
}

#[test]
fn test_sequence_skips_nested_sequences() {
    let seq = Node::sequence([
        Node::sequence([mapping(vec![("@id", text("hidden"))])]),
        mapping(vec![("@id", text("1"))]),
    ]);
    assert_eq!(extract_attribute(Some(&seq), "id"), Some(text("1")));
}

#[test]
fn test_null_attribute_value_is_kept() {
    let item = mapping(vec![("@ref", Node::null())]);
    assert_eq!(extract_attribute(Some(&item), "ref"), Some(Node::null()));
}
