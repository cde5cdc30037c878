use clawome_dom::{Document, NodeId};

/// Builds a fallback XPath for elements a CSS selector can't pin down
/// uniquely: walks from `id` up to the body, recording each ancestor's
/// tag and its 1-based position among same-tag siblings.
pub fn build_xpath(doc: &Document, id: NodeId) -> String {
    let mut segments = Vec::new();
    let mut current = Some(id);
    while let Some(node_id) = current {
        let Some((tag, _)) = doc.node(node_id).as_element() else {
            break;
        };
        let position = sibling_position(doc, node_id, tag);
        segments.push(format!("{tag}[{position}]"));
        current = doc.parent_of(node_id);
    }
    segments.reverse();
    format!("/{}", segments.join("/"))
}

fn sibling_position(doc: &Document, id: NodeId, tag: &str) -> usize {
    let Some(parent) = doc.parent_of(id) else {
        return 1;
    };
    let mut position = 0;
    for &sibling in doc.node(parent).children() {
        if doc.node(sibling).tag() == Some(tag) {
            position += 1;
        }
        if sibling == id {
            break;
        }
    }
    position.max(1)
}
