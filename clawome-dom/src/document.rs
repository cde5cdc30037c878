use clawome_core::BackRef;

use crate::events::{EventListenerRegistry, JQueryDelegation};
use crate::node::{DomNode, ElementData, NodeId};
use crate::selector::Selector;
use crate::style::StyleSheet;

/// An in-process document: an arena of elements and text nodes rooted at
/// `body`, plus the stylesheets and event-listener state Prepare reads.
///
/// Shared-state note (§5): `next_backref` and `listeners` are the two
/// pieces of state Prepare mutates; both are confined to the
/// DOM-context side. The node map that the host later publishes lives
/// outside this crate entirely, in `clawome_compress`.
pub struct Document {
    nodes: Vec<DomNode>,
    body: NodeId,
    pub stylesheets: Vec<StyleSheet>,
    pub listeners: EventListenerRegistry,
    pub delegations: Vec<JQueryDelegation>,
    next_backref: u32,
    hover_pointer_selectors: Vec<Selector>,
}

impl Document {
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(DomNode::Element {
            tag: "body".to_string(),
            data: ElementData::default(),
            parent: None,
            children: Vec::new(),
        });
        Self {
            nodes,
            body: NodeId(0),
            stylesheets: Vec::new(),
            listeners: EventListenerRegistry::new(),
            delegations: Vec::new(),
            next_backref: 0,
            hover_pointer_selectors: Vec::new(),
        }
    }

    pub fn set_hover_pointer_selectors(&mut self, selectors: Vec<Selector>) {
        self.hover_pointer_selectors = selectors;
    }

    pub fn hover_pointer_selectors(&self) -> &[Selector] {
        &self.hover_pointer_selectors
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn node(&self, id: NodeId) -> &DomNode {
        &self.nodes[id.0 as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut DomNode {
        &mut self.nodes[id.0 as usize]
    }

    pub fn create_element(&mut self, tag: &str, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(DomNode::Element {
            tag: tag.to_ascii_lowercase(),
            data: ElementData::default(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.attach(parent, id);
        id
    }

    pub fn create_text(&mut self, content: impl Into<String>, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(DomNode::Text {
            content: content.into(),
            parent: Some(parent),
        });
        self.attach(parent, id);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let DomNode::Element { children, .. } = self.node_mut(parent) {
            children.push(child);
        }
    }

    pub fn set_attr(&mut self, id: NodeId, key: &str, value: impl Into<String>) {
        if let Some(data) = self.node_mut(id).as_element_mut() {
            data.attrs.insert(key.to_string(), value.into());
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.node_mut(id).as_element_mut() {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_string());
            }
        }
    }

    pub fn hide(&mut self, id: NodeId) {
        if let Some(data) = self.node_mut(id).as_element_mut() {
            data.style.display = crate::style::Display::None;
        }
    }

    /// All descendant element ids (not including `root`), in document
    /// order. This is what Prepare's every-element passes iterate over.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(root, &mut out);
        out
    }

    fn collect_descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.node(root).children() {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    /// Assigns a fresh back-reference identifier. Mutation of this
    /// counter is confined to Prepare, per §5.
    pub fn next_backref(&mut self) -> BackRef {
        let value = self.next_backref;
        self.next_backref += 1;
        BackRef::new(value)
    }

    pub fn query_selector_all(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| {
                matches!(self.node(id).as_element().map(|(tag, data)| selector.matches(tag, data)), Some(true))
            })
            .collect()
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    /// Raw HTML character count, approximated for stats purposes as the
    /// serialized size of tags, attributes, and text. A real host reads
    /// `document.documentElement.outerHTML.length` instead.
    pub fn approx_raw_html_len(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                DomNode::Text { content, .. } => content.len(),
                DomNode::Element { tag, data, .. } => {
                    let attrs_len: usize = data
                        .attrs
                        .iter()
                        .map(|(k, v)| k.len() + v.len() + 4)
                        .sum();
                    tag.len() * 2 + attrs_len + 5
                }
            })
            .sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backref_counter_is_monotonic() {
        let mut doc = Document::new();
        assert_eq!(doc.next_backref().get(), 0);
        assert_eq!(doc.next_backref().get(), 1);
        assert_eq!(doc.next_backref().get(), 2);
    }

    #[test]
    fn query_selector_all_filters_by_class() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("div", body);
        doc.add_class(a, "row");
        let b = doc.create_element("div", body);
        doc.add_class(b, "other");
        let selector = Selector::parse("div.row");
        assert_eq!(doc.query_selector_all(body, &selector), vec![a]);
    }

    #[test]
    fn descendants_are_in_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("div", body);
        let b = doc.create_element("span", a);
        let c = doc.create_element("p", body);
        assert_eq!(doc.descendants(body), vec![a, b, c]);
    }
}
