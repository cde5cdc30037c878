use std::collections::HashMap;

use clawome_core::BackRef;

use crate::style::ComputedStyle;

/// An index into a `Document`'s node arena. Stable for the lifetime of
/// the document; never reused after removal (this model never removes
/// nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn is_zero_size(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Per-element data: attributes, classes, geometry, and the reserved
/// fields Prepare attaches (back-reference, icon label, clickable flag,
/// switchable-group membership).
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    pub attrs: HashMap<String, String>,
    pub classes: Vec<String>,
    pub rect: Rect,
    pub style: ComputedStyle,
    pub onclick: bool,

    /// Set by Prepare: the element's back-reference identifier.
    pub backref: Option<BackRef>,
    /// Set by Prepare's icon classifier.
    pub icon: Option<String>,
    /// Set by Prepare's click-listener discovery (direct listener or
    /// delegated/propagated clickability).
    pub clickable_flag: bool,
    /// Set by Prepare's switchable-group detection.
    pub switchable: Option<SwitchState>,
    /// `<label for=id>` / wrapping-`<label>` / `aria-labelledby` text
    /// associated with a form control, collected by Walk.
    pub associated_label: Option<String>,
}

impl ElementData {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    Active,
    Inactive,
}

#[derive(Debug, Clone)]
pub enum DomNode {
    Element {
        tag: String,
        data: ElementData,
        parent: Option<NodeId>,
        children: Vec<NodeId>,
    },
    Text {
        content: String,
        parent: Option<NodeId>,
    },
}

impl DomNode {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            DomNode::Element { parent, .. } => *parent,
            DomNode::Text { parent, .. } => *parent,
        }
    }

    pub fn as_element(&self) -> Option<(&str, &ElementData)> {
        match self {
            DomNode::Element { tag, data, .. } => Some((tag.as_str(), data)),
            DomNode::Text { .. } => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            DomNode::Element { data, .. } => Some(data),
            DomNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match self {
            DomNode::Element { children, .. } => children,
            DomNode::Text { .. } => &[],
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            DomNode::Element { tag, .. } => Some(tag.as_str()),
            DomNode::Text { .. } => None,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match self {
            DomNode::Text { content, .. } => Some(content.as_str()),
            DomNode::Element { .. } => None,
        }
    }
}
