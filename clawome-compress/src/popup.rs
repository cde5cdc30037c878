use clawome_core::Config;

use crate::tree::CompressedNode;

/// Replaces every dialog/modal/popup subtree with a one-line summary
/// (§4.4 "Collapse popups"): the container's own text plus every
/// non-interactive descendant's text, capped, with any interactive
/// descendant hoisted back out as a direct child of the summary so it
/// stays reachable.
///
/// Detection is tag- and role-based (`<dialog>`, `role="dialog"`,
/// `role="alertdialog"`) rather than class-keyword, because by this
/// stage a node's raw class list no longer exists — only its already
/// surfaced `attrs` string does, and `class` is not one of the attrs
/// `clawome-walker` surfaces.
pub fn fold_popups(nodes: Vec<CompressedNode>, config: &Config) -> Vec<CompressedNode> {
    nodes.into_iter().map(|node| fold_node(node, config)).collect()
}

fn fold_node(mut node: CompressedNode, config: &Config) -> CompressedNode {
    node.children = node.children.into_iter().map(|child| fold_node(child, config)).collect();
    if is_popup_root(&node) {
        fold_popup_root(node, config)
    } else {
        node
    }
}

fn is_popup_root(node: &CompressedNode) -> bool {
    node.record.tag == "dialog"
        || node.record.attrs.contains("role=\"dialog\"")
        || node.record.attrs.contains("role=\"alertdialog\"")
}

fn fold_popup_root(node: CompressedNode, config: &Config) -> CompressedNode {
    let mut text_parts = vec![node.record.text.clone()];
    let mut hoisted = Vec::new();
    collect_summary_content(node.children, &mut text_parts, &mut hoisted);

    let joined = text_parts.into_iter().filter(|t| !t.is_empty()).collect::<Vec<_>>().join(" ");
    let summary = cap_text(&joined, config.max_text_len);

    let mut record = node.record;
    record.text = summary.clone();
    record.label = summary;
    CompressedNode { record, children: hoisted }
}

/// Walks `children`, collecting non-interactive text into `text_parts`
/// and pulling any actionable subtree out whole into `hoisted`, so an
/// already-hoisted subtree's own descendants are not revisited.
fn collect_summary_content(children: Vec<CompressedNode>, text_parts: &mut Vec<String>, hoisted: &mut Vec<CompressedNode>) {
    for child in children {
        if child.record.has_actions() {
            hoisted.push(child);
        } else {
            text_parts.push(child.record.text.clone());
            collect_summary_content(child.children, text_parts, hoisted);
        }
    }
}

fn cap_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::flat_to_tree;
    use clawome_core::{ActionSet, BackRef, NodeRecord, StateMap};

    fn record(idx: u32, depth: u32, tag: &str, text: &str, actions: ActionSet) -> NodeRecord {
        NodeRecord {
            idx,
            depth,
            tag: tag.to_string(),
            attrs: String::new(),
            text: text.to_string(),
            label: String::new(),
            actions,
            state: StateMap::new(),
            selector: format!("[data-clawome-ref=\"{idx}\"]"),
            xpath: String::new(),
            inlined: false,
            backref: BackRef::new(idx),
        }
    }

    #[test]
    fn dialog_collapses_to_one_summary_with_hoisted_button() {
        let records = vec![
            record(1, 0, "dialog", "", ActionSet::empty()),
            record(2, 1, "p", "Are you sure?", ActionSet::empty()),
            record(3, 1, "button", "Confirm", ActionSet::CLICK),
        ];
        let roots = flat_to_tree(records);
        let config = Config::default();
        let folded = fold_popups(roots, &config);
        assert_eq!(folded.len(), 1);
        assert_eq!(folded[0].record.tag, "dialog");
        assert!(folded[0].record.text.contains("Are you sure?"));
        assert_eq!(folded[0].children.len(), 1);
        assert_eq!(folded[0].children[0].record.tag, "button");
    }

    #[test]
    fn non_dialog_subtree_is_left_alone() {
        let records = vec![record(1, 0, "div", "", ActionSet::empty()), record(2, 1, "p", "Hello", ActionSet::empty())];
        let roots = flat_to_tree(records);
        let config = Config::default();
        let folded = fold_popups(roots, &config);
        assert_eq!(folded[0].record.tag, "div");
        assert_eq!(folded[0].children.len(), 1);
    }
}
