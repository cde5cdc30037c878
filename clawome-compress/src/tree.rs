use clawome_core::{HierarchicalId, NodeRecord};

/// A node of the tree Compress builds out of Walk's flat record
/// sequence. Exists only inside this crate: neither `clawome-walker`
/// (which only knows flat records) nor a caller (which only sees
/// rendered text and a `NodeMap`) ever handles one directly.
#[derive(Debug, Clone)]
pub struct CompressedNode {
    pub record: NodeRecord,
    pub children: Vec<CompressedNode>,
}

impl CompressedNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_informative(&self) -> bool {
        self.record.is_informative() || self.record.has_actions() || !self.record.text.is_empty()
    }
}

/// Rebuilds the tree `record.depth` implies: a record at depth N is a
/// child of the nearest preceding record at depth N-1. Walk's pre-order
/// emission guarantees this reconstruction is unambiguous.
///
/// A node is attached to its parent, or — if the stack is empty once
/// it's popped off — pushed onto `roots` immediately. `roots` is built
/// incrementally alongside `stack` rather than recovered from `stack`
/// afterwards, so a completed depth-0 subtree is never dropped just
/// because a later depth-0 sibling follows it.
pub fn flat_to_tree(records: Vec<NodeRecord>) -> Vec<CompressedNode> {
    let mut roots: Vec<CompressedNode> = Vec::new();
    let mut stack: Vec<CompressedNode> = Vec::new();
    for record in records {
        let depth = record.depth as usize;
        while stack.len() > depth {
            let finished = stack.pop().expect("stack non-empty by loop condition");
            attach_or_push(&mut stack, &mut roots, finished);
        }
        stack.push(CompressedNode { record, children: Vec::new() });
    }
    while let Some(node) = stack.pop() {
        attach_or_push(&mut stack, &mut roots, node);
    }
    roots
}

fn attach_or_push(stack: &mut [CompressedNode], roots: &mut Vec<CompressedNode>, node: CompressedNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else {
        roots.push(node);
    }
}

/// Assigns final hierarchical identifiers by walking the compressed
/// forest depth-first, left-to-right, numbering children 1-based within
/// each parent. This is the one point in the pipeline where
/// `HierarchicalId`s come into existence (§3).
pub fn tree_to_flat(roots: &[CompressedNode]) -> Vec<(HierarchicalId, &NodeRecord)> {
    let mut out = Vec::new();
    for (position, root) in roots.iter().enumerate() {
        walk_assign(root, HierarchicalId::root().child(position as u32 + 1), &mut out);
    }
    out
}

fn walk_assign<'a>(node: &'a CompressedNode, id: HierarchicalId, out: &mut Vec<(HierarchicalId, &'a NodeRecord)>) {
    out.push((id.clone(), &node.record));
    for (position, child) in node.children.iter().enumerate() {
        walk_assign(child, id.child(position as u32 + 1), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawome_core::{ActionSet, BackRef, StateMap};

    fn record(idx: u32, depth: u32, tag: &str) -> NodeRecord {
        NodeRecord {
            idx,
            depth,
            tag: tag.to_string(),
            attrs: String::new(),
            text: String::new(),
            label: String::new(),
            actions: ActionSet::empty(),
            state: StateMap::new(),
            selector: format!("[data-clawome-ref=\"{idx}\"]"),
            xpath: String::new(),
            inlined: false,
            backref: BackRef::new(idx),
        }
    }

    #[test]
    fn rebuilds_parent_child_relationships_from_depth() {
        let records = vec![
            record(1, 0, "div"),
            record(2, 1, "span"),
            record(3, 1, "span"),
            record(4, 0, "div"),
        ];
        let roots = flat_to_tree(records);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].children.len(), 2);
        assert!(roots[1].is_leaf());
    }

    #[test]
    fn hierarchical_ids_are_one_based_and_nested() {
        let records = vec![record(1, 0, "div"), record(2, 1, "span"), record(3, 1, "span")];
        let roots = flat_to_tree(records);
        let flat = tree_to_flat(&roots);
        let ids: Vec<String> = flat.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, vec!["1", "1.1", "1.2"]);
    }
}
