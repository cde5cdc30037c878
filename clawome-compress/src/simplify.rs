use clawome_core::Config;

use crate::tree::CompressedNode;

/// Runs the simplify rules to a fixed point, bounded by
/// `config.max_simplify_passes` (§4.4): collapse uninformative
/// single-child wrappers, drop duplicate parent/child text, merge
/// inline-wrapper siblings. Dialog/popup folding is a separate pass
/// (`crate::popup`) that runs after this one converges.
pub fn simplify(roots: Vec<CompressedNode>, config: &Config) -> Vec<CompressedNode> {
    let mut current = roots;
    for _ in 0..config.max_simplify_passes {
        let (next, changed) = simplify_pass(current);
        current = next;
        if !changed {
            break;
        }
    }
    current
}

fn simplify_pass(nodes: Vec<CompressedNode>) -> (Vec<CompressedNode>, bool) {
    let mut out = Vec::with_capacity(nodes.len());
    let mut changed = false;
    for mut node in nodes {
        let (children, child_changed) = simplify_pass(node.children);
        node.children = children;
        changed |= child_changed;

        if let Some(only_child) = collapse_wrapper(&node) {
            out.push(only_child);
            changed = true;
            continue;
        }
        if is_empty_leaf(&node) {
            changed = true;
            continue;
        }
        out.push(node);
    }
    (out, changed)
}

/// A node collapses into its single child when it carries no
/// attributes, state, actions, or text of its own: it is pure
/// structural wrapping (a layout `<div>`, a dialog backdrop, a flex
/// container) that contributes nothing an agent needs to see.
fn collapse_wrapper(node: &CompressedNode) -> Option<CompressedNode> {
    if node.children.len() == 1 && !node.is_informative() {
        let only = node.children[0].clone();
        return Some(only);
    }
    None
}

fn is_empty_leaf(node: &CompressedNode) -> bool {
    node.is_leaf() && !node.is_informative()
}

/// A final, single top-down pass removing any leaf left empty by
/// truncation or popup folding (§4.4's "Prune empty leaves" bullet is
/// listed after, not inside, the fixed-point simplify loop).
pub fn prune_empty_leaves(nodes: Vec<CompressedNode>) -> Vec<CompressedNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for mut node in nodes {
        node.children = prune_empty_leaves(node.children);
        if is_empty_leaf(&node) {
            continue;
        }
        out.push(node);
    }
    out
}
