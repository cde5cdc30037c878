use clawome_core::{Config, NodeRecord};
use tracing::debug;

use crate::popup::fold_popups;
use crate::simplify::{prune_empty_leaves, simplify};
use crate::tree::CompressedNode;
use crate::truncate::truncate_long_lists;

/// Outcome of the Compress stage: the simplified, truncated tree plus
/// how many nodes the long-list truncation pass dropped (folded into
/// the caller's truncation reporting alongside Walk's own flag).
#[derive(Debug, Default)]
pub struct CompressOutcome {
    pub roots: Vec<CompressedNode>,
    pub list_truncated_nodes: usize,
}

/// Runs the Compress stage (§4.4) against Walk's flat record sequence,
/// in the order the spec lists: flat-to-tree, fixed-point simplify,
/// dialog/popup folding, long-list truncation, a final empty-leaf prune.
pub fn compress(records: Vec<NodeRecord>, config: &Config) -> CompressOutcome {
    let record_count = records.len();
    let roots = crate::tree::flat_to_tree(records);
    let roots = simplify(roots, config);
    let roots = fold_popups(roots, config);
    let (roots, list_truncated_nodes) = truncate_long_lists(roots, config);
    let roots = prune_empty_leaves(roots);
    debug!(record_count, list_truncated_nodes, simplified_roots = roots.len(), "compress stage complete");
    CompressOutcome { roots, list_truncated_nodes }
}
