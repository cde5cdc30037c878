use clawome_core::{ActionSet, BackRef, Config, NodeRecord, StateMap};

use crate::tree::CompressedNode;

/// Collapses long runs of structurally identical siblings (the same
/// tag, repeated `list_truncate_threshold` times or more, e.g. search
/// results or feed items) down to the first `list_truncate_keep`,
/// followed by a single synthetic marker node recording how many were
/// dropped. Applied recursively; never touches a run with fewer members
/// than the threshold.
pub fn truncate_long_lists(nodes: Vec<CompressedNode>, config: &Config) -> (Vec<CompressedNode>, usize) {
    let mut dropped_total = 0;
    let mut out = Vec::with_capacity(nodes.len());
    let mut index = 0;
    while index < nodes.len() {
        let tag = nodes[index].record.tag.clone();
        let mut run_end = index + 1;
        while run_end < nodes.len() && nodes[run_end].record.tag == tag {
            run_end += 1;
        }
        let run_len = run_end - index;
        if run_len >= config.list_truncate_threshold {
            for node in &nodes[index..index + config.list_truncate_keep] {
                out.push(node.clone());
            }
            let dropped = run_len - config.list_truncate_keep;
            out.push(marker_node(dropped, &tag));
            dropped_total += dropped;
        } else {
            out.extend_from_slice(&nodes[index..run_end]);
        }
        index = run_end;
    }

    for node in &mut out {
        let (children, nested_dropped) = truncate_long_lists(std::mem::take(&mut node.children), config);
        node.children = children;
        dropped_total += nested_dropped;
    }

    (out, dropped_total)
}

fn marker_node(dropped: usize, tag: &str) -> CompressedNode {
    let record = NodeRecord {
        idx: 0,
        depth: 0,
        tag: "…".to_string(),
        attrs: String::new(),
        text: format!("{dropped} more <{tag}> omitted"),
        label: String::new(),
        actions: ActionSet::empty(),
        state: StateMap::new(),
        selector: String::new(),
        xpath: String::new(),
        inlined: false,
        backref: BackRef::new(0),
    };
    CompressedNode { record, children: Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::flat_to_tree;

    fn record(idx: u32, tag: &str) -> NodeRecord {
        NodeRecord {
            idx,
            depth: 0,
            tag: tag.to_string(),
            attrs: String::new(),
            text: format!("item {idx}"),
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
    fn long_run_is_truncated_with_a_marker() {
        let records: Vec<_> = (1..=12).map(|i| record(i, "li")).collect();
        let roots = flat_to_tree(records);
        let mut config = Config::default();
        config.list_truncate_threshold = 10;
        config.list_truncate_keep = 5;
        let (truncated, dropped) = truncate_long_lists(roots, &config);
        assert_eq!(truncated.len(), 6);
        assert_eq!(dropped, 7);
        assert_eq!(truncated.last().unwrap().record.tag, "…");
    }

    #[test]
    fn short_run_is_left_alone() {
        let records: Vec<_> = (1..=3).map(|i| record(i, "li")).collect();
        let roots = flat_to_tree(records);
        let config = Config::default();
        let (truncated, dropped) = truncate_long_lists(roots, &config);
        assert_eq!(truncated.len(), 3);
        assert_eq!(dropped, 0);
    }
}
