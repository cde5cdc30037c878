use clawome_core::{Config, ExtractStats, HierarchicalId, NodeMap, NodeRecord, RenderMode};

use crate::tree::{tree_to_flat, CompressedNode};

/// Renders a compressed tree into the flat textual grammar, its
/// accompanying `NodeMap`, and the stats an extraction reports (§6).
/// `raw_html_chars`/`nodes_before_compression` are supplied by the
/// caller, who is the only party that saw the pre-compression state.
pub fn render(
    roots: &[CompressedNode],
    mode: RenderMode,
    config: &Config,
    raw_html_chars: usize,
    nodes_before_compression: usize,
    truncated: bool,
) -> (String, NodeMap, ExtractStats) {
    let flat = tree_to_flat(roots);

    let mut node_map = NodeMap::new();
    let mut lines = Vec::with_capacity(flat.len());
    for (id, record) in &flat {
        node_map.insert(id.clone(), record.selector.clone());
        lines.push(render_line(id, record, mode, config));
    }
    let rendered = lines.join("\n");

    let stats = ExtractStats {
        raw_html_chars,
        rendered_chars: rendered.chars().count(),
        nodes_before_compression,
        nodes_after_compression: flat.len(),
        truncated,
    };

    (rendered, node_map, stats)
}

/// Text length on a non-interactive node in full mode is capped at this
/// many characters regardless of `Config` (§4.5's grammar is fixed, not
/// configurable — only lite mode's thresholds are).
const FULL_TEXT_MAX_CHARS: usize = 120;

/// `[hid] tag(attrs) [action]... [state]...: text` (§4.5/§6). This line
/// shape is compatibility-critical: agents parse it, so every part's
/// presence/absence and ordering here must stay stable across releases.
fn render_line(id: &HierarchicalId, record: &NodeRecord, mode: RenderMode, config: &Config) -> String {
    let indent = "  ".repeat(id.depth().saturating_sub(1));
    let mut line = format!("{indent}[{id}] {}", record.tag);
    if !record.attrs.is_empty() {
        line.push('(');
        line.push_str(&record.attrs);
        line.push(')');
    }

    for marker in &record.actions.markers() {
        line.push_str(" [");
        line.push_str(marker);
        line.push(']');
    }

    let state_markers = record.state.render_markers();
    if !state_markers.is_empty() {
        line.push(' ');
        line.push_str(&state_markers);
    }

    let text = rendered_text(record, mode, config);
    if !text.is_empty() {
        line.push_str(": ");
        line.push_str(&text);
    }

    line
}

/// Full mode caps non-interactive text at a fixed length with an
/// ellipsis; lite mode caps it harder, per `config`, and says how much
/// it dropped. Interactive nodes are never truncated in either mode
/// (§8 invariant: truncation never costs an interactive node its label).
fn rendered_text(record: &NodeRecord, mode: RenderMode, config: &Config) -> String {
    if record.has_actions() {
        return record.text.clone();
    }
    let chars: Vec<char> = record.text.chars().collect();
    match mode {
        RenderMode::Full => {
            if chars.len() <= FULL_TEXT_MAX_CHARS {
                record.text.clone()
            } else {
                let head: String = chars[..FULL_TEXT_MAX_CHARS].iter().collect();
                format!("{head}…")
            }
        }
        RenderMode::Lite => {
            if chars.len() <= config.lite_text_max {
                record.text.clone()
            } else {
                let head: String = chars[..config.lite_text_head].iter().collect();
                let omitted = chars.len() - config.lite_text_head;
                format!("{head}…({omitted} chars omitted)")
            }
        }
    }
}
