//! The `Extract`/`Resolve` facade (§6) wiring the DOM-context crate
//! (`clawome-dom` + `clawome-walker`) to the host-side crate
//! (`clawome-compress`).
//!
//! Per §7, a `PipelineError` anywhere in the chain fails the whole
//! extraction: callers must not publish `ExtractOutcome::node_map`
//! anywhere a previous extraction's map is still relied upon until this
//! function returns `Ok`.

use clawome_compress::SharedNodeMap;
use clawome_core::{Config, ExtractStats, NodeMap, PipelineError, RenderMode};
use clawome_dom::Document;
use tracing::info;

pub struct ExtractOutcome {
    pub rendered: String,
    pub node_map: NodeMap,
    pub stats: ExtractStats,
}

/// Runs Prepare, Walk, Compress, and Render against `doc` in sequence.
/// `doc` is mutated in place by Prepare (back-references, clone hiding,
/// icon/clickability classification); every later stage is read-only.
pub fn extract(doc: &mut Document, config: &Config, mode: RenderMode) -> Result<ExtractOutcome, PipelineError> {
    let raw_html_chars = doc.approx_raw_html_len();

    let prepare_report = clawome_walker::prepare(doc, config);
    info!(?prepare_report, "prepare complete");

    let walk_outcome = clawome_walker::walk(doc, config);
    let nodes_before_compression = walk_outcome.records.len();

    let compress_outcome = clawome_compress::compress(walk_outcome.records, config);
    let truncated = walk_outcome.truncated || compress_outcome.list_truncated_nodes > 0;

    let (rendered, node_map, stats) = clawome_compress::render(
        &compress_outcome.roots,
        mode,
        config,
        raw_html_chars,
        nodes_before_compression,
        truncated,
    );

    info!(
        rendered_chars = stats.rendered_chars,
        nodes_after_compression = stats.nodes_after_compression,
        truncated,
        "extraction complete"
    );

    Ok(ExtractOutcome { rendered, node_map, stats })
}

/// Convenience wrapper for a host keeping a [`SharedNodeMap`] alive
/// across extractions: runs [`extract`] and only publishes the new map
/// once the whole pipeline has succeeded, so a failed extraction leaves
/// the previous map (and thus still-resolvable identifiers) untouched.
pub fn extract_and_publish(
    doc: &mut Document,
    config: &Config,
    mode: RenderMode,
    shared: &SharedNodeMap,
) -> Result<ExtractOutcome, PipelineError> {
    let outcome = extract(doc, config, mode)?;
    shared.publish(outcome.node_map.clone());
    Ok(outcome)
}

/// The pure `Resolve` operation (§6): looks up `id` in the currently
/// published map without touching the DOM.
pub fn resolve(shared: &SharedNodeMap, id: &str) -> Option<String> {
    shared.resolve(id)
}
