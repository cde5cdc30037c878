use thiserror::Error;

/// A pipeline-internal failure: an unexpected error during Prepare,
/// Walk, Compress, or Render. Per §7, any of these fails the extraction
/// as a whole — no partial tree or node map is published, and the
/// previously published node map (if any) is left untouched.
///
/// Resource-limit hits (max-nodes, max-depth) are *not* represented
/// here: they are not errors, just silent truncation (see
/// `clawome_walker::walk`'s `truncated` result flag).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("prepare failed: {0}")]
    Prepare(String),
    #[error("walk failed: {0}")]
    Walk(String),
    #[error("compress failed: {0}")]
    Compress(String),
    #[error("render failed: {0}")]
    Render(String),
}
