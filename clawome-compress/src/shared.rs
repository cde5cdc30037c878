use std::sync::Arc;

use clawome_core::NodeMap;
use parking_lot::RwLock;

/// A `NodeMap` a host thread can read from concurrently with the
/// DOM-context thread publishing a fresh one. Per §5, a new extraction
/// is made visible to the action collaborator atomically: readers never
/// observe a map that mixes two extractions, and a failed extraction
/// never replaces the previously published map.
///
/// Grounded on AccessKit's `consumer::Tree`, which wraps its `TreeState`
/// the same way to let a platform adapter thread read the accessibility
/// tree while the host continues mutating it.
#[derive(Clone, Default)]
pub struct SharedNodeMap {
    inner: Arc<RwLock<NodeMap>>,
}

impl SharedNodeMap {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(NodeMap::new())) }
    }

    /// Atomically replaces the published map. Called only after Render
    /// has fully succeeded; a `PipelineError` anywhere upstream must
    /// never reach this call.
    pub fn publish(&self, map: NodeMap) {
        *self.inner.write() = map;
    }

    pub fn resolve(&self, id: &str) -> Option<String> {
        self.inner.read().resolve(id).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
