use std::collections::HashMap;

use crate::HierarchicalId;

/// The per-page table built by Render: hierarchical identifier ->
/// back-reference selector. Used by the action collaborator to turn an
/// agent-supplied identifier into a concrete element selector (the
/// `Resolve` operation in §6).
#[derive(Debug, Clone, Default)]
pub struct NodeMap {
    entries: HashMap<String, String>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: HierarchicalId, selector: impl Into<String>) {
        self.entries.insert(id.to_string(), selector.into());
    }

    /// Pure lookup: returns the selector for `id`, or `None` if `id` is
    /// not present in this map (the "not-found" case of `Resolve`).
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_hits_and_misses() {
        let mut map = NodeMap::new();
        map.insert(HierarchicalId(vec![1, 2]), "#foo");
        assert_eq!(map.resolve("1.2"), Some("#foo"));
        assert_eq!(map.resolve("9.9"), None);
    }
}
