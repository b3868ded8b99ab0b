//! Per-session document cache.

use std::collections::HashMap;

use crate::parser::ParsedTool;

/// Parsed documents keyed by identifier.
///
/// Each identifier is written at most once; later inserts for the same
/// identifier are ignored. Dropping the cache is the only way to re-read a
/// document. Entries carry no theme: that depends on where the tool lands
/// in a given list.
#[derive(Debug, Default)]
pub struct ToolCache {
    tools: HashMap<String, ParsedTool>,
}

impl ToolCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<&ParsedTool> {
        self.tools.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.tools.contains_key(identifier)
    }

    /// Insert a parsed document unless one is already cached; returns the cached one.
    pub fn insert(&mut self, tool: ParsedTool) -> &ParsedTool {
        self.tools.entry(tool.identifier.clone()).or_insert(tool)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
