//! Loading tool records into an ordered catalog.
//!
//! Every exclusion probe and README fetch is started at once and awaited
//! together. Results are joined back by position, so the catalog keeps the
//! identifier order no matter which fetch finishes first. A tool whose
//! README cannot be fetched is left out; the rest still load.

mod cache;

use std::collections::HashSet;

use futures::future::join_all;

use crate::discovery::DocumentSource;
use crate::error::Result;
use crate::parser::parse_tool;
use crate::types::{excluded_marker_path, readme_path, ToolRecord};

pub use cache::ToolCache;

/// Ordered records ready for rendering.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    /// Loaded records in identifier order.
    pub records: Vec<ToolRecord>,
    /// Identifiers skipped because of an exclusion marker.
    pub excluded: Vec<String>,
    /// Identifiers whose README could not be fetched.
    pub unavailable: Vec<String>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&ToolRecord> {
        self.records.iter().find(|r| r.identifier == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolRecord> {
        self.records.iter()
    }
}

/// Load records for `identifiers` from `source`, reusing `cache`.
///
/// Themes are assigned by position in the returned catalog, so cached
/// documents pick up the hue of wherever they land this time.
pub async fn load_catalog<S>(identifiers: &[String], source: &S, cache: &mut ToolCache) -> Catalog
where
    S: DocumentSource + ?Sized,
{
    let mut seen = HashSet::new();
    let identifiers: Vec<&String> = identifiers
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .collect();

    let probes = join_all(identifiers.iter().map(|id| is_excluded(source, id))).await;

    let mut catalog = Catalog::default();
    let mut included: Vec<&String> = Vec::new();
    for (id, excluded) in identifiers.into_iter().zip(probes) {
        if excluded {
            tracing::debug!(identifier = %id, "excluded by marker");
            catalog.excluded.push(id.clone());
        } else {
            included.push(id);
        }
    }

    let cached: Vec<bool> = included.iter().map(|id| cache.contains(id)).collect();
    let fetches = join_all(included.iter().zip(&cached).map(|(id, &hit)| async move {
        if hit {
            None
        } else {
            Some(fetch_readme(source, id).await)
        }
    }))
    .await;

    for (id, fetched) in included.into_iter().zip(fetches) {
        let parsed = match fetched {
            None => cache.get(id).cloned(),
            Some(Ok(text)) => Some(cache.insert(parse_tool(id, &text)).clone()),
            Some(Err(e)) => {
                tracing::debug!(identifier = %id, error = %e, "dropping tool");
                catalog.unavailable.push(id.clone());
                None
            }
        };

        if let Some(parsed) = parsed {
            let position = catalog.records.len();
            catalog.records.push(ToolRecord::new(parsed, position));
        }
    }

    tracing::info!(
        loaded = catalog.records.len(),
        excluded = catalog.excluded.len(),
        unavailable = catalog.unavailable.len(),
        "catalog loaded"
    );

    catalog
}

async fn fetch_readme<S: DocumentSource + ?Sized>(source: &S, identifier: &str) -> Result<String> {
    source.fetch_text(&readme_path(identifier)).await
}

/// Best-effort exclusion probe; a failed probe counts as not excluded.
async fn is_excluded<S: DocumentSource + ?Sized>(source: &S, identifier: &str) -> bool {
    match source.exists(&excluded_marker_path(identifier)).await {
        Ok(present) => present,
        Err(e) => {
            tracing::debug!(identifier, error = %e, "exclusion probe failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::MemorySource;
    use crate::error::ShowcaseError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_missing_document_is_dropped() {
        let source = MemorySource::new().with("a/README.md", "# A Tool\n> Purpose\ntext\n> \n- f1\n- f2\n");
        let mut cache = ToolCache::new();

        let catalog = load_catalog(&ids(&["a", "b"]), &source, &mut cache).await;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records[0].identifier, "a");
        assert_eq!(catalog.records[0].features, vec!["f1", "f2"]);
        assert_eq!(catalog.unavailable, vec!["b"]);
        assert!(!cache.contains("b"));
    }

    #[tokio::test]
    async fn test_excluded_marker_skips_tool() {
        let source = MemorySource::new()
            .with("a/README.md", "# A")
            .with("b/README.md", "# B")
            .with("b/.excluded", "")
            .with("c/README.md", "# C");
        let mut cache = ToolCache::new();

        let catalog = load_catalog(&ids(&["a", "b", "c"]), &source, &mut cache).await;

        let names: Vec<_> = catalog.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(catalog.excluded, vec!["b"]);
        // Themes follow position among included tools.
        assert_eq!(catalog.records[1].theme.hue, "green");
    }

    #[tokio::test]
    async fn test_cache_is_written_once() {
        let mut cache = ToolCache::new();
        let first = MemorySource::new().with("a/README.md", "# Original");
        let second = MemorySource::new().with("a/README.md", "# Changed");

        load_catalog(&ids(&["a"]), &first, &mut cache).await;
        let catalog = load_catalog(&ids(&["a"]), &second, &mut cache).await;

        assert_eq!(catalog.records[0].display_name, "Original");
    }

    #[tokio::test]
    async fn test_duplicate_identifiers_load_once() {
        let source = MemorySource::new().with("a/README.md", "# A");
        let mut cache = ToolCache::new();

        let catalog = load_catalog(&ids(&["a", "a"]), &source, &mut cache).await;

        assert_eq!(catalog.len(), 1);
    }

    /// Answers slower for earlier identifiers so completion order is reversed.
    struct SlowFirst {
        inner: MemorySource,
        order: Vec<String>,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl DocumentSource for SlowFirst {
        async fn fetch_text(&self, path: &str) -> crate::error::Result<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let rank = self
                .order
                .iter()
                .position(|id| path.starts_with(id.as_str()))
                .unwrap_or(0);
            let delay = (self.order.len() - rank) as u64 * 10;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.inner.fetch_text(path).await
        }

        async fn exists(&self, _path: &str) -> crate::error::Result<bool> {
            Err(ShowcaseError::Build {
                message: "probe unsupported".to_string(),
                help: None,
            })
        }
    }

    #[tokio::test]
    async fn test_order_follows_identifiers_not_completion() {
        let order = ids(&["one", "two", "three"]);
        let source = SlowFirst {
            inner: MemorySource::new()
                .with("one/README.md", "# One")
                .with("two/README.md", "# Two")
                .with("three/README.md", "# Three"),
            order: order.clone(),
            fetches: AtomicUsize::new(0),
        };
        let mut cache = ToolCache::new();

        let catalog = load_catalog(&order, &source, &mut cache).await;

        let names: Vec<_> = catalog.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
        // Failed probes count as "not excluded".
        assert!(catalog.excluded.is_empty());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cached_tools_are_not_refetched() {
        let source = SlowFirst {
            inner: MemorySource::new().with("a/README.md", "# A"),
            order: ids(&["a"]),
            fetches: AtomicUsize::new(0),
        };
        let mut cache = ToolCache::new();

        load_catalog(&ids(&["a"]), &source, &mut cache).await;
        load_catalog(&ids(&["a"]), &source, &mut cache).await;

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cached_tool_takes_theme_from_new_position() {
        let source = MemorySource::new()
            .with("a/README.md", "# A")
            .with("b/README.md", "# B");
        let mut cache = ToolCache::new();

        load_catalog(&ids(&["b"]), &source, &mut cache).await;
        let catalog = load_catalog(&ids(&["a", "b"]), &source, &mut cache).await;

        let hues: Vec<_> = catalog.iter().map(|r| r.theme.hue).collect();
        assert_eq!(hues, vec!["blue", "green"]);
    }

    #[tokio::test]
    async fn test_unavailable_tool_leaves_no_theme_gap() {
        let source = MemorySource::new()
            .with("a/README.md", "# A")
            .with("c/README.md", "# C");
        let mut cache = ToolCache::new();

        let catalog = load_catalog(&ids(&["a", "b", "c"]), &source, &mut cache).await;

        let hues: Vec<_> = catalog.iter().map(|r| r.theme.hue).collect();
        assert_eq!(hues, vec!["blue", "green"]);
    }

    #[tokio::test]
    async fn test_everything_missing_gives_empty_catalog() {
        let source = MemorySource::new();
        let mut cache = ToolCache::new();

        let catalog = load_catalog(&ids(&["x", "y"]), &source, &mut cache).await;

        assert!(catalog.is_empty());
        assert_eq!(catalog.unavailable, vec!["x", "y"]);
    }
}
