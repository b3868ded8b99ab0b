//! Document retrieval.
//!
//! The pipeline never touches the file system directly; it asks a
//! [`DocumentSource`] for text by relative path (`scraper/README.md`) and
//! probes for exclusion markers (`scraper/.excluded`).

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{Result, ShowcaseError};

/// Fetches documents by relative path.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the text at `path`.
    ///
    /// A missing document is [`ShowcaseError::DocumentUnavailable`].
    async fn fetch_text(&self, path: &str) -> Result<String>;

    /// Check whether anything exists at `path`.
    async fn exists(&self, path: &str) -> Result<bool>;
}

/// Documents read from a directory tree.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentSource for DirSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        tokio::fs::read_to_string(&full).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShowcaseError::DocumentUnavailable {
                path: path.to_string(),
            },
            _ => ShowcaseError::Io {
                path: full.clone(),
                message: format!("Failed to read document: {}", e),
            },
        })
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let full = self.root.join(path);
        tokio::fs::try_exists(&full)
            .await
            .map_err(|e| ShowcaseError::Io {
                path: full.clone(),
                message: format!("Failed to probe: {}", e),
            })
    }
}

/// Documents held in memory, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document (builder style).
    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ShowcaseError::DocumentUnavailable {
                path: path.to_string(),
            })
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.documents.contains_key(path))
    }
}
