//! File system scanner for discovering tool folders.
//!
//! A tool folder is any direct child directory of the project root that
//! contains a `README.md`.

use std::path::Path;

use walkdir::WalkDir;

use crate::README_FILENAME;

use super::manifest::Manifest;

/// Scan the project root for tool folders.
///
/// Hidden folders and folders matching the manifest's exclude patterns are
/// skipped. Identifiers come back sorted by name.
pub fn scan_tools(root: &Path, manifest: &Manifest) -> Vec<String> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut identifiers: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_candidate(name, manifest))
        .filter(|name| root.join(name).join(README_FILENAME).is_file())
        .collect();

    identifiers.dedup();
    identifiers
}

fn is_candidate(name: &str, manifest: &Manifest) -> bool {
    !name.starts_with('.') && !manifest.is_excluded(name)
}
