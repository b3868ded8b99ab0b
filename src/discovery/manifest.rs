//! Project manifest (showcase.yaml) parsing.
//!
//! The manifest is optional. It pins the tool list, names the output file
//! and carries default render options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowcaseError};
use crate::render::DEFAULT_TITLE;

/// Project manifest loaded from showcase.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Explicit tool identifiers, in carousel order.
    /// Empty means scan the project root.
    #[serde(default)]
    pub tools: Vec<String>,

    /// Output HTML file, relative to the project root.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Seed for icon animation choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Folder patterns skipped while scanning.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Also write tools.json and use-cases.json.
    #[serde(default)]
    pub json: bool,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("index.html")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            title: default_title(),
            tools: vec![],
            output: default_output(),
            seed: None,
            excludes: vec![],
            json: false,
        }
    }
}

impl Manifest {
    /// Load manifest from a showcase.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShowcaseError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ShowcaseError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check showcase.yaml syntax".to_string()),
        })
    }

    /// Serialize back to YAML (used by `showcase init`).
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ShowcaseError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Check if a folder name matches one of the exclude patterns.
    ///
    /// Patterns support a leading or trailing `*`; anything else must match
    /// the whole name.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(name, pattern))
    }
}

fn matches_pattern(name: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if let Some(suffix) = pattern.strip_prefix('*') {
        return name.ends_with(suffix);
    }
    if let Some(prefix) = pattern.strip_suffix('*') {
        return name.starts_with(prefix);
    }
    name == pattern
}
