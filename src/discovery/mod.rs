//! Tool discovery for showcase projects.
//!
//! Works out which tool folders go on the page. The list comes from the
//! first of these that yields anything:
//!
//! 1. the `tools:` list in `showcase.yaml`,
//! 2. a scan of the project root for folders holding a `README.md`,
//! 3. the built-in [`DEFAULT_TOOLS`] list.
//!
//! # Example
//!
//! ```ignore
//! use showcase::discovery::discover;
//!
//! let discovery = discover("./tools-repo")?;
//! println!("Found {} tools", discovery.identifiers.len());
//! ```

mod manifest;
mod scanner;
mod source;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::scan_tools;
pub use source::{DirSource, DocumentSource, MemorySource};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "showcase.yaml";

/// Tools listed when neither the manifest nor a scan finds any.
pub const DEFAULT_TOOLS: [&str; 7] = [
    "csv_json_converter",
    "scraper",
    "executioner",
    "package_toolkit",
    "readme_updater",
    "watch_automation",
    "toolkit_runner",
];

/// Where the identifier list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolListOrigin {
    Manifest,
    Scan,
    Default,
}

impl fmt::Display for ToolListOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolListOrigin::Manifest => write!(f, "manifest"),
            ToolListOrigin::Scan => write!(f, "scan"),
            ToolListOrigin::Default => write!(f, "default list"),
        }
    }
}

/// Result of discovering tools in a project.
#[derive(Debug)]
pub struct Discovery {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no showcase.yaml found).
    pub manifest: Manifest,

    /// Whether a showcase.yaml manifest was found.
    pub has_manifest: bool,

    /// Tool identifiers in page order, before exclusion probing.
    pub identifiers: Vec<String>,

    /// Where `identifiers` came from.
    pub origin: ToolListOrigin,
}

impl Discovery {
    /// A document source rooted at the project directory.
    pub fn source(&self) -> DirSource {
        DirSource::new(&self.root)
    }
}

/// Discover tools in a project directory.
///
/// A `showcase.yaml` that cannot be read or parsed is logged and ignored;
/// the tool list then comes from a scan or the default list.
pub fn discover(root: impl AsRef<Path>) -> Result<Discovery> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        match Manifest::load(&manifest_path) {
            Ok(manifest) => (manifest, true),
            Err(e) => {
                tracing::warn!(
                    path = %manifest_path.display(),
                    error = %e,
                    "ignoring unusable manifest"
                );
                (Manifest::default(), false)
            }
        }
    } else {
        (Manifest::default(), false)
    };

    let (identifiers, origin) = resolve_identifiers(&root, &manifest);
    tracing::debug!(count = identifiers.len(), %origin, "resolved tool list");

    Ok(Discovery {
        root,
        manifest,
        has_manifest,
        identifiers,
        origin,
    })
}

/// Pick the identifier list for a project.
pub fn resolve_identifiers(root: &Path, manifest: &Manifest) -> (Vec<String>, ToolListOrigin) {
    if !manifest.tools.is_empty() {
        return (dedup_in_order(&manifest.tools), ToolListOrigin::Manifest);
    }

    let scanned = scan_tools(root, manifest);
    if !scanned.is_empty() {
        return (scanned, ToolListOrigin::Scan);
    }

    tracing::info!(
        count = DEFAULT_TOOLS.len(),
        "no tools configured or found, using default list"
    );
    (
        DEFAULT_TOOLS.iter().map(|s| s.to_string()).collect(),
        ToolListOrigin::Default,
    )
}

/// Drop repeated identifiers, keeping the first occurrence.
fn dedup_in_order(tools: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tools
        .iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}
