//! showcase - Landing page generator for a folder of tools
//!
//! A library for turning tool READMEs into a single static HTML page with a
//! card carousel, detail overlays and a consolidated use-case grid.

pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod overlay;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

/// File name of a tool's README inside its folder.
pub const README_FILENAME: &str = "README.md";

/// Marker file that removes a tool from the page.
pub const EXCLUDED_MARKER: &str = ".excluded";

pub use catalog::{load_catalog, Catalog, ToolCache};
pub use discovery::{discover, DirSource, Discovery, DocumentSource, Manifest, MemorySource};
pub use error::{Result, ShowcaseError};
pub use overlay::{Overlay, OverlayEvent, OverlayState};
pub use parser::{parse_tool, ParsedTool};
pub use render::{render_page, to_markup, PageOptions};
pub use types::{ThemeTokens, ToolRecord};
pub use validation::{validate_catalog, Diagnostic, Severity, ValidationResult};
