//! Core types for showcase.

mod record;
mod theme;

pub use record::{excluded_marker_path, readme_path, ToolRecord};
pub use theme::{ThemeTokens, HUES};
