//! Tool record type.

use serde::Serialize;

use crate::parser::ParsedTool;

use super::ThemeTokens;

/// A parsed tool with its positional theme.
///
/// Records are built once per identifier and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolRecord {
    /// Folder name of the tool.
    pub identifier: String,
    /// First level-1 heading, or the identifier.
    pub display_name: String,
    /// First token of the display name (may be ordinary text).
    pub emoji: String,
    /// Purpose block text, one line per source line.
    pub purpose: String,
    /// Key feature entries in source order.
    pub features: Vec<String>,
    /// Use case lines in source order.
    pub use_cases: Vec<String>,
    /// Full README text.
    #[serde(skip)]
    pub raw: String,
    /// Style tokens for the tool's position.
    pub theme: ThemeTokens,
}

impl ToolRecord {
    /// Create a record from a parsed document at a list position.
    pub fn new(parsed: ParsedTool, index: usize) -> Self {
        Self {
            identifier: parsed.identifier,
            display_name: parsed.name,
            emoji: parsed.emoji,
            purpose: parsed.purpose,
            features: parsed.features,
            use_cases: parsed.use_cases,
            raw: parsed.raw,
            theme: ThemeTokens::for_index(index),
        }
    }

    /// Relative link to the tool's README.
    pub fn readme_path(&self) -> String {
        readme_path(&self.identifier)
    }

    pub fn has_purpose(&self) -> bool {
        !self.purpose.is_empty()
    }
}

/// Document path for an identifier.
pub fn readme_path(identifier: &str) -> String {
    format!("{}/{}", identifier, crate::README_FILENAME)
}

/// Exclusion marker path for an identifier.
pub fn excluded_marker_path(identifier: &str) -> String {
    format!("{}/{}", identifier, crate::EXCLUDED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tool;

    #[test]
    fn test_record_takes_theme_from_index() {
        let parsed = parse_tool("scraper", "# 🕸️ Scraper\n");
        let record = ToolRecord::new(parsed, 9);

        assert_eq!(record.theme.hue, "green");
        assert_eq!(record.display_name, "🕸️ Scraper");
        assert_eq!(record.emoji, "🕸️");
    }

    #[test]
    fn test_paths() {
        assert_eq!(readme_path("scraper"), "scraper/README.md");
        assert_eq!(excluded_marker_path("scraper"), "scraper/.excluded");
    }

    #[test]
    fn test_record_serializes_without_raw() {
        let parsed = parse_tool("x", "# X\nlots of text");
        let record = ToolRecord::new(parsed, 0);
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"identifier\":\"x\""));
        assert!(!json.contains("lots of text"));
    }
}
