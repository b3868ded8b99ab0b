//! Tool README parsing.

use serde::Serialize;

use super::line::Line;
use super::sections::extract_sections;

/// A README reduced to the fields the landing page needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTool {
    pub identifier: String,
    pub name: String,
    pub emoji: String,
    pub purpose: String,
    pub features: Vec<String>,
    pub use_cases: Vec<String>,
    #[serde(skip)]
    pub raw: String,
}

/// Parse a tool README.
///
/// Never fails: a document without a title falls back to the identifier,
/// and missing sections come back empty.
pub fn parse_tool(identifier: &str, raw: &str) -> ParsedTool {
    let name = extract_title(raw).unwrap_or(identifier).to_string();
    let emoji = extract_emoji(&name).to_string();
    let sections = extract_sections(raw);

    ParsedTool {
        identifier: identifier.to_string(),
        name,
        emoji,
        purpose: sections.purpose,
        features: sections.features,
        use_cases: sections.use_cases,
        raw: raw.to_string(),
    }
}

/// Text of the first non-empty level-1 heading.
pub fn extract_title(source: &str) -> Option<&str> {
    source.lines().find_map(|raw| match Line::classify(raw) {
        Line::Heading { level: 1, text } if !text.is_empty() => Some(text),
        _ => None,
    })
}

/// First whitespace-delimited token of a display name.
///
/// The token is returned as-is; it is usually a pictograph but nothing
/// checks that.
pub fn extract_emoji(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}
