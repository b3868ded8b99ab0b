//! README parsing for showcased tools.
//!
//! A tool README is plain markdown. Only a handful of conventions matter:
//!
//! - the first `# Heading` is the tool's display name, and its first word
//!   doubles as the card emoji;
//! - a blockquoted `> Purpose` line opens the purpose block, which ends at
//!   the first empty quote line (`>`);
//! - the `-` bullets after that terminator are the key features;
//! - a `### Use Cases` heading opens the use-case list.
//!
//! # Usage
//!
//! ```ignore
//! use showcase::parser::parse_tool;
//!
//! let source = std::fs::read_to_string("scraper/README.md")?;
//! let tool = parse_tool("scraper", &source);
//!
//! println!("{} has {} features", tool.name, tool.features.len());
//! ```

mod line;
mod sections;
mod tool;

pub use line::{bullet, Line};
pub use sections::{extract_sections, Sections};
pub use tool::{extract_emoji, extract_title, parse_tool, ParsedTool};
