//! Individual validation checks.

use crate::catalog::Catalog;
use crate::parser::extract_title;
use crate::types::ToolRecord;

use super::warning::{Diagnostic, ValidationResult};

/// Error when nothing at all made it onto the page.
pub fn check_empty(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    if catalog.is_empty() {
        result.push(
            Diagnostic::error("showcase::validate::empty", "No tools could be loaded")
                .with_help("Add tool folders with a README.md or list them under `tools:` in showcase.yaml"),
        );
    }
    result
}

/// Error for every identifier whose README could not be fetched.
pub fn check_unavailable(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    for id in &catalog.unavailable {
        result.push(
            Diagnostic::error(
                "showcase::validate::unavailable",
                format!("README for '{}' could not be read", id),
            )
            .for_tool(id),
        );
    }
    result
}

/// Warnings for sections a record is missing.
pub fn check_sections(record: &ToolRecord) -> ValidationResult {
    let mut result = ValidationResult::new();
    let id = &record.identifier;

    if extract_title(&record.raw).is_none() {
        result.push(
            Diagnostic::warning(
                "showcase::validate::missing-title",
                format!("'{}' has no `# Title`; the folder name is shown instead", id),
            )
            .for_tool(id),
        );
    }

    if !record.has_purpose() {
        result.push(
            Diagnostic::warning(
                "showcase::validate::missing-purpose",
                format!("'{}' has no purpose block", id),
            )
            .for_tool(id)
            .with_help("Start a blockquote with `> Purpose` and end it with an empty `>` line"),
        );
    }

    if record.features.is_empty() {
        result.push(
            Diagnostic::warning(
                "showcase::validate::missing-features",
                format!("'{}' lists no key features", id),
            )
            .for_tool(id)
            .with_help("Add `- feature` bullets right after the purpose block"),
        );
    }

    if record.use_cases.is_empty() {
        result.push(
            Diagnostic::warning(
                "showcase::validate::missing-use-cases",
                format!("'{}' has no use cases", id),
            )
            .for_tool(id)
            .with_help("Add a `### Use Cases` section"),
        );
    }

    result
}
