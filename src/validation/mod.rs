//! Validation of loaded tool READMEs.
//!
//! Missing sections never stop a build; they only degrade a card. These
//! checks surface them so READMEs can be fixed. Used by `showcase validate`
//! and `showcase build --validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::catalog::Catalog;
use crate::output::{plural, Printer};

/// Run all validation checks against a loaded catalog.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty(catalog));
    result.merge(checks::check_unavailable(catalog));
    for record in catalog.iter() {
        result.merge(checks::check_sections(record));
    }

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.bold(&format!("{}[{}]", d.severity, d.code));
        let line = format!("{}: {}", label, d.message);
        match d.severity {
            Severity::Error => printer.error("Error", &line),
            Severity::Warning => printer.warning("Warning", &line),
        }
        if let Some(help) = &d.help {
            printer.info("Help", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();
    let summary = format!(
        "{}, {}",
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    );

    if errors > 0 {
        printer.error("Failed", &summary);
    } else {
        printer.status("Finished", &summary);
    }
}
