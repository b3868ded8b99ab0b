//! Use-case panel fragments and the consolidated use-case export.

use serde::Serialize;

use crate::types::ToolRecord;

use super::markup::inline_markup;

/// Use cases of one tool, as written to `use-cases.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolUseCases {
    pub tool_name: String,
    pub identifier: String,
    pub use_cases: Vec<String>,
}

/// Render the use-case panel for the selected tool.
///
/// Tools without use cases render to an empty string so the panel clears.
pub fn render_use_case_panel(record: &ToolRecord) -> String {
    if record.use_cases.is_empty() {
        return String::new();
    }

    let items: String = record
        .use_cases
        .iter()
        .map(|u| format!("<li>{}</li>", inline_markup(u)))
        .collect();

    format!(
        r#"<details class="bg-gradient-to-br {} rounded-lg p-4 shadow-md w-3/4 text-center" open>
  <summary class="font-semibold text-lg cursor-pointer">{}</summary>
  <ul class="list-disc ml-5 mt-2" style="list-style-type:none;">{}</ul>
</details>"#,
        record.theme.container_classes(),
        record.display_name,
        items
    )
}

/// Collect the use cases of every tool that has some.
pub fn consolidate_use_cases(records: &[ToolRecord]) -> Vec<ToolUseCases> {
    records
        .iter()
        .filter(|r| !r.use_cases.is_empty())
        .map(|r| ToolUseCases {
            tool_name: r.display_name.clone(),
            identifier: r.identifier.clone(),
            use_cases: r.use_cases.clone(),
        })
        .collect()
}
