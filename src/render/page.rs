//! Full landing page assembly.
//!
//! The page is a single static HTML document: a radio-driven card carousel,
//! a use-case panel following the checked card, and a modal overlay fed
//! from per-card `<template>` elements. The inline script only moves
//! pre-rendered fragments around; see [`crate::overlay`] for the model of
//! its open/close rules.

use rand::Rng;

use crate::types::ToolRecord;

use super::animation::pick_icon_animation;
use super::card::{render_card, render_detail};
use super::use_cases::render_use_case_panel;

/// Default page title.
pub const DEFAULT_TITLE: &str = "FreelanceScripts";

/// Page-level settings.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Element id of the detail template for the card at `index`.
pub fn detail_template_id(index: usize) -> String {
    format!("detail-{index}")
}

/// Element id of the use-case template for the card at `index`.
pub fn use_case_template_id(index: usize) -> String {
    format!("use-cases-{index}")
}

/// Render the complete landing page for the ordered tool records.
pub fn render_page<R: Rng + ?Sized>(
    records: &[ToolRecord],
    options: &PageOptions,
    rng: &mut R,
) -> String {
    let total = records.len();

    let cards: String = if records.is_empty() {
        r#"<p class="text-center text-gray-400">No tools found.</p>"#.to_string()
    } else {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| render_card(record, i, total, pick_icon_animation(&mut *rng)))
            .collect()
    };

    let initial_use_cases = records.first().map(render_use_case_panel).unwrap_or_default();

    let templates: String = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "<template id=\"{}\">{}</template>\n<template id=\"{}\">{}</template>\n",
                detail_template_id(i),
                render_detail(record),
                use_case_template_id(i),
                render_use_case_panel(record),
            )
        })
        .collect();

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/animate.css/4.1.1/animate.min.css">
<style>{STYLE}</style>
</head>
<body class="bg-gray-900 text-gray-100">
<header class="text-center py-8"><h1 class="text-4xl font-bold">{title}</h1></header>
<main>
<section class="cards">
{cards}</section>
<section class="use-cases-container">
<h2 class="text-2xl font-semibold text-center my-6">Use Cases</h2>
<div class="grid place-items-center">{initial_use_cases}</div>
</section>
</main>
<div id="backdrop" class="backdrop"></div>
<div id="modal" class="modal" role="dialog" aria-modal="true">
<button id="closeButton" type="button" aria-label="Close">&times;</button>
<div id="modalContent"></div>
</div>
{templates}"#,
        title = options.title,
    ));
    html.push_str("<script>");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

const STYLE: &str = ".cards{display:grid;place-items:center}\
.cards input[type=radio]{display:none}\
.cards article{display:none;transform:rotate(var(--angle))}\
.cards input:checked+article{display:block;transform:none}\
.backdrop,.modal{display:none}\
.backdrop.show{display:block;position:fixed;inset:0;background:rgba(0,0,0,.6)}\
.modal.show{display:block;position:fixed;top:10vh;left:50%;transform:translateX(-50%);max-width:40rem;padding:1.5rem;background:#1f2937;border-radius:.5rem}";

const SCRIPT: &str = r#"
const modal = document.getElementById("modal");
const backdrop = document.getElementById("backdrop");
const modalContent = document.getElementById("modalContent");
const disclosures = document.querySelectorAll(".detailsElement");
const closeModal = () => {
  modal.classList.remove("show");
  backdrop.classList.remove("show");
  disclosures.forEach(el => el.open = false);
};
disclosures.forEach(el => el.addEventListener("toggle", () => {
  if (el.open) {
    disclosures.forEach(other => { if (other !== el) other.open = false; });
    const detail = document.getElementById("detail-" + el.dataset.index);
    modalContent.innerHTML = detail ? detail.innerHTML : "";
    modal.classList.add("show");
    backdrop.classList.add("show");
  } else if (!document.querySelector(".detailsElement[open]")) {
    closeModal();
  }
}));
document.getElementById("closeButton").addEventListener("click", closeModal);
backdrop.addEventListener("click", closeModal);
const panel = document.querySelector(".use-cases-container > .grid");
document.querySelectorAll('input[name="radio-card"]').forEach(radio => radio.addEventListener("change", () => {
  const source = document.getElementById("use-cases-" + radio.dataset.index);
  panel.innerHTML = source ? source.innerHTML : "";
}));
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tool;
    use crate::render::animation_rng;

    fn records() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new(
                parse_tool("a", "# A Tool\n> Purpose\ntext\n> \n- f1\n- f2\n### Use Cases\nDemos\n"),
                0,
            ),
            ToolRecord::new(parse_tool("c", "# C Tool\n"), 1),
        ]
    }

    #[test]
    fn test_page_contains_every_card() {
        let html = render_page(&records(), &PageOptions::default(), &mut animation_rng(Some(3)));

        assert_eq!(html.matches("<article").count(), 2);
        assert!(html.contains("1/2"));
        assert!(html.contains("2/2"));
        assert!(html.contains("<title>FreelanceScripts</title>"));
    }

    #[test]
    fn test_page_has_templates_and_overlay() {
        let html = render_page(&records(), &PageOptions::default(), &mut animation_rng(Some(3)));

        assert!(html.contains(r#"<template id="detail-0">"#));
        assert!(html.contains(r#"<template id="use-cases-1"></template>"#));
        assert!(html.contains(r#"id="closeButton""#));
        assert!(html.contains(r#"id="backdrop""#));
    }

    #[test]
    fn test_initial_use_cases_follow_first_card() {
        let html = render_page(&records(), &PageOptions::default(), &mut animation_rng(Some(3)));
        let grid = html
            .split(r#"<div class="grid place-items-center">"#)
            .nth(1)
            .unwrap();

        assert!(grid.starts_with("<details"));
        assert!(grid.contains("<li>Demos</li>"));
    }

    #[test]
    fn test_seeded_render_is_reproducible() {
        let options = PageOptions {
            title: "Tools".to_string(),
        };
        let first = render_page(&records(), &options, &mut animation_rng(Some(42)));
        let second = render_page(&records(), &options, &mut animation_rng(Some(42)));

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_page() {
        let html = render_page(&[], &PageOptions::default(), &mut animation_rng(Some(1)));

        assert!(html.contains("No tools found."));
        assert!(!html.contains("<article"));
        assert!(!html.contains("<template"));
    }
}
