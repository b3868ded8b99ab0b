//! Markdown subset to HTML conversion.
//!
//! Only the constructs tool READMEs actually use are recognised. Rules run
//! in a fixed order so later rules never see markup produced by earlier
//! ones as markdown:
//!
//! 1. `# heading` lines
//! 2. `**strong**`
//! 3. `*emphasis*`
//! 4. `[text](url)`
//! 5. `- item` lines
//! 6. runs of list items grouped into one list
//! 7. every other non-empty line wrapped in a paragraph
//!
//! Content is not escaped; READMEs are first-party documents.

use std::sync::OnceLock;

use regex::Regex;

const HEADING_OPEN: &str = r#"<h2 class="text-xl font-bold mb-2">"#;
const LIST_OPEN: &str = r#"<ul class="list-disc ml-5 text-sm mb-4">"#;
const PARAGRAPH_OPEN: &str = r#"<p class="mb-2">"#;

/// Block elements that keep a line out of paragraph wrapping.
const BLOCK_PREFIXES: [&str; 3] = ["<h2", "<ul", "<li"];

/// Convert a markdown subset to HTML.
pub fn to_markup(text: &str) -> String {
    static RE_HEADING: OnceLock<Regex> = OnceLock::new();
    let re_heading = RE_HEADING.get_or_init(|| Regex::new(r"(?m)^# (.*)$").unwrap());
    let html = re_heading.replace_all(text, format!("{HEADING_OPEN}$1</h2>").as_str());

    let html = inline_markup(&html);

    static RE_ITEM: OnceLock<Regex> = OnceLock::new();
    let re_item = RE_ITEM.get_or_init(|| Regex::new(r"(?m)^[ \t]*- (.*)$").unwrap());
    let html = re_item.replace_all(&html, "<li>$1</li>");

    wrap_blocks(&html)
}

/// Apply only the inline rules (strong, emphasis, links).
pub fn inline_markup(text: &str) -> String {
    static RE_STRONG: OnceLock<Regex> = OnceLock::new();
    let re_strong = RE_STRONG.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
    let html = re_strong.replace_all(text, "<b>$1</b>");

    static RE_EMPHASIS: OnceLock<Regex> = OnceLock::new();
    let re_emphasis = RE_EMPHASIS.get_or_init(|| Regex::new(r"\*(.*?)\*").unwrap());
    let html = re_emphasis.replace_all(&html, "<i>$1</i>");

    static RE_LINK: OnceLock<Regex> = OnceLock::new();
    let re_link = RE_LINK.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
    re_link
        .replace_all(&html, r#"<a href="$2" class="text-blue-400 underline">$1</a>"#)
        .into_owned()
}

/// Group list items and wrap loose lines in paragraphs.
fn wrap_blocks(html: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut items: Vec<&str> = Vec::new();

    for line in html.lines() {
        if line.starts_with("<li>") {
            items.push(line);
            continue;
        }

        flush_list(&mut out, &mut items);

        if line.trim().is_empty() || BLOCK_PREFIXES.iter().any(|p| line.starts_with(p)) {
            out.push(line.to_string());
        } else {
            out.push(format!("{PARAGRAPH_OPEN}{line}</p>"));
        }
    }

    flush_list(&mut out, &mut items);
    out.join("\n")
}

fn flush_list(out: &mut Vec<String>, items: &mut Vec<&str>) {
    if items.is_empty() {
        return;
    }
    out.push(format!("{LIST_OPEN}{}</ul>", items.join("\n")));
    items.clear();
}
