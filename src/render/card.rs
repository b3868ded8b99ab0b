//! Carousel card and detail fragments.

use crate::types::ToolRecord;

use super::animation::card_angle;
use super::markup::{inline_markup, to_markup};

/// Badge shown when a tool has no emoji.
pub const FALLBACK_EMOJI: &str = "🔧";

const SECTION_HEADING: &str = "font-semibold text-lg mt-2 mb-1";

/// Previous and next ordinals for a card, wrapping at both ends.
///
/// Returns `None` for an empty carousel.
pub fn neighbours(index: usize, total: usize) -> Option<(usize, usize)> {
    if total == 0 {
        return None;
    }
    let prev = (index + total - 1) % total;
    let next = (index + 1) % total;
    Some((prev, next))
}

/// Element id of the radio input selecting the card at `index`.
pub fn radio_id(index: usize) -> String {
    format!("radio-{}", index + 1)
}

/// Render one carousel card.
///
/// `animation` is the animate.css class for the icon badge.
pub fn render_card(record: &ToolRecord, index: usize, total: usize, animation: &str) -> String {
    let theme = &record.theme;
    let (prev, next) = neighbours(index, total).unwrap_or((index, index));
    let emoji = if record.emoji.is_empty() {
        FALLBACK_EMOJI
    } else {
        record.emoji.as_str()
    };
    let checked = if index == 0 { " checked" } else { "" };

    format!(
        r#"<input type="radio" id="{radio}" name="radio-card" data-index="{index}"{checked}>
<article class="card sm:text-center" style="--angle:{angle}deg; overflow-y:auto;">
  <div class="card-icon card-img bg-gradient-to-br {gradient} {text} {border} {shadow} flex items-center justify-center text-white border-8 p-4 bg-gray-800 {animation}" style="width: 200px; height: 200px; font-size: 6rem;">
    <span>{emoji}</span>
  </div>
  <div class="card-data bg-gradient-to-br {gradient} {border} {shadow} rounded-lg p-4 shadow-md" style="height: 75vh">
    <span class="card-num {text} animate__animated animate__slideInLeft">{position}/{total}</span>
    <h2 class="{text} animate__animated animate__slideInDown text-3xl text-bold">{name}</h2>
    <div class="{text} animate__animated animate__slideInUp">
      <hr />
      {purpose}
      {divider}
    </div>
    <div class="scrollable-details" style="height: 30px; overflow: hidden;">
      <details class="card-features detailsElement" data-index="{index}">
        <summary class="font-semibold text-lg mb-1 {text} animate__animated animate__slideInDown">Key Features</summary>
        <ul class="list-disc ml-5 text-sm mt-2 {text} animate__animated animate__slideInLeft">{features}</ul>
      </details>
    </div>
    <a href="./{readme}" class="card-btn {button} rounded-full px-4 py-2 text-white font-semibold shadow-lg transition-transform duration-300 hover:scale-105 animate__animated animate__slideInUp" style="margin: 0 auto; display: block; width: fit-content;">Read More</a>
    <footer style="display: flex; justify-content: space-between; padding: 0 1rem;">
      <label for="{prev_radio}" aria-label="Previous" class="{text} animate__animated animate__slideInLeft">&#10094;</label>
      <label for="{next_radio}" aria-label="Next" class="{text} animate__animated animate__slideInRight">&#10095;</label>
    </footer>
  </div>
</article>
"#,
        radio = radio_id(index),
        angle = card_angle(index),
        gradient = theme.gradient,
        border = theme.border,
        shadow = theme.shadow,
        text = theme.text,
        button = theme.button,
        position = index + 1,
        name = record.display_name,
        purpose = to_markup(&record.purpose),
        divider = divider(),
        features = feature_items(&record.features),
        readme = record.readme_path(),
        prev_radio = radio_id(prev),
        next_radio = radio_id(next),
    )
}

/// Render the fragment shown in the overlay when a card is expanded.
pub fn render_detail(record: &ToolRecord) -> String {
    let mut html = format!(
        r#"<h2 class="{} text-2xl font-bold mb-2">{}</h2>"#,
        record.theme.text, record.display_name
    );

    if record.has_purpose() {
        html.push_str(&format!(
            r#"<h4 class="{SECTION_HEADING}">Purpose</h4>{}"#,
            to_markup(&record.purpose)
        ));
    }

    if !record.features.is_empty() {
        html.push_str(&format!(
            r#"<h4 class="{SECTION_HEADING}">Key Features</h4><ul class="list-disc ml-5 text-sm mb-4">{}</ul>"#,
            feature_items(&record.features)
        ));
    }

    html
}

fn feature_items(features: &[String]) -> String {
    features
        .iter()
        .map(|f| format!("<li>{}</li>", inline_markup(f)))
        .collect()
}

fn divider() -> &'static str {
    r#"<div class="flex items-center"><hr class="flex-grow border-gray-600"><span class="mx-4 text-gray-400">✦</span><hr class="flex-grow border-gray-600"></div>"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tool;
    use pretty_assertions::assert_eq;

    fn record(identifier: &str, source: &str, index: usize) -> ToolRecord {
        ToolRecord::new(parse_tool(identifier, source), index)
    }

    #[test]
    fn test_neighbours_wrap() {
        assert_eq!(neighbours(0, 3), Some((2, 1)));
        assert_eq!(neighbours(1, 3), Some((0, 2)));
        assert_eq!(neighbours(2, 3), Some((1, 0)));
    }

    #[test]
    fn test_single_card_points_at_itself() {
        assert_eq!(neighbours(0, 1), Some((0, 0)));
    }

    #[test]
    fn test_empty_carousel_has_no_neighbours() {
        assert_eq!(neighbours(0, 0), None);
    }

    #[test]
    fn test_last_next_is_first_and_first_prev_is_last() {
        for total in 1..12 {
            let (_, next_of_last) = neighbours(total - 1, total).unwrap();
            let (prev_of_first, _) = neighbours(0, total).unwrap();
            assert_eq!(next_of_last, 0);
            assert_eq!(prev_of_first, total - 1);
        }
    }

    #[test]
    fn test_card_contents() {
        let tool = record(
            "scraper",
            "# 🕸️ Scraper\n> Purpose\nGrabs *pages*\n>\n- **Fast**\n- Polite\n",
            1,
        );

        let html = render_card(&tool, 1, 3, "animate__pulse");

        assert!(html.contains(r#"id="radio-2""#));
        assert!(!html.contains(" checked"));
        assert!(html.contains("<span>🕸️</span>"));
        assert!(html.contains("2/3"));
        assert!(html.contains("🕸️ Scraper</h2>"));
        assert!(html.contains(r#"<p class="mb-2">Grabs <i>pages</i></p>"#));
        assert!(html.contains("<li><b>Fast</b></li><li>Polite</li>"));
        assert!(html.contains(r#"href="./scraper/README.md""#));
        assert!(html.contains(r#"<label for="radio-1" aria-label="Previous""#));
        assert!(html.contains(r#"<label for="radio-3" aria-label="Next""#));
        assert!(html.contains("animate__pulse"));
        assert!(html.contains("--angle:-8deg"));
        assert!(html.contains("text-green-300"));
    }

    #[test]
    fn test_first_card_is_checked() {
        let tool = record("a", "# A", 0);
        let html = render_card(&tool, 0, 1, "animate__bounce");

        assert!(html.contains(r#"id="radio-1" name="radio-card" data-index="0" checked"#));
    }

    #[test]
    fn test_empty_emoji_uses_fallback() {
        let mut tool = record("a", "# A", 0);
        tool.emoji.clear();

        let html = render_card(&tool, 0, 1, "animate__bounce");

        assert!(html.contains("<span>🔧</span>"));
    }

    #[test]
    fn test_detail_sections() {
        let tool = record("a", "# A Tool\n> Purpose\ntext\n> \n- f1\n- f2\n", 0);

        let html = render_detail(&tool);

        assert_eq!(
            html,
            concat!(
                r#"<h2 class="text-blue-300 text-2xl font-bold mb-2">A Tool</h2>"#,
                r#"<h4 class="font-semibold text-lg mt-2 mb-1">Purpose</h4><p class="mb-2">text</p>"#,
                r#"<h4 class="font-semibold text-lg mt-2 mb-1">Key Features</h4>"#,
                r#"<ul class="list-disc ml-5 text-sm mb-4"><li>f1</li><li>f2</li></ul>"#,
            )
        );
    }

    #[test]
    fn test_detail_without_sections_is_title_only() {
        let tool = record("bare", "nothing useful", 2);
        assert_eq!(
            render_detail(&tool),
            r#"<h2 class="text-purple-300 text-2xl font-bold mb-2">bare</h2>"#
        );
    }
}
