//! End-to-end checks from README text to rendered page.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use showcase::cli::build::{build_once, BuildArgs};
use showcase::output::Printer;
use showcase::render::{consolidate_use_cases, render_detail, DEFAULT_TITLE};
use showcase::{
    load_catalog, render_page, MemorySource, Overlay, OverlayEvent, OverlayState, PageOptions,
    ToolCache,
};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("tools")
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn missing_readme_is_skipped() {
    let source = MemorySource::new().with("a/README.md", "# A Tool\n> Purpose\ntext\n> \n- f1\n- f2\n");
    let mut cache = ToolCache::new();

    let catalog = load_catalog(&ids(&["a", "b"]), &source, &mut cache).await;

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.unavailable, vec!["b"]);
    let record = catalog.get("a").unwrap();
    assert_eq!(record.display_name, "A Tool");
    assert_eq!(record.purpose, "text");
    assert_eq!(record.features, vec!["f1", "f2"]);

    let mut rng = StdRng::seed_from_u64(3);
    let html = render_page(&catalog.records, &PageOptions::default(), &mut rng);

    assert_eq!(html.matches("<article").count(), 1);
    assert!(html.contains("./a/README.md"));
    assert!(!html.contains("b/README.md"));
    assert_eq!(html.matches(r#"<details"#).count(), 1);

    assert!(catalog.get("b").is_none());
    let tools: serde_json::Value = serde_json::to_value(&catalog.records).unwrap();
    let exported: Vec<_> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["identifier"].as_str().unwrap())
        .collect();
    assert_eq!(exported, vec!["a"]);
    let use_cases = serde_json::to_string(&consolidate_use_cases(&catalog.records)).unwrap();
    assert!(!use_cases.contains("\"b\""));
}

#[tokio::test]
async fn excluded_tool_keeps_following_themes_in_sequence() {
    let source = MemorySource::new()
        .with("one/README.md", "# One\n")
        .with("two/README.md", "# Two\n")
        .with("two/.excluded", "")
        .with("three/README.md", "# Three\n");
    let mut cache = ToolCache::new();

    let catalog = load_catalog(&ids(&["one", "two", "three"]), &source, &mut cache).await;

    let hues: Vec<_> = catalog.iter().map(|r| r.theme.hue).collect();
    assert_eq!(hues, vec!["blue", "green"]);
    assert_eq!(catalog.excluded, vec!["two"]);
}

#[test]
fn background_click_dismisses_open_detail() {
    let details = vec!["<h2>A</h2>".to_string(), "<h2>B</h2>".to_string()];
    let mut overlay = Overlay::new(details);

    overlay.handle(OverlayEvent::Toggle { index: 1, open: true });
    assert_eq!(overlay.expanded(), Some(1));
    assert!(overlay.is_visible());

    overlay.handle(OverlayEvent::Dismiss);

    assert_eq!(overlay.state(), &OverlayState::Collapsed);
    assert!(!overlay.any_disclosure_open());
}

#[tokio::test]
async fn builds_fixture_directory() {
    let out = tempfile::tempdir().unwrap();
    let args = BuildArgs {
        path: fixture_root(),
        output: Some(out.path().join("index.html")),
        title: None,
        seed: Some(42),
        json: true,
        validate: false,
        watch: false,
    };

    let report = build_once(&args, &Printer::with_color(false)).await.unwrap();

    let names: Vec<_> = report.catalog.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(names, vec!["csv_json_converter", "executioner", "scraper"]);
    assert_eq!(report.catalog.excluded, vec!["debug_demo"]);

    let scraper = report.catalog.get("scraper").unwrap();
    assert_eq!(scraper.emoji, "🕸️");
    assert_eq!(scraper.features.len(), 4);
    assert_eq!(
        scraper.features[1],
        "Respects `robots.txt` rules, with a configurable delay between requests"
    );
    assert_eq!(
        scraper.use_cases,
        vec![
            "- Collect product prices for a weekly report",
            "- Archive blog posts before a site migration",
        ]
    );

    let html = fs::read_to_string(&report.output).unwrap();
    assert!(html.contains(&format!("<title>{}</title>", DEFAULT_TITLE)));
    assert!(!html.contains("Debug Demo"));
    assert!(html.contains("<b>one command</b>"));
    let tools = fs::read_to_string(out.path().join("tools.json")).unwrap();
    assert!(tools.contains("\"identifier\": \"scraper\""));
    assert!(!tools.contains("debug_demo"));
    assert!(out.path().join("use-cases.json").exists());

    let detail = render_detail(scraper);
    assert!(detail.contains("<i>CSV</i>"));
    assert!(detail.contains(r#"<a href="https://example.com/scraper" class="text-blue-400 underline">docs</a>"#));
}
