//! Build command implementation.
//!
//! Loads every tool README and writes the landing page (plus optional JSON
//! exports). With `--watch` the page is rebuilt whenever a README, an
//! exclusion marker or the manifest changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use notify::{RecursiveMode, Watcher};
use serde::Serialize;

use crate::catalog::{load_catalog, Catalog, ToolCache};
use crate::discovery::{discover, Discovery, MANIFEST_FILENAME};
use crate::error::{Result, ShowcaseError};
use crate::output::{display_path, plural, Printer};
use crate::render::{animation_rng, consolidate_use_cases, render_page, PageOptions};
use crate::validation::{print_diagnostics, validate_catalog};
use crate::{EXCLUDED_MARKER, README_FILENAME};

/// Name of the tool list export.
pub const TOOLS_JSON: &str = "tools.json";

/// Name of the consolidated use-case export.
pub const USE_CASES_JSON: &str = "use-cases.json";

/// Render the landing page from tool READMEs
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Project root containing the tool folders
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output HTML file (default: manifest `output`, else index.html)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Seed for icon animations (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write tools.json and use-cases.json
    #[arg(long)]
    pub json: bool,

    /// Fail the build when validation reports errors
    #[arg(long)]
    pub validate: bool,

    /// Rebuild when READMEs change
    #[arg(long)]
    pub watch: bool,
}

/// What a single build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub output: PathBuf,
    pub catalog: Catalog,
}

pub async fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    build_once(&args, printer).await?;

    if args.watch {
        watch(&args, printer).await?;
    }

    Ok(())
}

/// Run one full build with a fresh cache.
pub async fn build_once(args: &BuildArgs, printer: &Printer) -> Result<BuildReport> {
    let discovery = discover(&args.path)?;
    printer.status(
        "Discovered",
        &format!(
            "{} ({})",
            plural(discovery.identifiers.len(), "tool", "tools"),
            discovery.origin
        ),
    );

    let mut cache = ToolCache::new();
    let catalog = load_catalog(&discovery.identifiers, &discovery.source(), &mut cache).await;

    for id in &catalog.excluded {
        printer.info("Excluded", id);
    }
    for id in &catalog.unavailable {
        printer.warning("Skipping", &format!("{} (README unavailable)", id));
    }

    if args.validate {
        let result = validate_catalog(&catalog);
        print_diagnostics(&result, printer);
        if result.has_errors() {
            return Err(ShowcaseError::Build {
                message: "Validation failed".to_string(),
                help: Some("Run `showcase validate` for details".to_string()),
            });
        }
    }

    let output = output_path(args, &discovery);
    let options = PageOptions {
        title: args
            .title
            .clone()
            .unwrap_or_else(|| discovery.manifest.title.clone()),
    };
    let mut rng = animation_rng(args.seed.or(discovery.manifest.seed));

    printer.status("Rendering", &plural(catalog.len(), "tool", "tools"));
    let html = render_page(&catalog.records, &options, &mut rng);
    write_file(&output, &html)?;

    if args.json || discovery.manifest.json {
        let dir = output.parent().unwrap_or_else(|| Path::new("."));
        write_json(&dir.join(TOOLS_JSON), &catalog.records)?;
        write_json(&dir.join(USE_CASES_JSON), &consolidate_use_cases(&catalog.records))?;
    }

    printer.status("Finished", &display_path(&output));

    Ok(BuildReport { output, catalog })
}

fn output_path(args: &BuildArgs, discovery: &Discovery) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None => discovery.root.join(&discovery.manifest.output),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ShowcaseError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, contents).map_err(|e| ShowcaseError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| ShowcaseError::Build {
        message: format!("Failed to serialize {}: {}", path.display(), e),
        help: None,
    })?;
    write_file(path, &json)
}

/// Whether a changed path should trigger a rebuild.
pub fn is_relevant_change(path: &Path) -> bool {
    matches!(
        path.file_name().and_then(|n| n.to_str()),
        Some(name) if name == README_FILENAME || name == EXCLUDED_MARKER || name == MANIFEST_FILENAME
    )
}

async fn watch(args: &BuildArgs, printer: &Printer) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = tx.send(res);
    })?;
    watcher.watch(&args.path, RecursiveMode::Recursive)?;

    printer.info("Watching", &display_path(&args.path));

    while let Some(res) = rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "watch error");
                continue;
            }
        };

        if !event.paths.iter().any(|p| is_relevant_change(p)) {
            continue;
        }

        // Editors save in bursts; let them settle before rebuilding.
        tokio::time::sleep(Duration::from_millis(200)).await;
        while rx.try_recv().is_ok() {}

        if let Err(e) = build_once(args, printer).await {
            printer.error("Error", &e.to_string());
        }
    }

    Ok(())
}
