//! List command implementation.
//!
//! Loads the tool catalog and prints what the page would show.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::{load_catalog, Catalog, ToolCache};
use crate::discovery::discover;
use crate::error::{Result, ShowcaseError};
use crate::output::{plural, Printer};

/// List the tools that would appear on the page
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project root containing the tool folders
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print the loaded records as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&args.path)?;
    let mut cache = ToolCache::new();
    let catalog = load_catalog(&discovery.identifiers, &discovery.source(), &mut cache).await;

    if args.json {
        let json = serde_json::to_string_pretty(&catalog.records).map_err(|e| ShowcaseError::Build {
            message: format!("Failed to serialize tools: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for line in inventory(&catalog, printer) {
        printer.info(&line.0, &line.1);
    }

    for id in &catalog.excluded {
        printer.info("Excluded", id);
    }
    for id in &catalog.unavailable {
        printer.warning("Missing", id);
    }

    Ok(())
}

/// One (verb, message) pair per loaded tool.
fn inventory(catalog: &Catalog, printer: &Printer) -> Vec<(String, String)> {
    catalog
        .iter()
        .map(|record| {
            let summary = format!(
                "{}, {}",
                plural(record.features.len(), "feature", "features"),
                plural(record.use_cases.len(), "use case", "use cases")
            );
            (
                record.identifier.clone(),
                format!(
                    "{} {} {}",
                    record.display_name,
                    printer.dim("-"),
                    printer.dim(&summary)
                ),
            )
        })
        .collect()
}
