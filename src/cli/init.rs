//! Init command implementation.
//!
//! Generates a `showcase.yaml` manifest pinning the scanned tool order.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_tools, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, ShowcaseError};
use crate::output::{display_path, plural, Printer};

/// Initialize a project by generating a showcase.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing showcase.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(ShowcaseError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let manifest = Manifest {
        tools: scan_tools(&args.path, &Manifest::default()),
        ..Default::default()
    };

    if manifest.tools.is_empty() {
        printer.warning("Empty", "no tool folders with a README.md found");
    } else {
        printer.info("Found", &plural(manifest.tools.len(), "tool", "tools"));
    }

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| ShowcaseError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    Ok(())
}
