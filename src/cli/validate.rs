use std::path::PathBuf;

use clap::Args;

use crate::catalog::{load_catalog, ToolCache};
use crate::discovery::discover;
use crate::error::{Result, ShowcaseError};
use crate::output::{display_path, Printer};
use crate::validation::{print_diagnostics, validate_catalog};

/// Check tool READMEs for missing sections
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project root containing the tool folders
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

pub async fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    printer.status("Checking", &display_path(&args.path));

    let discovery = discover(&args.path)?;
    let mut cache = ToolCache::new();
    let catalog = load_catalog(&discovery.identifiers, &discovery.source(), &mut cache).await;

    let result = validate_catalog(&catalog);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(ShowcaseError::Build {
            message: "Validation failed".to_string(),
            help: None,
        });
    }
    Ok(())
}
