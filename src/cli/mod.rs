pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// showcase - Landing page generator for a folder of tools
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the landing page from tool READMEs
    Build(build::BuildArgs),

    /// List the tools that would appear on the page
    List(list::ListArgs),

    /// Check tool READMEs for missing sections
    Validate(validate::ValidateArgs),

    /// Initialize a project (generates showcase.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
