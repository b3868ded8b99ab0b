use clap::Parser;
use miette::Result;
use showcase::cli::{Cli, Commands};
use showcase::output::Printer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("showcase=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => showcase::cli::build::run(args, &printer).await?,
        Commands::List(args) => showcase::cli::list::run(args, &printer).await?,
        Commands::Validate(args) => showcase::cli::validate::run(args, &printer).await?,
        Commands::Init(args) => showcase::cli::init::run(args, &printer)?,
        Commands::Completions(args) => showcase::cli::completions::run(args)?,
    }

    Ok(())
}
