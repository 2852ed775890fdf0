//! CLI entry point - the composition root.
//!
//! Wires infrastructure together via `bootstrap` and routes each command
//! to its handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use breedex_cli::{Cli, CliConfig, CliContext, Commands, bootstrap, exit_code_for, handlers};

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn context() -> anyhow::Result<CliContext> {
    bootstrap(CliConfig::from_env()?).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Only breed and config commands open the database
    match command {
        Commands::Paths => handlers::paths::execute()?,
        Commands::Refresh {
            species,
            page,
            query,
        } => {
            let ctx = context().await?;
            handlers::refresh::execute(&ctx, species.species, page, query.as_deref()).await?;
        }
        Commands::List {
            species,
            favorites,
            filter,
        } => {
            let ctx = context().await?;
            handlers::list::execute(&ctx, species.species, &filter.into_filter(favorites)).await?;
        }
        Commands::Search { query, species } => {
            let ctx = context().await?;
            handlers::search::execute(&ctx, species.species, &query).await?;
        }
        Commands::Favorite { id, species } => {
            let ctx = context().await?;
            handlers::favorite::execute(&ctx, species.species, &id).await?;
        }
        Commands::Show { id, species } => {
            let ctx = context().await?;
            handlers::show::execute(&ctx, species.species, &id).await?;
        }
        Commands::Stats {
            species,
            favorites,
            filter,
        } => {
            let ctx = context().await?;
            handlers::stats::execute(&ctx, species.species, &filter.into_filter(favorites)).await?;
        }
        Commands::Filters { species } => {
            let ctx = context().await?;
            handlers::filters::execute(&ctx, species.species).await?;
        }
        Commands::Config { command } => {
            let ctx = context().await?;
            handlers::config::execute(&ctx, command).await?;
        }
    }

    Ok(())
}


#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.default_log_filter());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}
