//! wsctl - switch, create, rename and delete console workspaces.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wsctl::cli::{self, Cli, Commands};
use wsctl::config::{self, env};
use wsctl::error::Result;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_LEVEL)
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    // Run the command
    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_retriable() {
                eprintln!("This looks temporary. Try again in a moment.");
            }
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let open_browser = !cli.no_browser;

    match cli.command {
        Commands::List { json } => cli::commands::handle_list(&config, json).await,
        Commands::Current { json } => cli::commands::handle_current(&config, json).await,
        Commands::Rename { name } => cli::commands::handle_rename(&config, &name).await,
        Commands::Switch { workspace } => {
            cli::commands::handle_switch(&config, open_browser, &workspace).await
        }
        Commands::Create { name } => {
            cli::commands::handle_create(&config, open_browser, &name).await
        }
        Commands::Delete { workspace, yes } => {
            cli::commands::handle_delete(&config, open_browser, &workspace, yes).await
        }
    }
}
