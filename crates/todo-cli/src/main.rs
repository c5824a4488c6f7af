//! Todo CLI - Command-line interface for the todo client
//!
//! Sign in and manage your tasks from the terminal.

mod auth;
mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use todo_core::ClientConfig;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::auth_cmd::run_auth;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("todo=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env(cli.api_url)?;
    tracing::debug!("Using API at {}", config.api_base_url());

    match cli.command {
        Commands::Auth { command } => run_auth(command, &config).await?,
        Commands::List { json } => run_list(json, &config).await?,
        Commands::Add { text } => run_add(&text, &config).await?,
        Commands::Edit { id, text } => run_edit(&id, &text, &config).await?,
        Commands::Delete { id } => run_delete(&id, &config).await?,
    }

    Ok(())
}
