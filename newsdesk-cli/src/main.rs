//! newsdesk CLI - serve and browse a paginated feed of scraped news articles
//!
//! - `serve`: run the HTTP API over the Postgres `articles` table
//! - `list`: print one page of articles
//! - `delete`: delete an article with optimistic update and reconciliation

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::NewsdeskConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "newsdesk",
    author,
    version,
    about = "Paginated, deletable feed of scraped news articles"
)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the article HTTP API server
    Serve(commands::serve::ServeArgs),
    /// List one page of articles
    List(commands::articles::ListArgs),
    /// Delete an article and show the reconciled page
    Delete(commands::articles::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    let config = NewsdeskConfig::load()?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, &config.server).await,
        Commands::List(args) => commands::articles::run_list(args, &config).await,
        Commands::Delete(args) => commands::articles::run_delete(args, &config).await,
    }
}
