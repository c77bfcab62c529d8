//! HTTP server command for the article feed

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use newsdesk_server::db::{create_pool, ensure_schema};
use newsdesk_server::{run_server, PgArticleStore, PoolSettings, ServerConfig};

use crate::config::ServerSection;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Seconds to wait for a free connection before failing the request
    #[arg(long)]
    pub acquire_timeout_secs: Option<u64>,

    /// Seconds a single statement may run before Postgres cancels it
    #[arg(long)]
    pub statement_timeout_secs: Option<u64>,
}

impl ServeArgs {
    fn pool_settings(&self, file: &ServerSection) -> PoolSettings {
        let defaults = PoolSettings::default();
        PoolSettings {
            max_connections: self
                .max_connections
                .or(file.max_connections)
                .unwrap_or(defaults.max_connections),
            acquire_timeout: self
                .acquire_timeout_secs
                .or(file.acquire_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
            statement_timeout: self
                .statement_timeout_secs
                .or(file.statement_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.statement_timeout),
        }
    }

    fn server_config(&self, file: &ServerSection) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: self.bind.or(file.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: self.cors_permissive || file.cors_permissive.unwrap_or(false),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, file: &ServerSection) -> Result<()> {
    let database_url = args
        .database_url
        .clone()
        .or_else(|| file.database_url.clone())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.newsdesk/config.toml")?;

    let settings = args.pool_settings(file);
    let config = args.server_config(file);

    tracing::info!(
        max_connections = settings.max_connections,
        acquire_timeout = ?settings.acquire_timeout,
        statement_timeout = ?settings.statement_timeout,
        "Starting newsdesk server on {}",
        config.bind_addr
    );

    let pool = create_pool(&database_url, &settings)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to prepare articles table")?;

    // Run server (blocks until shutdown)
    run_server(Arc::new(PgArticleStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
