//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Acquisition is bounded
//! by `acquire_timeout`; each pooled session carries a `statement_timeout`
//! so a stalled query fails instead of hanging the request.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pool sizing and timeout knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// Longest wait for a free connection
    pub acquire_timeout: Duration,
    /// Server-side cap on a single statement
    pub statement_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            statement_timeout: DEFAULT_STATEMENT_TIMEOUT,
        }
    }
}

impl PoolSettings {
    fn connect_options(&self, database_url: &str) -> Result<PgConnectOptions, sqlx::Error> {
        let options = PgConnectOptions::from_str(database_url)?.options([(
            "statement_timeout",
            self.statement_timeout.as_millis().to_string(),
        )]);
        Ok(options)
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections.max(1))
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/newsdesk", &PoolSettings::default()).await?;
/// ```
pub async fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    let options = settings.connect_options(database_url)?;
    settings.pool_options().connect_with(options).await
}
