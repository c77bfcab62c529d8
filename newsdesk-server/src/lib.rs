//! newsdesk-server: paginated, deletable feed of scraped news articles
//!
//! Layers, leaves first:
//! - `db`: the article store (Postgres or in-memory) and pool setup
//! - `services`: page/limit defaulting and delete outcome handling
//! - `http`: axum routes, error mapping and the server loop

pub mod db;
pub mod http;
pub mod services;
pub mod state;

pub use db::{ArticleStore, MemoryArticleStore, PgArticleStore, PoolSettings, StoreError};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
