//! Database layer - connection pool and article store
//!
//! # Design Principles
//!
//! - One injected, bounded pool; no global connection
//! - Connections are checked out per call and returned by the guard's drop
//! - Stable `ORDER BY id` so LIMIT/OFFSET windows never overlap
//! - Rows are only read or deleted here; ingestion happens elsewhere

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryArticleStore;
pub use pool::{create_pool, PoolSettings};
pub use repos::PgArticleStore;
pub use schema::ensure_schema;
pub use store::{ArticleStore, StoreError};
