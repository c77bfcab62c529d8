//! Article store contract

use async_trait::async_trait;
use newsdesk_core::{Article, ArticleId};

/// Store failure. Every variant is surfaced to callers as "store unavailable".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("malformed article row: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("store offline: {0}")]
    Offline(String),
}

/// Persistent table of articles.
///
/// Implementations must hand back rows in a stable order so that
/// consecutive pages with the same limit neither skip nor repeat rows.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// At most `limit` rows starting at `offset`; empty past the end.
    async fn list_page(&self, limit: u32, offset: u64) -> Result<Vec<Article>, StoreError>;

    /// Remove the row with `id`, returning the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: ArticleId) -> Result<u64, StoreError>;

    /// Cheap liveness check.
    async fn ping(&self) -> Result<(), StoreError>;
}
