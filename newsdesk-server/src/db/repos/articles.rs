//! Article repository backed by Postgres
//!
//! - list: `to_jsonb` row snapshot, ordered by id, LIMIT/OFFSET window
//! - delete: single-row DELETE, reports rows affected
//!
//! Every call checks a connection out of the pool and holds it only for the
//! duration of the statement. The `PoolConnection` guard hands it back on
//! drop, so early `?` returns and cancelled futures release it too.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use newsdesk_core::{Article, ArticleId};

use crate::db::store::{ArticleStore, StoreError};

/// Postgres-backed article store
#[derive(Clone)]
pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list_page(&self, limit: u32, offset: u64) -> Result<Vec<Article>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        // Whole-row JSON keeps scraper-added columns without knowing them here
        let rows: Vec<(JsonValue,)> = sqlx::query_as(
            r#"
            SELECT to_jsonb(a) AS row
            FROM articles a
            ORDER BY a.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(limit))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&mut *conn)
        .await?;

        tracing::debug!(limit, offset, rows = rows.len(), "listed article page");

        rows.into_iter()
            .map(|(row,)| serde_json::from_value(row).map_err(StoreError::from))
            .collect()
    }

    async fn delete_by_id(&self, id: ArticleId) -> Result<u64, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.get())
            .execute(&mut *conn)
            .await?;

        tracing::debug!(%id, rows = result.rows_affected(), "deleted article");
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
