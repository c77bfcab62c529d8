//! Schema bootstrap for the articles table
//!
//! The scraper inserts rows out-of-band; the server only makes sure the
//! table exists so it can start against an empty database.

use sqlx::PgPool;

/// Create the `articles` table if it is missing
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring articles table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id SERIAL PRIMARY KEY,
            headline TEXT NOT NULL,
            url TEXT NOT NULL,
            UNIQUE (headline, url)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
