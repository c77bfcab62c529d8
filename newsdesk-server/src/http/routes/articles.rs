//! Article endpoints
//!
//! - `GET /articles?page=&limit=` - one page of the feed
//! - `DELETE /articles?id=` - remove one article

use axum::extract::State;
use axum::{routing::get, Json, Router};

use newsdesk_core::{Article, DeleteOutcome, MessageBody};

use crate::http::error::{ApiError, FETCH_FAILED};
use crate::http::extractors::{IdQuery, PageQuery};
use crate::services::{DeletionService, QueryService};
use crate::state::AppState;

/// GET /articles - list one page of articles
async fn list_articles(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = QueryService::new(state.store())
        .list(page)
        .await
        .map_err(|source| ApiError::StoreUnavailable {
            message: FETCH_FAILED,
            source,
        })?;

    Ok(Json(articles))
}

/// DELETE /articles - delete an article by id
async fn delete_article(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> Result<Json<MessageBody>, ApiError> {
    match DeletionService::new(state.store()).delete(id.as_deref()).await? {
        DeleteOutcome::Deleted => Ok(Json(MessageBody::new("Article deleted"))),
        DeleteOutcome::NotFound => Err(ApiError::NotFound),
    }
}

/// Article routes
pub fn router() -> Router<AppState> {
    Router::new().route("/articles", get(list_articles).delete(delete_article))
}
