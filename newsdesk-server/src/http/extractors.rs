//! Custom Axum extractors
//!
//! Both read the query string leniently. Malformed query strings degrade to
//! defaults (paging) or to a missing id (deletes) instead of an axum
//! rejection, so the documented 200/400 bodies are always returned.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use newsdesk_core::PageRequest;

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct IdParams {
    id: Option<String>,
}

/// Extract `page`/`limit`, applying defaults to anything unusable
pub struct PageQuery(pub PageRequest);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self(PageRequest::from_params(
            params.page.as_deref(),
            params.limit.as_deref(),
        )))
    }
}

/// Extract the raw `id` query value; validation happens in the deletion service
pub struct IdQuery(pub Option<String>);

impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = Query::<IdParams>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.id);
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn page_for(uri: &str) -> PageRequest {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let PageQuery(page) = PageQuery::from_request_parts(&mut parts, &()).await.unwrap();
        page
    }

    async fn id_for(uri: &str) -> Option<String> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let IdQuery(id) = IdQuery::from_request_parts(&mut parts, &()).await.unwrap();
        id
    }

    #[tokio::test]
    async fn page_query_reads_values() {
        assert_eq!(page_for("/articles?page=2&limit=50").await, PageRequest::new(2, 50));
    }

    #[tokio::test]
    async fn page_query_defaults() {
        assert_eq!(page_for("/articles").await, PageRequest::default());
        assert_eq!(page_for("/articles?page=0&limit=-5").await, PageRequest::default());
        assert_eq!(page_for("/articles?page=1&page=2").await, PageRequest::default());
    }

    #[tokio::test]
    async fn id_query_is_raw() {
        assert_eq!(id_for("/articles?id=17").await.as_deref(), Some("17"));
        assert_eq!(id_for("/articles?id=abc").await.as_deref(), Some("abc"));
        assert_eq!(id_for("/articles").await, None);
    }
}
