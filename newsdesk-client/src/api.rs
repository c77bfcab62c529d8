//! Article server API
//!
//! 200 and 404 on delete are both outcomes; every other status, and any
//! transport fault, is a `ClientError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use newsdesk_core::{Article, ArticleId, DeleteOutcome, MessageBody, PageRequest};

use crate::error::ClientError;

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations the view needs from the server
#[async_trait]
pub trait ArticleApi: Send + Sync {
    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<Article>, ClientError>;

    async fn delete_article(&self, id: ArticleId) -> Result<DeleteOutcome, ClientError>;
}

/// `ArticleApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpArticleApi {
    client: Client,
    base_url: String,
}

impl HttpArticleApi {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:3030`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ArticleApi for HttpArticleApi {
    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<Article>, ClientError> {
        let response = self
            .client
            .get(self.articles_url())
            .query(&page)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_article(&self, id: ArticleId) -> Result<DeleteOutcome, ClientError> {
        let response = self
            .client
            .delete(self.articles_url())
            .query(&[("id", id.get())])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::NotFound),
            _ => Err(status_error(response).await),
        }
    }
}

async fn status_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => String::from("unexpected response"),
    };
    ClientError::Status { status, message }
}
