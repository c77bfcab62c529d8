//! Client view synchronizer
//!
//! State per page view: `Loading -> Ready | Failed`.
//!
//! The state machine is exposed as synchronous steps
//! (`begin_refresh`/`finish_refresh`, `apply_delete`/`resolve_delete`) so it
//! can be driven without a network. `refresh` and `delete` wire those steps
//! to an `ArticleApi`.
//!
//! Deletes are applied to the local list before the server answers. A
//! failed delete moves the view to `Failed` and asks for a reconciling
//! refetch, which replaces the list wholesale with the server's page.

use newsdesk_core::{Article, ArticleId, DeleteOutcome, PageRequest};

use crate::api::ArticleApi;
use crate::error::{ClientError, ViewError};

pub const FETCH_FAILED: &str = "Failed to fetch articles. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete the article. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Initial state and during any refetch; the previous list stays visible
    Loading,
    /// List reflects the last fetch plus local removals
    Ready,
    /// Last request failed; the previous list is kept for display
    Failed { message: String },
}

/// A delete applied locally and not yet confirmed by the server
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending delete must be resolved with the server's answer"]
pub struct PendingDelete {
    id: ArticleId,
}

impl PendingDelete {
    pub fn id(&self) -> ArticleId {
        self.id
    }
}

/// What the caller must do after a delete resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DeleteResolution {
    /// Row is gone server-side (deleted now or already absent)
    Confirmed(DeleteOutcome),
    /// Local list may be wrong; refetch the page
    Reconcile,
}

/// In-memory copy of one visible page
pub struct FeedView<A> {
    api: A,
    page: PageRequest,
    articles: Vec<Article>,
    state: ViewState,
    notice: Option<String>,
}

impl<A: ArticleApi> FeedView<A> {
    /// Start in `Loading` with an empty list.
    pub fn new(api: A, page: PageRequest) -> Self {
        Self {
            api,
            page,
            articles: Vec::new(),
            state: ViewState::Loading,
            notice: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Last delete failure, kept after the reconciling refetch so the user
    /// still sees it. Cleared by an explicit `refresh`.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Switch to another page; takes effect on the next refresh.
    pub fn set_page(&mut self, page: PageRequest) {
        self.page = page;
    }

    /// Enter `Loading` and return the page to fetch.
    pub fn begin_refresh(&mut self) -> PageRequest {
        self.state = ViewState::Loading;
        self.page
    }

    /// Apply a fetch result: replace the list on success, keep it on failure.
    pub fn finish_refresh(&mut self, result: Result<Vec<Article>, ClientError>) {
        match result {
            Ok(articles) => {
                tracing::debug!(count = articles.len(), "page loaded");
                self.articles = articles;
                self.state = ViewState::Ready;
            }
            Err(e) => {
                tracing::warn!("fetching articles failed: {}", e);
                self.state = ViewState::Failed {
                    message: FETCH_FAILED.to_string(),
                };
            }
        }
    }

    /// Remove `id` from the local list ahead of the server call.
    ///
    /// Only accepted in `Ready`.
    pub fn apply_delete(&mut self, id: ArticleId) -> Result<PendingDelete, ViewError> {
        match self.state {
            ViewState::Ready => {}
            ViewState::Loading => return Err(ViewError::Loading),
            ViewState::Failed { .. } => return Err(ViewError::Unavailable),
        }

        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        if self.articles.len() == before {
            return Err(ViewError::NotListed(id));
        }

        Ok(PendingDelete { id })
    }

    /// Apply the server's answer to an earlier `apply_delete`.
    ///
    /// With several deletes in flight, a reconciling refetch triggered by one
    /// failure can bring back a row whose own delete has not been confirmed
    /// yet. A later success does not remove it again, so the list may show
    /// that row until the next refresh.
    pub fn resolve_delete(
        &mut self,
        pending: PendingDelete,
        result: Result<DeleteOutcome, ClientError>,
    ) -> DeleteResolution {
        match result {
            Ok(outcome) => {
                tracing::debug!(id = %pending.id, ?outcome, "delete confirmed");
                DeleteResolution::Confirmed(outcome)
            }
            Err(e) => {
                tracing::warn!(id = %pending.id, "delete failed, reconciling: {}", e);
                self.state = ViewState::Failed {
                    message: DELETE_FAILED.to_string(),
                };
                self.notice = Some(DELETE_FAILED.to_string());
                DeleteResolution::Reconcile
            }
        }
    }

    /// User-initiated reload; clears any delete notice.
    pub async fn refresh(&mut self) {
        self.notice = None;
        self.reload().await;
    }

    /// Optimistic delete followed by server confirmation and, on failure,
    /// a reconciling refetch.
    pub async fn delete(&mut self, id: ArticleId) -> Result<DeleteResolution, ViewError> {
        let pending = self.apply_delete(id)?;
        let result = self.api.delete_article(pending.id()).await;

        let resolution = self.resolve_delete(pending, result);
        if resolution == DeleteResolution::Reconcile {
            self.reload().await;
        }
        Ok(resolution)
    }

    /// Refetch the current page and replace the list.
    pub async fn reload(&mut self) {
        let page = self.begin_refresh();
        let result = self.api.fetch_page(page).await;
        self.finish_refresh(result);
    }
}
