//! Query service - paginated reads

use newsdesk_core::{Article, PageRequest};

use crate::db::{ArticleStore, StoreError};

/// Translates a page request into a store window
pub struct QueryService<'a> {
    store: &'a dyn ArticleStore,
}

impl<'a> QueryService<'a> {
    pub fn new(store: &'a dyn ArticleStore) -> Self {
        Self { store }
    }

    /// Rows `[offset, offset + limit)` in store order.
    ///
    /// A page past the end of the table is an empty, successful result.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<Article>, StoreError> {
        let articles = self.store.list_page(page.limit, page.offset()).await?;
        tracing::debug!(
            page = page.page,
            limit = page.limit,
            returned = articles.len(),
            "article page served"
        );
        Ok(articles)
    }
}
