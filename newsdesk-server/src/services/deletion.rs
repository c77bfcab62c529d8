//! Deletion service - validated single-row deletes

use newsdesk_core::{ArticleId, DeleteOutcome, ValidationError};

use crate::db::{ArticleStore, StoreError};

/// Why a delete did not produce an outcome
#[derive(Debug, thiserror::Error)]
pub enum DeletionError {
    /// Rejected before the store was touched
    #[error(transparent)]
    InvalidIdentifier(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates an identifier and removes the matching row
pub struct DeletionService<'a> {
    store: &'a dyn ArticleStore,
}

impl<'a> DeletionService<'a> {
    pub fn new(store: &'a dyn ArticleStore) -> Self {
        Self { store }
    }

    /// Delete the article named by a raw query value.
    ///
    /// Deleting the same id twice yields `Deleted` then `NotFound`. A number
    /// no row can carry (e.g. `1.5`) is `NotFound` without a store round trip.
    pub async fn delete(&self, raw_id: Option<&str>) -> Result<DeleteOutcome, DeletionError> {
        let Some(id) = ArticleId::parse(raw_id)? else {
            tracing::debug!(?raw_id, "delete id is not an integer, nothing to match");
            return Ok(DeleteOutcome::NotFound);
        };
        let removed = self.store.delete_by_id(id).await?;

        let outcome = DeleteOutcome::from_rows_affected(removed);
        if outcome == DeleteOutcome::NotFound {
            tracing::debug!(%id, "delete matched no article");
        } else {
            tracing::info!(%id, "article deleted");
        }
        Ok(outcome)
    }
}
