//! In-process article store
//!
//! Same ordering and delete semantics as the Postgres store, plus an
//! offline switch for exercising the store-failure paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use newsdesk_core::{Article, ArticleId};

use crate::db::store::{ArticleStore, StoreError};

/// Article store held in memory, kept sorted by id
#[derive(Default)]
pub struct MemoryArticleStore {
    rows: RwLock<Vec<Article>>,
    offline: AtomicBool,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let mut rows: Vec<Article> = articles.into_iter().collect();
        rows.sort_by_key(|a| a.id);
        rows.dedup_by_key(|a| a.id);
        Self {
            rows: RwLock::new(rows),
            offline: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail as if the database were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Offline("memory store switched offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn list_page(&self, limit: u32, offset: u64) -> Result<Vec<Article>, StoreError> {
        self.check_online()?;

        let rows = self.rows.read().await;
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        Ok(rows
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: ArticleId) -> Result<u64, StoreError> {
        self.check_online()?;

        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n: i64) -> MemoryArticleStore {
        MemoryArticleStore::with_articles(
            (1..=n).map(|i| Article::new(i, format!("Headline {}", i), format!("https://news/{}", i))),
        )
    }

    #[tokio::test]
    async fn pages_are_contiguous_windows() {
        let store = store_with(120);

        let first = store.list_page(50, 0).await.unwrap();
        let second = store.list_page(50, 50).await.unwrap();
        let third = store.list_page(50, 100).await.unwrap();

        let ids: Vec<i64> = first
            .iter()
            .chain(&second)
            .chain(&third)
            .map(|a| a.id.get())
            .collect();
        assert_eq!(ids, (1..=120).collect::<Vec<_>>());
        assert_eq!(third.len(), 20);
    }

    #[tokio::test]
    async fn offset_past_end_is_empty() {
        let store = store_with(5);
        assert!(store.list_page(50, 1_000).await.unwrap().is_empty());
        assert!(store.list_page(50, u64::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = store_with(3);

        assert_eq!(store.delete_by_id(ArticleId::new(2)).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(ArticleId::new(2)).await.unwrap(), 0);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn sorts_unordered_input() {
        let store = MemoryArticleStore::with_articles(vec![
            Article::new(3, "c", "https://news/c"),
            Article::new(1, "a", "https://news/a"),
            Article::new(2, "b", "https://news/b"),
        ]);

        let ids: Vec<i64> = store
            .list_page(10, 0)
            .await
            .unwrap()
            .iter()
            .map(|a| a.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn offline_store_fails_every_call() {
        let store = store_with(3);
        store.set_offline(true);

        assert!(matches!(store.list_page(10, 0).await, Err(StoreError::Offline(_))));
        assert!(store.delete_by_id(ArticleId::new(1)).await.is_err());
        assert!(store.ping().await.is_err());

        store.set_offline(false);
        assert_eq!(store.len().await, 3);
    }
}
