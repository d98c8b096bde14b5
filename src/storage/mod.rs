//! Collaborator seams for persistence.
//!
//! The analysis core never talks to a database itself: the scorer hands its
//! result to an [`ArticleStore`], and the publishing pipeline reports used
//! links through a [`PageStore`]. Real deployments back these with their own
//! storage; [`InMemoryStore`] covers tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("article not found: {0}")]
    ArticleNotFound(Uuid),

    #[error("page not found: {0}")]
    PageNotFound(Uuid),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persists article scores. Implementations own all transactional concerns.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Save the integer score and the merged metadata for an article.
    async fn save_score(
        &self,
        article_id: Uuid,
        score: u32,
        metadata: Map<String, Value>,
    ) -> Result<(), StoreError>;
}

/// Tracks internal-link usage. `increment_link_count` is called by the
/// publishing pipeline once per page actually embedded as a link, never by
/// the ranker itself.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn increment_link_count(&self, page_id: Uuid) -> Result<(), StoreError>;

    async fn link_count(&self, page_id: Uuid) -> Result<u32, StoreError>;
}

/// Mutex-backed store for tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    scores: Mutex<HashMap<Uuid, (u32, Map<String, Value>)>>,
    link_counts: Mutex<HashMap<Uuid, u32>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_score(&self, article_id: Uuid) -> Option<(u32, Map<String, Value>)> {
        self.scores.lock().unwrap().get(&article_id).cloned()
    }
}

#[async_trait]
impl ArticleStore for InMemoryStore {
    async fn save_score(
        &self,
        article_id: Uuid,
        score: u32,
        metadata: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.scores
            .lock()
            .unwrap()
            .insert(article_id, (score, metadata));
        Ok(())
    }
}

#[async_trait]
impl PageStore for InMemoryStore {
    async fn increment_link_count(&self, page_id: Uuid) -> Result<(), StoreError> {
        let mut counts = self.link_counts.lock().unwrap();
        *counts.entry(page_id).or_insert(0) += 1;
        Ok(())
    }

    async fn link_count(&self, page_id: Uuid) -> Result<u32, StoreError> {
        Ok(*self.link_counts.lock().unwrap().get(&page_id).unwrap_or(&0))
    }
}
