//! Backend contract used by the editor and the public pages, plus an
//! in-memory implementation for tests and the CLI.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::{
    article::{Article, ArticleForm},
    i18n::current::errors as t,
    leaderboard::LeaderboardEntry,
    Author, Category, TagInfo,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("decode error: {0}")]
    Decode(String),
}

impl BackendError {
    /// Maps a non-success HTTP status to the matching variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => BackendError::Unauthorized,
            404 => BackendError::NotFound(message),
            409 => BackendError::Conflict(message),
            _ => BackendError::Server { status, message },
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            BackendError::Network(_) => t::NETWORK,
            BackendError::NotFound(_) => t::NOT_FOUND,
            BackendError::Unauthorized => t::UNAUTHORIZED,
            BackendError::Conflict(_) => t::CONFLICT,
            BackendError::Server { .. } => t::SERVER,
            BackendError::Decode(_) => t::UNEXPECTED,
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, BackendError::Network(_) | BackendError::Server { .. })
    }
}

#[async_trait]
pub trait ContentBackend: Send + Sync {
    async fn fetch_article(&self, id: &str) -> Result<Article, BackendError>;

    async fn create_article(&self, form: &ArticleForm) -> Result<Article, BackendError>;

    async fn update_article(&self, id: &str, form: &ArticleForm) -> Result<Article, BackendError>;

    /// `exclude_id` lets an article keep its own slug while being edited.
    async fn is_slug_available(
        &self,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, BackendError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, BackendError>;

    async fn fetch_authors(&self) -> Result<Vec<Author>, BackendError>;

    async fn fetch_tags(&self) -> Result<Vec<TagInfo>, BackendError>;

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, BackendError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    articles: Vec<Article>,
    categories: Vec<Category>,
    authors: Vec<Author>,
    tags: Vec<TagInfo>,
    leaderboard: Vec<LeaderboardEntry>,
    next_id: u64,
    writes: usize,
    pending_failures: Vec<BackendError>,
}

/// Thread-safe in-memory store. Slugs are unique across articles.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<MemoryState>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds stored articles; new ids continue after the largest numeric id.
    pub fn with_articles(self, articles: Vec<Article>) -> Self {
        {
            let mut state = self.lock();
            state.next_id = articles
                .iter()
                .filter_map(|article| article.id.parse::<u64>().ok())
                .max()
                .unwrap_or(0);
            state.articles = articles;
        }
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.lock().categories = categories;
        self
    }

    pub fn with_authors(self, authors: Vec<Author>) -> Self {
        self.lock().authors = authors;
        self
    }

    pub fn with_tags(self, tags: Vec<TagInfo>) -> Self {
        self.lock().tags = tags;
        self
    }

    pub fn with_leaderboard(self, entries: Vec<LeaderboardEntry>) -> Self {
        self.lock().leaderboard = entries;
        self
    }

    /// Makes the next call fail with `err`. Queued failures are consumed in order.
    pub fn fail_next(&self, err: BackendError) {
        self.lock().pending_failures.push(err);
    }

    /// Number of successful create/update calls.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    pub fn articles(&self) -> Vec<Article> {
        self.lock().articles.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn guarded(&self) -> Result<MutexGuard<'_, MemoryState>, BackendError> {
        let mut state = self.lock();
        if !state.pending_failures.is_empty() {
            return Err(state.pending_failures.remove(0));
        }
        Ok(state)
    }
}

impl MemoryState {
    fn slug_taken(&self, slug: &str, exclude_id: Option<&str>) -> bool {
        self.articles
            .iter()
            .any(|article| article.form.slug == slug && Some(article.id.as_str()) != exclude_id)
    }
}

#[async_trait]
impl ContentBackend for InMemoryBackend {
    async fn fetch_article(&self, id: &str) -> Result<Article, BackendError> {
        let state = self.guarded()?;
        state
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(format!("article {id}")))
    }

    async fn create_article(&self, form: &ArticleForm) -> Result<Article, BackendError> {
        let mut state = self.guarded()?;
        if state.slug_taken(&form.slug, None) {
            return Err(BackendError::Conflict(format!("slug {} already exists", form.slug)));
        }
        state.next_id += 1;
        let now = Utc::now().to_rfc3339();
        let article = Article {
            id: state.next_id.to_string(),
            form: form.clone(),
            created_at: now.clone(),
            updated_at: now,
        };
        state.articles.push(article.clone());
        state.writes += 1;
        tracing::debug!(id = %article.id, slug = %article.form.slug, "article created");
        Ok(article)
    }

    async fn update_article(&self, id: &str, form: &ArticleForm) -> Result<Article, BackendError> {
        let mut state = self.guarded()?;
        if state.slug_taken(&form.slug, Some(id)) {
            return Err(BackendError::Conflict(format!("slug {} already exists", form.slug)));
        }
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| BackendError::NotFound(format!("article {id}")))?;
        article.form = form.clone();
        article.updated_at = Utc::now().to_rfc3339();
        let updated = article.clone();
        state.writes += 1;
        tracing::debug!(id, "article updated");
        Ok(updated)
    }

    async fn is_slug_available(
        &self,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, BackendError> {
        let state = self.guarded()?;
        Ok(!state.slug_taken(slug, exclude_id))
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, BackendError> {
        Ok(self.guarded()?.categories.clone())
    }

    async fn fetch_authors(&self) -> Result<Vec<Author>, BackendError> {
        Ok(self.guarded()?.authors.clone())
    }

    async fn fetch_tags(&self) -> Result<Vec<TagInfo>, BackendError> {
        Ok(self.guarded()?.tags.clone())
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, BackendError> {
        Ok(self.guarded()?.leaderboard.clone())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn form(slug: &str) -> ArticleForm {
        let mut form = ArticleForm::default();
        form.set_title("Bài kiểm tra IQ");
        form.set_slug(slug);
        form.content = "<p>Nội dung</p>".to_string();
        form
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let backend = InMemoryBackend::new();
        let created = backend.create_article(&form("bai-kiem-tra-iq")).await.unwrap();
        let fetched = backend.fetch_article(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(backend.write_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let backend = InMemoryBackend::new();
        backend.create_article(&form("iq")).await.unwrap();
        let err = backend.create_article(&form("iq")).await.unwrap_err();
        assert!(matches!(err, BackendError::Conflict(_)));
    }

    #[tokio::test]
    async fn slug_availability_excludes_own_article() {
        let backend = InMemoryBackend::new();
        let created = backend.create_article(&form("iq")).await.unwrap();
        assert!(!backend.is_slug_available("iq", None).await.unwrap());
        assert!(backend.is_slug_available("iq", Some(&created.id)).await.unwrap());
        assert!(backend.is_slug_available("eq", None).await.unwrap());
    }

    #[tokio::test]
    async fn update_missing_article_is_not_found() {
        let backend = InMemoryBackend::new();
        let err = backend.update_article("42", &form("iq")).await.unwrap_err();
        assert!(matches!(err, BackendError::NotFound(_)));
    }

    #[tokio::test]
    async fn injected_failures_are_consumed_in_order() {
        let backend = InMemoryBackend::new();
        backend.fail_next(BackendError::Network("offline".into()));
        assert!(backend.fetch_tags().await.is_err());
        assert!(backend.fetch_tags().await.is_ok());
    }

    #[tokio::test]
    async fn seeded_articles_keep_ids_unique() {
        let existing = InMemoryBackend::new();
        let first = existing.create_article(&form("mot")).await.unwrap();
        let backend = InMemoryBackend::new().with_articles(existing.articles());
        let second = backend.create_article(&form("hai")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(backend.articles().len(), 2);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(BackendError::from_status(401, ""), BackendError::Unauthorized);
        assert!(matches!(BackendError::from_status(404, "x"), BackendError::NotFound(_)));
        assert!(matches!(BackendError::from_status(409, "x"), BackendError::Conflict(_)));
        assert!(BackendError::from_status(503, "x").is_transient());
    }
}
