//! Debounced draft autosave for native callers.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::sync::watch;

use crate::{
    article::{Article, ArticleForm, ValidationErrors},
    backend::{BackendError, ContentBackend},
    debounce::Debouncer,
    save_latch::SaveLatch,
};

#[derive(Debug, Clone, PartialEq)]
pub enum AutosaveOutcome {
    Created(Article),
    Updated(Article),
    /// Same fingerprint as the last successful save.
    Unchanged,
    /// Invalid forms are never sent to the backend.
    Invalid(ValidationErrors),
    /// Another save holds the latch; this one was dropped.
    Busy,
    /// Retried on the next debounce cycle.
    Failed(BackendError),
}

impl AutosaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, AutosaveOutcome::Created(_) | AutosaveOutcome::Updated(_))
    }
}

struct Inner {
    backend: Arc<dyn ContentBackend>,
    latch: SaveLatch,
    article_id: Mutex<Option<String>>,
    last_saved: Mutex<Option<u64>>,
    status: watch::Sender<Option<AutosaveOutcome>>,
}

impl Inner {
    async fn save_once(&self, form: ArticleForm) -> AutosaveOutcome {
        let fingerprint = form.fingerprint();
        if *lock(&self.last_saved) == Some(fingerprint) {
            return AutosaveOutcome::Unchanged;
        }
        if let Err(errors) = form.validate() {
            tracing::debug!(count = errors.errors.len(), "autosave skipped: form invalid");
            return AutosaveOutcome::Invalid(errors);
        }
        let Some(_guard) = self.latch.try_acquire() else {
            tracing::debug!("autosave skipped: save in progress");
            return AutosaveOutcome::Busy;
        };

        let article_id = lock(&self.article_id).clone();
        let result = match article_id.as_deref() {
            Some(id) => self.backend.update_article(id, &form).await.map(AutosaveOutcome::Updated),
            None => self.backend.create_article(&form).await.map(AutosaveOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                if let AutosaveOutcome::Created(article) | AutosaveOutcome::Updated(article) = &outcome {
                    *lock(&self.article_id) = Some(article.id.clone());
                    tracing::info!(id = %article.id, slug = %article.form.slug, "draft autosaved");
                }
                *lock(&self.last_saved) = Some(fingerprint);
                outcome
            }
            Err(err) => {
                tracing::warn!(error = %err, "autosave failed, will retry on next change");
                AutosaveOutcome::Failed(err)
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Saves the latest form after `delay` of inactivity.
pub struct Autosaver {
    inner: Arc<Inner>,
    debouncer: Debouncer<ArticleForm>,
}

impl Autosaver {
    /// `article_id` is `None` for a new article; the first save creates it.
    pub fn spawn(
        backend: Arc<dyn ContentBackend>,
        article_id: Option<String>,
        delay: Duration,
    ) -> Self {
        let (status, _) = watch::channel(None);
        let inner = Arc::new(Inner {
            backend,
            latch: SaveLatch::new(),
            article_id: Mutex::new(article_id),
            last_saved: Mutex::new(None),
            status,
        });
        let worker = Arc::clone(&inner);
        let debouncer = Debouncer::spawn(delay, move |form: ArticleForm| {
            let worker = Arc::clone(&worker);
            async move {
                let outcome = worker.save_once(form).await;
                worker.status.send_replace(Some(outcome));
            }
        });
        Self { inner, debouncer }
    }

    /// Records an edit. Only the last edit in a burst is saved.
    pub fn changed(&self, form: ArticleForm) {
        if !self.debouncer.push(form) {
            tracing::warn!("autosave worker stopped, edit dropped");
        }
    }

    /// Saves immediately, bypassing the debounce (the explicit save button).
    pub async fn save_now(&self, form: ArticleForm) -> AutosaveOutcome {
        let outcome = self.inner.save_once(form).await;
        self.inner.status.send_replace(Some(outcome.clone()));
        outcome
    }

    /// Latest outcome; `None` until the first save attempt finishes.
    pub fn subscribe(&self) -> watch::Receiver<Option<AutosaveOutcome>> {
        self.inner.status.subscribe()
    }

    pub fn article_id(&self) -> Option<String> {
        lock(&self.inner.article_id).clone()
    }

    /// Saves any pending edit, then stops the worker.
    pub async fn shutdown(self) -> Option<AutosaveOutcome> {
        let Self { inner, debouncer } = self;
        debouncer.shutdown().await;
        let outcome = inner.status.borrow().clone();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::InMemoryBackend;

    const DELAY: Duration = Duration::from_millis(2000);

    fn draft(title: &str) -> ArticleForm {
        let mut form = ArticleForm::default();
        form.set_title(title);
        form.content = "<p>Chỉ số IQ đo khả năng suy luận.</p>".to_string();
        form
    }

    fn setup() -> (Arc<InMemoryBackend>, Autosaver) {
        let backend = Arc::new(InMemoryBackend::new());
        let saver = Autosaver::spawn(backend.clone(), None, DELAY);
        (backend, saver)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_edits_saves_once() {
        let (backend, saver) = setup();
        saver.changed(draft("IQ"));
        saver.changed(draft("IQ là"));
        saver.changed(draft("IQ là gì"));
        tokio::time::sleep(DELAY * 2).await;

        assert_eq!(backend.write_count(), 1);
        let articles = backend.articles();
        assert_eq!(articles[0].form.title, "IQ là gì");
        assert_eq!(saver.article_id(), Some(articles[0].id.clone()));
    }

    #[tokio::test(start_paused = true)]
    async fn second_save_updates_created_article() {
        let (backend, saver) = setup();
        assert!(matches!(saver.save_now(draft("Một")).await, AutosaveOutcome::Created(_)));
        assert!(matches!(saver.save_now(draft("Hai")).await, AutosaveOutcome::Updated(_)));
        assert_eq!(backend.articles().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_and_invalid_forms_skip_backend() {
        let (backend, saver) = setup();
        saver.save_now(draft("Một")).await;
        assert_eq!(saver.save_now(draft("Một")).await, AutosaveOutcome::Unchanged);
        assert!(matches!(saver.save_now(ArticleForm::default()).await, AutosaveOutcome::Invalid(_)));
        assert_eq!(backend.write_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_is_retried_on_next_cycle() {
        let (backend, saver) = setup();
        backend.fail_next(BackendError::Network("offline".into()));
        let mut status = saver.subscribe();

        saver.changed(draft("IQ"));
        tokio::time::sleep(DELAY * 2).await;
        status.changed().await.unwrap();
        assert!(matches!(*status.borrow(), Some(AutosaveOutcome::Failed(_))));

        saver.changed(draft("IQ"));
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(backend.write_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_flushes_pending_edit() {
        let (backend, saver) = setup();
        saver.changed(draft("Lưu khi đóng"));
        let outcome = saver.shutdown().await;
        assert!(outcome.is_some_and(|outcome| outcome.is_saved()));
        assert_eq!(backend.write_count(), 1);
    }
}
