use std::{path::Path, sync::Arc, time::Duration};

use anyhow::{bail, Result};
use iqtest_shared::{
    article::Article,
    autosave::{AutosaveOutcome, Autosaver},
    backend::InMemoryBackend,
    config::SiteConfig,
    ArticleForm, SiteError,
};
use iq_cli::utils::{read_json, read_json_or_default, write_json};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Edits {
    Many(Vec<ArticleForm>),
    One(Box<ArticleForm>),
}

pub async fn run(edits: &Path, store: &Path, id: Option<String>, gap_ms: u64) -> Result<()> {
    let edits = match read_json::<Edits>(edits)? {
        Edits::Many(forms) => forms,
        Edits::One(form) => vec![*form],
    };
    if edits.is_empty() {
        bail!("no edits to replay");
    }

    let articles: Vec<Article> = read_json_or_default(store)?;
    let backend = Arc::new(InMemoryBackend::new().with_articles(articles));
    let config = SiteConfig::from_env();
    let saver = Autosaver::spawn(backend.clone(), id, config.autosave_debounce);

    for form in edits {
        saver.changed(form);
        if gap_ms > 0 {
            tokio::time::sleep(Duration::from_millis(gap_ms)).await;
        }
    }
    let outcome = saver.shutdown().await;

    match outcome {
        Some(AutosaveOutcome::Created(article)) | Some(AutosaveOutcome::Updated(article)) => {
            println!("saved {} ({})", article.id, article.form.slug);
        },
        Some(AutosaveOutcome::Failed(err)) => {
            let err = SiteError::from(err);
            if err.is_transient() {
                tracing::warn!("backend unavailable, edits were not saved; rerun to retry");
            }
            bail!("{}", err.user_message())
        },
        Some(AutosaveOutcome::Invalid(errors)) => {
            bail!("{}", SiteError::from(errors).user_message())
        },
        Some(other) => println!("{other:?}"),
        None => println!("nothing saved"),
    }

    write_json(store, &backend.articles())?;
    tracing::info!(writes = backend.write_count(), store = %store.display(), "article store updated");
    Ok(())
}
