use std::path::Path;

use anyhow::{bail, Result};
use chrono::Local;
use iqtest_shared::{article::format_datetime_local, ArticleForm, SiteError};
use iq_cli::utils::{read_json, render_validation};

pub fn run(file: &Path) -> Result<()> {
    let form: ArticleForm = read_json(file)?;
    if let Err(errors) = form.validate() {
        eprint!("{}", render_validation(&errors));
        bail!("{}", SiteError::from(errors).user_message());
    }

    if let Some(at) = form.scheduled_at() {
        if at <= Local::now().naive_local() {
            tracing::warn!(publish_at = %format_datetime_local(&at), "scheduled time is in the past");
        }
    }
    println!("ok: {} ({})", form.slug, form.status.label());
    Ok(())
}
