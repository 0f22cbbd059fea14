use anyhow::{bail, Result};
use iqtest_shared::slug::{generate_slug, unique_slug_candidate, validate_slug};

pub fn run(title: &str, attempt: usize, check: bool) -> Result<()> {
    if check {
        if let Err(err) = validate_slug(title) {
            bail!("{}", err.user_message());
        }
        println!("{title}");
        return Ok(());
    }

    let slug = generate_slug(title);
    if slug.is_empty() {
        bail!("title {title:?} produces an empty slug");
    }
    tracing::debug!(%slug, attempt, "generated slug");
    println!("{}", unique_slug_candidate(&slug, attempt));
    Ok(())
}
