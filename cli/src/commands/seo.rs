use std::path::Path;

use anyhow::Result;
use iqtest_shared::{seo::analyze, ArticleForm};
use iq_cli::utils::{read_json, render_seo_report};

pub fn run(file: &Path, json: bool) -> Result<()> {
    let form: ArticleForm = read_json(file)?;
    let report = analyze(&form);
    tracing::debug!(score = report.score, words = report.word_count, "seo analysed");
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_seo_report(&report));
    }
    Ok(())
}
