use std::{
    fmt::Write as _,
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use iqtest_shared::{
    article::ValidationErrors,
    seo::SeoReport,
    tags::TagBatch,
    LeaderboardEntry,
};
use serde::{de::DeserializeOwned, Serialize};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Reads `path` when it exists, otherwise returns `T::default()`.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if path.exists() {
        read_json(path)
    } else {
        Ok(T::default())
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}

pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| item.to_string())
        .collect()
}

/// Fixed-width table of `(rank, entry)` rows.
pub fn render_leaderboard(rows: &[(u32, LeaderboardEntry)]) -> String {
    let name_width = rows
        .iter()
        .map(|(_, entry)| entry.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<name_width$}  {:>5}  {:<16}  {}", "#", "Name", "IQ", "Badge", "Location");
    for (rank, entry) in rows {
        let _ = writeln!(
            out,
            "{:>5}  {:<name_width$}  {:>5}  {:<16}  {}",
            rank,
            entry.name,
            entry.score,
            entry.badge.style().label,
            entry.location
        );
    }
    out
}

pub fn render_seo_report(report: &SeoReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.summary());
    for check in &report.checks {
        let mark = if check.passed { "✓" } else { "✗" };
        let _ = writeln!(out, "  {mark} [{:>2}] {}", check.kind.weight(), check.message);
    }
    out
}

pub fn render_validation(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for error in &errors.errors {
        let _ = writeln!(out, "  {:?}: {}", error.field, error.message);
    }
    out
}

pub fn render_tag_batch(batch: &TagBatch, max_length: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "valid: {}", batch.valid_tags.join(", "));
    if !batch.duplicates.is_empty() {
        let _ = writeln!(out, "duplicates: {}", batch.duplicates.join(", "));
    }
    if !batch.too_long.is_empty() {
        let _ = writeln!(out, "too long: {}", batch.too_long.len());
    }
    if batch.empty_count > 0 {
        let _ = writeln!(out, "empty: {}", batch.empty_count);
    }
    for message in batch.messages(max_length) {
        let _ = writeln!(out, "- {message}");
    }
    out
}
