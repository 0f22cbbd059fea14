//! Tag normalization, bulk parsing and suggestion filtering for the
//! `TagsInput` widget.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{current::tags as t, fill_one};

pub const MAX_TAG_LENGTH: usize = 50;
pub const MAX_TAGS_PER_ARTICLE: usize = 10;
pub const DEFAULT_SEPARATOR: char = ',';

/// Tokens that stay fully uppercase under [`TagNormalizer::Smart`].
pub const UPPERCASE_TAGS: &[&str] = &[
    "SEO", "API", "IQ", "EQ", "AI", "ML", "UI", "UX", "CSS", "HTML", "JS", "PHP", "SQL", "MBTI",
];

#[derive(Debug, Clone, Copy)]
pub enum TagNormalizer {
    /// `"React"` → `"react"`.
    Lowercase,
    /// Allow-listed acronyms uppercase, everything else `"Capitalized"`.
    Smart,
    /// Trimmed input kept as typed.
    Preserve,
    Custom(fn(&str) -> String),
}

impl TagNormalizer {
    pub fn apply(&self, tag: &str) -> String {
        match self {
            TagNormalizer::Lowercase => normalize_lowercase(tag),
            TagNormalizer::Smart => normalize_smart(tag),
            TagNormalizer::Preserve => tag.to_string(),
            TagNormalizer::Custom(f) => f(tag),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TagParseOptions {
    pub max_length: usize,
    pub case_sensitive: bool,
    pub normalizer: TagNormalizer,
    pub separator: char,
}

impl Default for TagParseOptions {
    fn default() -> Self {
        Self {
            max_length: MAX_TAG_LENGTH,
            case_sensitive: false,
            normalizer: TagNormalizer::Lowercase,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl TagParseOptions {
    fn key(&self, tag: &str) -> String {
        if self.case_sensitive {
            tag.to_string()
        } else {
            tag.to_lowercase()
        }
    }
}

/// Outcome of parsing one separator-delimited batch.
///
/// Each token is counted exactly once: in `valid_tags`, `duplicates`,
/// `too_long` or `empty_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBatch {
    pub valid_tags: Vec<String>,
    pub duplicates: Vec<String>,
    pub too_long: Vec<String>,
    pub empty_count: usize,
}

impl TagBatch {
    pub fn token_count(&self) -> usize {
        self.valid_tags.len() + self.duplicates.len() + self.too_long.len() + self.empty_count
    }

    /// Vietnamese feedback lines for the widget, one per non-empty bucket.
    pub fn messages(&self, max_length: usize) -> Vec<String> {
        let mut messages = Vec::new();
        if !self.valid_tags.is_empty() {
            messages.push(fill_one(t::ADDED_TEMPLATE, self.valid_tags.len()));
        }
        for duplicate in &self.duplicates {
            messages.push(fill_one(t::DUPLICATE_TEMPLATE, duplicate));
        }
        if !self.too_long.is_empty() {
            messages.push(fill_one(t::TOO_LONG_TEMPLATE, max_length));
        }
        messages
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tag is empty")]
    Empty,
    #[error("tag exceeds {max} characters")]
    TooLong { max: usize },
    #[error("duplicate tag {0:?}")]
    Duplicate(String),
    #[error("at most {max} tags per article")]
    LimitReached { max: usize },
}

impl TagError {
    pub fn user_message(&self) -> String {
        match self {
            TagError::Empty => t::EMPTY.to_string(),
            TagError::TooLong { max } => fill_one(t::TOO_LONG_TEMPLATE, max),
            TagError::Duplicate(tag) => fill_one(t::DUPLICATE_TEMPLATE, tag),
            TagError::LimitReached { max } => fill_one(t::LIMIT_TEMPLATE, max),
        }
    }
}

pub fn normalize_lowercase(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Keep allow-listed acronyms uppercase, otherwise capitalize the first
/// letter and lowercase the rest.
pub fn normalize_smart(tag: &str) -> String {
    let trimmed = tag.trim();
    if let Some(acronym) = UPPERCASE_TAGS
        .iter()
        .find(|acronym| acronym.eq_ignore_ascii_case(trimmed))
    {
        return (*acronym).to_string();
    }
    let lowered = trimmed.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split `input` on the separator and sort every token into a bucket,
/// comparing against `existing` and against tags accepted earlier in the
/// same batch.
pub fn parse_bulk_tags(input: &str, existing: &[String], options: &TagParseOptions) -> TagBatch {
    let mut seen: HashSet<String> = existing
        .iter()
        .map(|tag| options.key(&options.normalizer.apply(tag.trim())))
        .collect();
    let mut batch = TagBatch::default();

    for token in input.split(options.separator) {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            batch.empty_count += 1;
            continue;
        }
        if trimmed.chars().count() > options.max_length {
            batch.too_long.push(trimmed.to_string());
            continue;
        }
        let normalized = options.normalizer.apply(trimmed);
        if normalized.trim().is_empty() {
            batch.empty_count += 1;
            continue;
        }
        if seen.insert(options.key(&normalized)) {
            batch.valid_tags.push(normalized);
        } else {
            batch.duplicates.push(normalized);
        }
    }

    tracing::debug!(
        valid = batch.valid_tags.len(),
        duplicates = batch.duplicates.len(),
        too_long = batch.too_long.len(),
        empty = batch.empty_count,
        "parsed tag batch"
    );
    batch
}

/// Validate and normalize a single tag against the current set.
pub fn validate_tag(
    tag: &str,
    existing: &[String],
    options: &TagParseOptions,
) -> Result<String, TagError> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(TagError::Empty);
    }
    if trimmed.chars().count() > options.max_length {
        return Err(TagError::TooLong {
            max: options.max_length,
        });
    }
    let normalized = options.normalizer.apply(trimmed);
    let key = options.key(&normalized);
    if existing
        .iter()
        .any(|tag| options.key(&options.normalizer.apply(tag.trim())) == key)
    {
        return Err(TagError::Duplicate(normalized));
    }
    Ok(normalized)
}

/// Add one tag typed on its own (Enter in the widget).
pub fn add_tag(
    tag: &str,
    existing: &[String],
    options: &TagParseOptions,
) -> Result<Vec<String>, TagError> {
    if existing.len() >= MAX_TAGS_PER_ARTICLE {
        return Err(TagError::LimitReached {
            max: MAX_TAGS_PER_ARTICLE,
        });
    }
    let normalized = validate_tag(tag, existing, options)?;
    let mut next = existing.to_vec();
    next.push(normalized);
    Ok(next)
}

/// Append accepted tags up to [`MAX_TAGS_PER_ARTICLE`].
///
/// Returns the merged list and the tags that did not fit.
pub fn merge_tags(existing: &[String], accepted: &[String]) -> (Vec<String>, Vec<String>) {
    let room = MAX_TAGS_PER_ARTICLE.saturating_sub(existing.len());
    let mut merged = existing.to_vec();
    merged.extend(accepted.iter().take(room).cloned());
    let overflow = accepted.iter().skip(room).cloned().collect();
    (merged, overflow)
}

/// Suggestions for the dropdown: prefix matches first, then substring
/// matches, skipping tags already selected. Comparison ignores case.
pub fn suggest_tags(
    query: &str,
    available: &[String],
    selected: &[String],
    limit: usize,
) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }
    let selected: HashSet<String> = selected.iter().map(|tag| tag.to_lowercase()).collect();
    let candidates = available
        .iter()
        .filter(|tag| !selected.contains(&tag.to_lowercase()));

    let (mut prefix, mut contains): (Vec<&String>, Vec<&String>) = (Vec::new(), Vec::new());
    for tag in candidates {
        let lowered = tag.to_lowercase();
        if lowered.starts_with(&query) {
            prefix.push(tag);
        } else if lowered.contains(&query) {
            contains.push(tag);
        }
    }
    prefix.append(&mut contains);
    prefix.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn mixed_batch_is_fully_accounted() {
        let input = "React, react, , API, thisistoolongtagthisistoolongtagthisistoolongtag1234567890";
        let batch = parse_bulk_tags(input, &[], &TagParseOptions::default());

        assert_eq!(batch.valid_tags, strings(&["react", "api"]));
        assert_eq!(batch.duplicates, strings(&["react"]));
        assert_eq!(batch.too_long.len(), 1);
        assert_eq!(batch.empty_count, 1);
        assert_eq!(batch.token_count(), input.split(',').count());
    }

    #[test]
    fn existing_tags_count_as_duplicates() {
        let existing = strings(&["IQ", "Tư duy"]);
        let batch = parse_bulk_tags("iq, tư duy, logic", &existing, &TagParseOptions::default());
        assert_eq!(batch.valid_tags, strings(&["logic"]));
        assert_eq!(batch.duplicates, strings(&["iq", "tư duy"]));
    }

    #[test]
    fn case_sensitive_mode_keeps_variants() {
        let options = TagParseOptions {
            case_sensitive: true,
            normalizer: TagNormalizer::Preserve,
            ..TagParseOptions::default()
        };
        let batch = parse_bulk_tags("Rust;rust;RUST;rust", &[], &TagParseOptions {
            separator: ';',
            ..options
        });
        assert_eq!(batch.valid_tags, strings(&["Rust", "rust", "RUST"]));
        assert_eq!(batch.duplicates, strings(&["rust"]));
    }

    #[test]
    fn accounting_holds_for_assorted_inputs() {
        let long = "x".repeat(51);
        let inputs = [
            "",
            ",,,",
            "a,b,a,B, c ,",
            "seo, SEO, Seo, api",
            long.as_str(),
            "một, hai, Một, ba,,",
        ];
        for normalizer in [TagNormalizer::Lowercase, TagNormalizer::Smart, TagNormalizer::Preserve] {
            let options = TagParseOptions {
                normalizer,
                ..TagParseOptions::default()
            };
            for input in inputs {
                let batch = parse_bulk_tags(input, &strings(&["b"]), &options);
                assert_eq!(batch.token_count(), input.split(',').count(), "{input:?}");
            }
        }
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let viet = "ư".repeat(50);
        let batch = parse_bulk_tags(&viet, &[], &TagParseOptions::default());
        assert_eq!(batch.valid_tags.len(), 1);
        assert!(batch.too_long.is_empty());
    }

    #[test]
    fn smart_normalizer_keeps_acronyms() {
        assert_eq!(normalize_smart("seo"), "SEO");
        assert_eq!(normalize_smart(" iq "), "IQ");
        assert_eq!(normalize_smart("tRÍ TUỆ"), "Trí tuệ");
        assert_eq!(normalize_smart("ứng dụng"), "Ứng dụng");
        assert_eq!(normalize_smart(""), "");
    }

    #[test]
    fn custom_normalizer_is_applied() {
        fn hashtag(tag: &str) -> String {
            format!("#{}", tag.trim().to_lowercase())
        }
        let options = TagParseOptions {
            normalizer: TagNormalizer::Custom(hashtag),
            ..TagParseOptions::default()
        };
        let batch = parse_bulk_tags("Logic, logic", &[], &options);
        assert_eq!(batch.valid_tags, strings(&["#logic"]));
        assert_eq!(batch.duplicates, strings(&["#logic"]));
    }

    #[test]
    fn validate_tag_reports_errors() {
        let options = TagParseOptions::default();
        let existing = strings(&["react"]);
        assert_eq!(validate_tag("  ", &existing, &options), Err(TagError::Empty));
        assert_eq!(
            validate_tag("REACT", &existing, &options),
            Err(TagError::Duplicate("react".to_string()))
        );
        assert_eq!(
            validate_tag(&"a".repeat(51), &existing, &options),
            Err(TagError::TooLong {
                max: 50
            })
        );
        assert_eq!(validate_tag(" Vue ", &existing, &options), Ok("vue".to_string()));
    }

    #[test]
    fn add_tag_appends_or_explains() {
        let options = TagParseOptions::default();
        let existing = strings(&["react"]);
        assert_eq!(add_tag(" Vue ", &existing, &options), Ok(strings(&["react", "vue"])));
        let err = add_tag("React", &existing, &options).unwrap_err();
        assert_eq!(err.user_message(), fill_one(t::DUPLICATE_TEMPLATE, "react"));

        let full: Vec<String> = (0..MAX_TAGS_PER_ARTICLE).map(|i| format!("t{i}")).collect();
        let err = add_tag("moi", &full, &options).unwrap_err();
        assert_eq!(
            err,
            TagError::LimitReached {
                max: MAX_TAGS_PER_ARTICLE
            }
        );
        assert_eq!(err.user_message(), fill_one(t::LIMIT_TEMPLATE, MAX_TAGS_PER_ARTICLE));
    }

    #[test]
    fn merge_respects_article_limit() {
        let existing: Vec<String> = (0..8).map(|i| format!("t{i}")).collect();
        let (merged, overflow) = merge_tags(&existing, &strings(&["a", "b", "c"]));
        assert_eq!(merged.len(), MAX_TAGS_PER_ARTICLE);
        assert_eq!(overflow, strings(&["c"]));
    }

    #[test]
    fn suggestions_prefer_prefix_matches() {
        let available = strings(&["Logic", "Tâm lý học", "IQ cao", "Kỹ năng logic", "EQ"]);
        let suggestions = suggest_tags("lo", &available, &strings(&[]), 5);
        assert_eq!(suggestions, strings(&["Logic", "Kỹ năng logic"]));

        let without_selected = suggest_tags("lo", &available, &strings(&["logic"]), 5);
        assert_eq!(without_selected, strings(&["Kỹ năng logic"]));
        assert!(suggest_tags("  ", &available, &[], 5).is_empty());
    }

    #[test]
    fn messages_are_vietnamese() {
        let batch = TagBatch {
            valid_tags: strings(&["a"]),
            duplicates: strings(&["b"]),
            too_long: strings(&["c"]),
            empty_count: 0,
        };
        let messages = batch.messages(50);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], "Đã thêm 1 thẻ");
        assert!(messages[1].contains("\"b\""));
    }
}
