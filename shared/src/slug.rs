//! URL slugs derived from (Vietnamese) titles.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::i18n::{current::slug as t, fill_one};

pub const MAX_SLUG_LENGTH: usize = 200;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("static regex"));
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").expect("static regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
    #[error("slug is not lowercase kebab-case: {0:?}")]
    Invalid(String),
    #[error("slug is longer than {max} characters")]
    TooLong { max: usize },
}

impl SlugError {
    pub fn user_message(&self) -> String {
        match self {
            SlugError::Empty => t::EMPTY.to_string(),
            SlugError::Invalid(_) => t::INVALID.to_string(),
            SlugError::TooLong { max } => fill_one(t::TOO_LONG_TEMPLATE, max),
        }
    }
}

/// Derive a URL slug from a title.
///
/// Vietnamese diacritics fold to their base letter (`đ` → `d`), punctuation
/// acts as a word separator and the output only contains `[a-z0-9-]` with no
/// leading, trailing or doubled hyphen. Already-valid slugs are returned
/// unchanged.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let folded = lowered
        .split_whitespace()
        .map(fold_word)
        .collect::<Vec<_>>()
        .join(" ");
    let cleaned = DISALLOWED.replace_all(&folded, " ");
    let hyphenated = SEPARATOR_RUN.replace_all(&cleaned, "-");
    truncate_at_boundary(hyphenated.trim_matches('-'), MAX_SLUG_LENGTH)
}

pub fn is_valid_slug(slug: &str) -> bool {
    validate_slug(slug).is_ok()
}

pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(SlugError::TooLong {
            max: MAX_SLUG_LENGTH,
        });
    }
    let well_formed = !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(SlugError::Invalid(slug.to_string()))
    }
}

/// Candidate to try after the backend reported `base` as taken.
///
/// `attempt` 0 and 1 yield `base`; later attempts append `-2`, `-3`, ...
pub fn unique_slug_candidate(base: &str, attempt: usize) -> String {
    if attempt <= 1 {
        return base.to_string();
    }
    let suffix = format!("-{attempt}");
    let room = MAX_SLUG_LENGTH.saturating_sub(suffix.len());
    let stem = truncate_at_boundary(base, room);
    format!("{stem}{suffix}")
}

fn fold_word(word: &str) -> String {
    word.chars().filter_map(fold_char).collect()
}

/// Fold one Vietnamese letter to ASCII. Combining marks (NFD input) vanish.
fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'À' | 'Á' | 'Ả' | 'Ã' | 'Ạ' | 'Ă' | 'Ằ' | 'Ắ' | 'Ẳ' | 'Ẵ' | 'Ặ' | 'Â' | 'Ầ' | 'Ấ' | 'Ẩ'
        | 'Ẫ' | 'Ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'È' | 'É' | 'Ẻ' | 'Ẽ' | 'Ẹ' | 'Ê' | 'Ề' | 'Ế' | 'Ể' | 'Ễ' | 'Ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'Ì' | 'Í' | 'Ỉ' | 'Ĩ' | 'Ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'Ò' | 'Ó' | 'Ỏ' | 'Õ' | 'Ọ' | 'Ô' | 'Ồ' | 'Ố' | 'Ổ' | 'Ỗ' | 'Ộ' | 'Ơ' | 'Ờ' | 'Ớ' | 'Ở'
        | 'Ỡ' | 'Ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'Ù' | 'Ú' | 'Ủ' | 'Ũ' | 'Ụ' | 'Ư' | 'Ừ' | 'Ứ' | 'Ử' | 'Ữ' | 'Ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'Ỳ' | 'Ý' | 'Ỷ' | 'Ỹ' | 'Ỵ' => 'y',
        'đ' | 'Đ' => 'd',
        '\u{0300}'..='\u{036f}' => return None,
        other => other,
    };
    Some(folded)
}

// Cuts on a hyphen so the result never ends mid-word or with a hyphen.
fn truncate_at_boundary(slug: &str, max: usize) -> String {
    if slug.len() <= max {
        return slug.to_string();
    }
    let mut end = max;
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    let head = &slug[..end];
    let cut = match head.rfind('-') {
        Some(pos) if pos > 0 && !slug[end..].starts_with('-') => &head[..pos],
        _ => head,
    };
    cut.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vietnamese_title_becomes_ascii_slug() {
        assert_eq!(generate_slug("Hướng dẫn React & Vue.js"), "huong-dan-react-vue-js");
        assert_eq!(generate_slug("  Đánh giá   chỉ số IQ  "), "danh-gia-chi-so-iq");
        assert_eq!(generate_slug("Trắc nghiệm EQ: Bạn có thấu cảm?"), "trac-nghiem-eq-ban-co-thau-cam");
        assert_eq!(generate_slug("ỨNG DỤNG TƯ DUY LOGIC"), "ung-dung-tu-duy-logic");
    }

    #[test]
    fn separators_collapse_and_edges_are_trimmed() {
        assert_eq!(generate_slug("--hello___world--"), "hello-world");
        assert_eq!(generate_slug("a - b _ c"), "a-b-c");
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug(""), "");
    }

    #[test]
    fn decomposed_marks_are_dropped_not_split() {
        // "Việt" written with combining marks.
        let nfd = "Vie\u{0323}\u{0302}t Nam";
        assert_eq!(generate_slug(nfd), "viet-nam");
    }

    #[test]
    fn slug_generation_is_idempotent() {
        let samples = [
            "Hướng dẫn React & Vue.js",
            "Top 10 câu hỏi IQ khó nhất 2024",
            "  __weird__--input__ ",
            "Ưu điểm của bài test EQ",
            "already-a-slug",
            "mixed_CASE and 数字 123",
        ];
        for sample in samples {
            let once = generate_slug(sample);
            assert_eq!(generate_slug(&once), once, "input {sample:?}");
            assert!(once.is_empty() || is_valid_slug(&once), "output {once:?}");
        }
    }

    #[test]
    fn long_titles_are_cut_on_a_word_boundary() {
        let title = "tri tue nhan tao ".repeat(30);
        let slug = generate_slug(&title);
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(is_valid_slug(&slug));
        assert!(slug.starts_with("tri-tue-nhan-tao-"));
    }

    #[test]
    fn validate_slug_reports_reason() {
        assert_eq!(validate_slug(""), Err(SlugError::Empty));
        assert!(matches!(validate_slug("-abc"), Err(SlugError::Invalid(_))));
        assert!(matches!(validate_slug("a--b"), Err(SlugError::Invalid(_))));
        assert!(matches!(validate_slug("Hoa"), Err(SlugError::Invalid(_))));
        assert_eq!(
            validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)),
            Err(SlugError::TooLong {
                max: MAX_SLUG_LENGTH
            })
        );
        assert!(validate_slug("iq-test-2024").is_ok());
    }

    #[test]
    fn unique_candidates_append_counter() {
        assert_eq!(unique_slug_candidate("bai-test", 0), "bai-test");
        assert_eq!(unique_slug_candidate("bai-test", 1), "bai-test");
        assert_eq!(unique_slug_candidate("bai-test", 3), "bai-test-3");
        let long = "a".repeat(MAX_SLUG_LENGTH);
        let candidate = unique_slug_candidate(&long, 12);
        assert!(candidate.len() <= MAX_SLUG_LENGTH);
        assert!(candidate.ends_with("-12"));
    }
}
