//! Local SEO heuristic shown beside the article editor.
//!
//! Runs entirely on the form state; the editor re-runs it on a debounce.

use serde::{Deserialize, Serialize};

use crate::{
    article::{strip_tags, ArticleForm},
    i18n::{current::seo as t, fill_one},
    slug::generate_slug,
};

const TITLE_RANGE: (usize, usize) = (30, 60);
const DESCRIPTION_RANGE: (usize, usize) = (120, 160);
const MIN_WORDS: usize = 300;
const DENSITY_RANGE: (f64, f64) = (0.5, 2.5);
const INTRO_WORDS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoCheckKind {
    FocusKeyword,
    KeywordInTitle,
    KeywordInDescription,
    KeywordInSlug,
    KeywordInIntro,
    KeywordDensity,
    TitleLength,
    DescriptionLength,
    WordCount,
    Headings,
    ImageAlt,
}

impl SeoCheckKind {
    /// Points awarded when the check passes; all weights sum to 100.
    pub fn weight(self) -> u8 {
        match self {
            SeoCheckKind::KeywordInTitle => 15,
            SeoCheckKind::FocusKeyword
            | SeoCheckKind::KeywordInDescription
            | SeoCheckKind::KeywordInSlug
            | SeoCheckKind::KeywordInIntro
            | SeoCheckKind::KeywordDensity
            | SeoCheckKind::TitleLength
            | SeoCheckKind::DescriptionLength => 10,
            SeoCheckKind::WordCount | SeoCheckKind::Headings | SeoCheckKind::ImageAlt => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoCheck {
    pub kind: SeoCheckKind,
    pub passed: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoGrade {
    Good,
    NeedsWork,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    pub score: u8,
    pub word_count: usize,
    pub keyword_density: Option<f64>,
    pub checks: Vec<SeoCheck>,
}

impl SeoReport {
    pub fn grade(&self) -> SeoGrade {
        match self.score {
            80.. => SeoGrade::Good,
            50..=79 => SeoGrade::NeedsWork,
            _ => SeoGrade::Poor,
        }
    }

    pub fn summary(&self) -> String {
        fill_one(t::SCORE_TEMPLATE, self.score)
    }

    pub fn failed(&self) -> impl Iterator<Item = &SeoCheck> {
        self.checks.iter().filter(|check| !check.passed)
    }
}

pub fn analyze(form: &ArticleForm) -> SeoReport {
    let text = strip_tags(&form.content);
    let lowered_text = text.to_lowercase();
    let words: Vec<&str> = lowered_text.split_whitespace().collect();
    let word_count = words.len();
    let keyword = form.seo.focus_keyword.trim().to_lowercase();
    let title = effective_title(form);
    let mut checks = Vec::with_capacity(11);
    let mut keyword_density = None;

    if keyword.is_empty() {
        checks.push(check(SeoCheckKind::FocusKeyword, false, t::NO_KEYWORD));
    } else {
        checks.push(check(SeoCheckKind::FocusKeyword, true, form.seo.focus_keyword.trim()));

        let in_title = title.to_lowercase().contains(&keyword);
        checks.push(check(
            SeoCheckKind::KeywordInTitle,
            in_title,
            if in_title { t::KEYWORD_IN_TITLE } else { t::KEYWORD_NOT_IN_TITLE },
        ));

        let in_description = form.seo.meta_description.to_lowercase().contains(&keyword);
        checks.push(check(
            SeoCheckKind::KeywordInDescription,
            in_description,
            if in_description { t::KEYWORD_IN_DESCRIPTION } else { t::KEYWORD_NOT_IN_DESCRIPTION },
        ));

        let keyword_slug = generate_slug(&keyword);
        let in_slug = !keyword_slug.is_empty() && form.slug.contains(&keyword_slug);
        checks.push(check(
            SeoCheckKind::KeywordInSlug,
            in_slug,
            if in_slug { t::KEYWORD_IN_SLUG } else { t::KEYWORD_NOT_IN_SLUG },
        ));

        let intro = intro_text(&form.content).to_lowercase();
        let in_intro = intro.contains(&keyword);
        checks.push(check(
            SeoCheckKind::KeywordInIntro,
            in_intro,
            if in_intro { t::KEYWORD_IN_INTRO } else { t::KEYWORD_NOT_IN_INTRO },
        ));

        let density = density_percent(&words, &keyword);
        keyword_density = Some(density);
        let shown = format!("{density:.1}");
        let (passed, message) = if density < DENSITY_RANGE.0 {
            (false, fill_one(t::DENSITY_LOW_TEMPLATE, &shown))
        } else if density > DENSITY_RANGE.1 {
            (false, fill_one(t::DENSITY_HIGH_TEMPLATE, &shown))
        } else {
            (true, fill_one(t::DENSITY_OK_TEMPLATE, &shown))
        };
        checks.push(check(SeoCheckKind::KeywordDensity, passed, message));
    }

    let title_len = title.chars().count();
    let title_ok = (TITLE_RANGE.0..=TITLE_RANGE.1).contains(&title_len);
    checks.push(check(
        SeoCheckKind::TitleLength,
        title_ok,
        if title_ok {
            t::TITLE_LENGTH_OK.to_string()
        } else {
            fill_one(t::TITLE_LENGTH_BAD_TEMPLATE, title_len)
        },
    ));

    let description_len = form.seo.meta_description.trim().chars().count();
    let description_ok = (DESCRIPTION_RANGE.0..=DESCRIPTION_RANGE.1).contains(&description_len);
    checks.push(check(
        SeoCheckKind::DescriptionLength,
        description_ok,
        if description_ok {
            t::DESCRIPTION_LENGTH_OK.to_string()
        } else {
            fill_one(t::DESCRIPTION_LENGTH_BAD_TEMPLATE, description_len)
        },
    ));

    let enough_words = word_count >= MIN_WORDS;
    checks.push(check(
        SeoCheckKind::WordCount,
        enough_words,
        if enough_words {
            fill_one(t::WORD_COUNT_OK_TEMPLATE, word_count)
        } else {
            fill_one(t::WORD_COUNT_LOW_TEMPLATE, word_count)
        },
    ));

    let lowered_html = form.content.to_lowercase();
    let has_headings = lowered_html.contains("<h2") || lowered_html.contains("<h3");
    checks.push(check(
        SeoCheckKind::Headings,
        has_headings,
        if has_headings { t::HEADINGS_OK } else { t::HEADINGS_MISSING },
    ));

    let missing_alt = images_without_alt(&lowered_html);
    checks.push(check(
        SeoCheckKind::ImageAlt,
        missing_alt == 0,
        if missing_alt == 0 {
            t::IMAGES_ALT_OK.to_string()
        } else {
            fill_one(t::IMAGES_ALT_MISSING_TEMPLATE, missing_alt)
        },
    ));

    let score = checks
        .iter()
        .filter(|check| check.passed)
        .map(|check| u32::from(check.kind.weight()))
        .sum::<u32>()
        .min(100) as u8;

    SeoReport {
        score,
        word_count,
        keyword_density,
        checks,
    }
}

fn check(kind: SeoCheckKind, passed: bool, message: impl Into<String>) -> SeoCheck {
    SeoCheck {
        kind,
        passed,
        message: message.into(),
    }
}

fn effective_title(form: &ArticleForm) -> &str {
    let meta = form.seo.meta_title.trim();
    if meta.is_empty() {
        form.title.trim()
    } else {
        meta
    }
}

/// First paragraph if the content has one, otherwise the first words.
fn intro_text(html: &str) -> String {
    let lowered = html.to_ascii_lowercase();
    if let Some(start) = lowered.find("<p>").or_else(|| lowered.find("<p ")) {
        if let Some(end) = lowered[start..].find("</p>") {
            let paragraph = strip_tags(&html[start..start + end]);
            if !paragraph.trim().is_empty() {
                return paragraph;
            }
        }
    }
    strip_tags(html)
        .split_whitespace()
        .take(INTRO_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Share of words taken by occurrences of the (possibly multi-word) keyword.
fn density_percent(words: &[&str], keyword: &str) -> f64 {
    let keyword_words: Vec<&str> = keyword.split_whitespace().collect();
    if words.is_empty() || keyword_words.is_empty() || words.len() < keyword_words.len() {
        return 0.0;
    }
    let hits = words
        .windows(keyword_words.len())
        .filter(|window| {
            window
                .iter()
                .zip(&keyword_words)
                .all(|(word, kw)| trim_punctuation(word) == *kw)
        })
        .count();
    (hits * keyword_words.len()) as f64 / words.len() as f64 * 100.0
}

fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

fn images_without_alt(lowered_html: &str) -> usize {
    let mut missing = 0;
    let mut rest = lowered_html;
    while let Some(pos) = rest.find("<img") {
        let tail = &rest[pos..];
        let end = tail.find('>').unwrap_or(tail.len());
        let tag = &tail[..end];
        if !has_non_empty_alt(tag) {
            missing += 1;
        }
        rest = &tail[end..];
    }
    missing
}

fn has_non_empty_alt(tag: &str) -> bool {
    let mut search = 0;
    while let Some(found) = tag[search..].find("alt") {
        let start = search + found;
        search = start + "alt".len();
        if !tag[..start].ends_with(|c: char| c.is_ascii_whitespace()) {
            continue;
        }
        let Some(value) = tag[search..].trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();
        return match value.chars().next() {
            Some(quote @ ('"' | '\'')) => value[1..]
                .split(quote)
                .next()
                .is_some_and(|text| !text.trim().is_empty()),
            // Unquoted: runs to the next space or self-closing slash.
            Some(_) => value
                .split(|c: char| c.is_ascii_whitespace() || c == '/')
                .next()
                .is_some_and(|text| !text.is_empty()),
            None => false,
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::SeoFields;

    fn long_body(keyword: &str, filler_words: usize, keyword_every: usize) -> String {
        let mut words = Vec::new();
        for idx in 0..filler_words {
            if idx % keyword_every == 0 {
                words.push(keyword.to_string());
            } else {
                words.push("nội-dung".to_string());
            }
        }
        format!("<p>{}</p><h2>Phần hai</h2><p>Kết thúc.</p>", words.join(" "))
    }

    fn optimized_form() -> ArticleForm {
        let mut form = ArticleForm {
            content: long_body("iq", 400, 80),
            seo: SeoFields {
                meta_title: String::new(),
                meta_description: format!("Tìm hiểu iq và cách đo lường trí tuệ. {}", "x".repeat(90)),
                focus_keyword: "IQ".to_string(),
            },
            ..ArticleForm::default()
        };
        form.set_title("IQ là gì? Cách đo chỉ số thông minh chuẩn");
        form
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        let kinds = [
            SeoCheckKind::FocusKeyword,
            SeoCheckKind::KeywordInTitle,
            SeoCheckKind::KeywordInDescription,
            SeoCheckKind::KeywordInSlug,
            SeoCheckKind::KeywordInIntro,
            SeoCheckKind::KeywordDensity,
            SeoCheckKind::TitleLength,
            SeoCheckKind::DescriptionLength,
            SeoCheckKind::WordCount,
            SeoCheckKind::Headings,
            SeoCheckKind::ImageAlt,
        ];
        let total: u32 = kinds.iter().map(|k| u32::from(k.weight())).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn optimized_article_scores_full_marks() {
        let report = analyze(&optimized_form());
        let failed: Vec<_> = report.failed().map(|c| c.kind).collect();
        assert!(failed.is_empty(), "{failed:?}");
        assert_eq!(report.score, 100);
        assert_eq!(report.grade(), SeoGrade::Good);
        assert_eq!(report.summary(), "Điểm SEO: 100/100");
    }

    #[test]
    fn missing_keyword_fails_keyword_checks() {
        let mut form = optimized_form();
        form.seo.focus_keyword.clear();
        let report = analyze(&form);
        assert_eq!(report.keyword_density, None);
        assert!(report
            .checks
            .iter()
            .any(|c| c.kind == SeoCheckKind::FocusKeyword && !c.passed));
        assert_eq!(report.score, 35);
        assert_eq!(report.grade(), SeoGrade::Poor);
    }

    #[test]
    fn density_flags_keyword_stuffing() {
        let mut form = optimized_form();
        form.content = long_body("iq", 400, 2);
        let report = analyze(&form);
        let density = report
            .checks
            .iter()
            .find(|c| c.kind == SeoCheckKind::KeywordDensity)
            .expect("density check");
        assert!(!density.passed);
        assert!(density.message.contains("quá cao"));
    }

    #[test]
    fn multi_word_keyword_density() {
        let words = ["bài", "test", "iq", "là", "bài", "test", "iq", "miễn", "phí", "nhé"];
        let density = density_percent(&words, "bài test iq");
        assert!((density - 60.0).abs() < 1e-9);
    }

    #[test]
    fn images_need_alt_text() {
        let html = r#"<img src="a.png" alt="Biểu đồ"><img src="b.png"><img alt="" src="c.png">"#;
        assert_eq!(images_without_alt(&html.to_lowercase()), 2);
        assert_eq!(images_without_alt("<p>không có ảnh</p>"), 0);
    }

    #[test]
    fn unquoted_alt_counts_as_present() {
        assert_eq!(images_without_alt("<img alt=bieu-do src=x>"), 0);
        assert_eq!(images_without_alt("<img src=x alt=do-thi/>"), 0);
        assert_eq!(images_without_alt("<img src=salt.png>"), 1);
        assert_eq!(images_without_alt("<img data-alt=\"x\" src=y>"), 1);
        assert_eq!(images_without_alt("<img src=x alt=>"), 1);
        assert_eq!(images_without_alt("<img alt = 'so do' src=x>"), 0);
    }

    #[test]
    fn intro_prefers_first_paragraph() {
        let html = "<h1>Tiêu đề</h1><p>Đoạn mở đầu về EQ.</p><p>Đoạn hai.</p>";
        assert_eq!(intro_text(html).trim(), "Đoạn mở đầu về EQ.");
    }
}
