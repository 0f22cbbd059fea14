use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    i18n::{
        current::{editor as editor_t, validation as t},
        fill_one,
    },
    slug::{generate_slug, validate_slug},
    tags::MAX_TAGS_PER_ARTICLE,
};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_EXCERPT_LENGTH: usize = 500;
pub const MAX_META_TITLE_LENGTH: usize = 60;
pub const MAX_META_DESCRIPTION_LENGTH: usize = 160;
/// `<input type="datetime-local">` value format.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] =
        [ArticleStatus::Draft, ArticleStatus::Published, ArticleStatus::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleStatus::Draft => editor_t::STATUS_DRAFT,
            ArticleStatus::Published => editor_t::STATUS_PUBLISHED,
            ArticleStatus::Archived => editor_t::STATUS_ARCHIVED,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeoFields {
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub focus_keyword: String,
}

/// Editor state of one article. Flat on purpose: every field maps to one
/// widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleForm {
    pub title: String,
    pub slug: String,
    /// HTML emitted by the rich text editor.
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub category_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Scheduled publish time in `YYYY-MM-DDTHH:MM`.
    #[serde(default)]
    pub publish_at: Option<String>,
    #[serde(default)]
    pub seo: SeoFields,
    /// Set once the user typed into the slug field; stops auto-derivation.
    #[serde(default, skip_serializing)]
    pub slug_edited: bool,
}

/// Persisted article as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(flatten)]
    pub form: ArticleForm,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Slug,
    Content,
    Excerpt,
    Categories,
    Tags,
    FeaturedImage,
    PublishAt,
    MetaTitle,
    MetaDescription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    /// Vietnamese text shown next to the field.
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .errors
            .iter()
            .map(|err| format!("{:?}", err.field))
            .collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn for_field(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl ArticleForm {
    /// Update the title; the slug follows it until edited by hand.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if !self.slug_edited {
            self.slug = generate_slug(&self.title);
        }
    }

    /// Manual slug edit. Clearing the field hands control back to the title.
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        let slug = slug.into();
        if slug.trim().is_empty() {
            self.slug_edited = false;
            self.slug = generate_slug(&self.title);
        } else {
            self.slug_edited = true;
            self.slug = generate_slug(&slug);
        }
    }

    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        self.publish_at
            .as_deref()
            .and_then(|raw| parse_datetime_local(raw).ok())
    }

    /// Client-side checks only. Slug uniqueness is the backend's call.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.push(Field::Title, t::TITLE_REQUIRED);
        } else if char_len(&self.title) > MAX_TITLE_LENGTH {
            errors.push(Field::Title, fill_one(t::TOO_LONG_TEMPLATE, MAX_TITLE_LENGTH));
        }

        if let Err(err) = validate_slug(&self.slug) {
            errors.push(Field::Slug, err.user_message());
        }

        if strip_tags(&self.content).trim().is_empty() {
            errors.push(Field::Content, t::CONTENT_REQUIRED);
        }

        if char_len(&self.excerpt) > MAX_EXCERPT_LENGTH {
            errors.push(Field::Excerpt, fill_one(t::TOO_LONG_TEMPLATE, MAX_EXCERPT_LENGTH));
        }

        if self.status == ArticleStatus::Published && self.category_ids.is_empty() {
            errors.push(Field::Categories, t::CATEGORY_REQUIRED);
        }

        if self.tags.len() > MAX_TAGS_PER_ARTICLE {
            errors.push(
                Field::Tags,
                fill_one(crate::i18n::current::tags::LIMIT_TEMPLATE, MAX_TAGS_PER_ARTICLE),
            );
        }

        if let Some(url) = self.featured_image.as_deref() {
            if !is_http_url(url) {
                errors.push(Field::FeaturedImage, t::INVALID_IMAGE_URL);
            }
        }

        if let Some(raw) = self.publish_at.as_deref() {
            if parse_datetime_local(raw).is_err() {
                errors.push(Field::PublishAt, t::INVALID_DATETIME);
            }
        }

        if char_len(&self.seo.meta_title) > MAX_META_TITLE_LENGTH {
            errors.push(Field::MetaTitle, fill_one(t::TOO_LONG_TEMPLATE, MAX_META_TITLE_LENGTH));
        }
        if char_len(&self.seo.meta_description) > MAX_META_DESCRIPTION_LENGTH {
            errors.push(
                Field::MetaDescription,
                fill_one(t::TOO_LONG_TEMPLATE, MAX_META_DESCRIPTION_LENGTH),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Stable hash of everything that gets persisted; autosave skips a
    /// save when it has not changed.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        let persisted = ArticleForm {
            slug_edited: false,
            ..self.clone()
        };
        persisted.hash(&mut hasher);
        hasher.finish()
    }
}

pub fn parse_datetime_local(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), DATETIME_LOCAL_FORMAT)
}

pub fn format_datetime_local(value: &NaiveDateTime) -> String {
    value.format(DATETIME_LOCAL_FORMAT).to_string()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn is_http_url(url: &str) -> bool {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}

/// Text content of an HTML fragment: tags removed, common entities decoded.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            },
            _ if !in_tag => text.push(c),
            _ => {},
        }
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ArticleForm {
        let mut form = ArticleForm {
            content: "<p>Chỉ số IQ đo lường khả năng suy luận.</p>".to_string(),
            ..ArticleForm::default()
        };
        form.set_title("Chỉ số IQ là gì?");
        form
    }

    #[test]
    fn slug_follows_title_until_edited() {
        let mut form = valid_form();
        assert_eq!(form.slug, "chi-so-iq-la-gi");

        form.set_slug("IQ cơ bản");
        assert_eq!(form.slug, "iq-co-ban");
        form.set_title("Tiêu đề mới");
        assert_eq!(form.slug, "iq-co-ban");

        form.set_slug("  ");
        assert_eq!(form.slug, "tieu-de-moi");
        form.set_title("Khác");
        assert_eq!(form.slug, "khac");
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let form = ArticleForm {
            content: "<p> </p>".to_string(),
            ..ArticleForm::default()
        };
        let errors = form.validate().expect_err("empty form must fail");
        assert_eq!(errors.for_field(Field::Title), Some("Vui lòng nhập tiêu đề"));
        assert!(errors.for_field(Field::Slug).is_some());
        assert!(errors.for_field(Field::Content).is_some());
        assert!(errors.for_field(Field::Categories).is_none());
    }

    #[test]
    fn published_needs_category_and_length_limits_apply() {
        let mut form = valid_form();
        form.status = ArticleStatus::Published;
        form.seo.meta_title = "x".repeat(61);
        form.seo.meta_description = "y".repeat(161);
        form.excerpt = "z".repeat(501);
        form.tags = (0..11).map(|i| format!("t{i}")).collect();
        let errors = form.validate().expect_err("limits must fail");
        for field in [
            Field::Categories,
            Field::MetaTitle,
            Field::MetaDescription,
            Field::Excerpt,
            Field::Tags,
        ] {
            assert!(errors.for_field(field).is_some(), "{field:?}");
        }
        assert_eq!(errors.for_field(Field::MetaTitle), Some("Không được vượt quá 60 ký tự"));
    }

    #[test]
    fn datetime_and_image_are_checked() {
        let mut form = valid_form();
        form.publish_at = Some("2024-13-01T10:00".to_string());
        form.featured_image = Some("ftp://cdn/x.png".to_string());
        let errors = form.validate().expect_err("bad values");
        assert!(errors.for_field(Field::PublishAt).is_some());
        assert!(errors.for_field(Field::FeaturedImage).is_some());

        form.publish_at = Some("2024-12-01T10:30".to_string());
        form.featured_image = Some("https://cdn.example.com/x.png".to_string());
        assert_eq!(form.validate(), Ok(()));
        let at = form.scheduled_at().expect("scheduled");
        assert_eq!(format_datetime_local(&at), "2024-12-01T10:30");
    }

    #[test]
    fn fingerprint_tracks_persisted_fields_only() {
        let form = valid_form();
        let mut same = form.clone();
        same.slug_edited = true;
        assert_eq!(form.fingerprint(), same.fingerprint());

        let mut changed = form.clone();
        changed.content.push_str("<p>thêm</p>");
        assert_ne!(form.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in ArticleStatus::ALL {
            assert_eq!(ArticleStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ArticleStatus::parse("deleted"), None);
    }

    #[test]
    fn strip_tags_keeps_text() {
        let text = strip_tags("<h2>IQ &amp; EQ</h2><p>Tư&nbsp;duy</p>");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["IQ", "&", "EQ", "Tư", "duy"]);
    }
}
