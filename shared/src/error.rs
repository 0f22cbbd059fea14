//! Site-wide error type. Every variant maps to a Vietnamese message that is
//! safe to show to a reader; raw error text stays in the logs.

use thiserror::Error;

use crate::{
    article::ValidationErrors,
    backend::BackendError,
    i18n::current::errors as t,
    slug::SlugError,
    tags::TagError,
};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid tag: {0:?}")]
    Tag(#[from] TagError),

    #[error("invalid slug: {0:?}")]
    Slug(#[from] SlugError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl SiteError {
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Validation(errors) => match errors.errors.first() {
                Some(first) => first.message.clone(),
                None => t::VALIDATION.to_string(),
            },
            SiteError::Tag(err) => err.user_message(),
            SiteError::Slug(err) => err.user_message(),
            SiteError::Backend(err) => err.user_message().to_string(),
            SiteError::Unexpected(_) => t::UNEXPECTED.to_string(),
        }
    }

    /// Errors worth retrying without user action.
    pub fn is_transient(&self) -> bool {
        matches!(self, SiteError::Backend(err) if err.is_transient())
    }
}

impl From<anyhow::Error> for SiteError {
    fn from(err: anyhow::Error) -> Self {
        SiteError::Unexpected(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleForm;

    #[test]
    fn backend_errors_never_leak_raw_text() {
        let err = SiteError::from(BackendError::Server {
            status: 500,
            message: "panic at db.rs:42".to_string(),
        });
        assert_eq!(err.user_message(), t::SERVER);
        assert!(err.is_transient());
    }

    #[test]
    fn validation_error_shows_first_field_message() {
        let form = ArticleForm::default();
        let errors = form.validate().unwrap_err();
        let expected = errors.errors[0].message.clone();
        assert_eq!(SiteError::from(errors).user_message(), expected);
    }

    #[test]
    fn anyhow_errors_become_unexpected() {
        let err = SiteError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.user_message(), t::UNEXPECTED);
        assert!(!err.is_transient());
    }
}
