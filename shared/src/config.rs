use std::{env, time::Duration};

/// Leaderboard rows per page.
pub const PAGE_SIZE: usize = 15;
/// Pages kept by the leaderboard cache before eviction kicks in.
pub const MAX_CACHED_PAGES: usize = 15;

const DEFAULT_SUGGESTION_DEBOUNCE_MS: u64 = 150;
const DEFAULT_SEO_DEBOUNCE_MS: u64 = 500;
const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 2000;
const DEFAULT_BANNER_DISMISS_MS: u64 = 3000;

/// Tunables shared by the editor, the leaderboard and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub page_size: usize,
    pub max_cached_pages: usize,
    pub suggestion_debounce: Duration,
    pub seo_debounce: Duration,
    pub autosave_debounce: Duration,
    pub banner_dismiss: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_cached_pages: MAX_CACHED_PAGES,
            suggestion_debounce: Duration::from_millis(DEFAULT_SUGGESTION_DEBOUNCE_MS),
            seo_debounce: Duration::from_millis(DEFAULT_SEO_DEBOUNCE_MS),
            autosave_debounce: Duration::from_millis(DEFAULT_AUTOSAVE_DEBOUNCE_MS),
            banner_dismiss: Duration::from_millis(DEFAULT_BANNER_DISMISS_MS),
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by `IQTEST_*` environment variables.
    ///
    /// Unparsable values are ignored with a warning so a typo never takes
    /// the site down.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = parse_var(&lookup, "IQTEST_PAGE_SIZE") {
            config.page_size = (value as usize).max(1);
        }
        if let Some(value) = parse_var(&lookup, "IQTEST_MAX_CACHED_PAGES") {
            config.max_cached_pages = (value as usize).max(1);
        }
        if let Some(ms) = parse_var(&lookup, "IQTEST_SUGGESTION_DEBOUNCE_MS") {
            config.suggestion_debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, "IQTEST_SEO_DEBOUNCE_MS") {
            config.seo_debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, "IQTEST_AUTOSAVE_DEBOUNCE_MS") {
            config.autosave_debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, "IQTEST_BANNER_DISMISS_MS") {
            config.banner_dismiss = Duration::from_millis(ms);
        }
        config
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("ignoring {key}={raw:?}: {err}");
            None
        },
    }
}
