//! Domain core of the IQ/EQ testing site: slugs, tags, the leaderboard page
//! cache, the admin article form and everything the editor and the public
//! pages share.

use serde::{Deserialize, Serialize};

pub mod article;
pub mod backend;
pub mod config;
pub mod error;
pub mod i18n;
pub mod leaderboard;
pub mod pagination;
pub mod perf;
pub mod preferences;
pub mod request_seq;
pub mod save_latch;
pub mod seo;
pub mod slug;
pub mod tags;

#[cfg(not(target_arch = "wasm32"))]
pub mod autosave;
#[cfg(not(target_arch = "wasm32"))]
pub mod debounce;

pub use article::{Article, ArticleForm, ArticleStatus};
pub use error::SiteError;
pub use leaderboard::{BadgeTier, LeaderboardEntry};

/// Article category, offered as checkboxes in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Article author, picked from a dropdown in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Tag as stored by the backend, with how many articles use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub count: usize,
}
