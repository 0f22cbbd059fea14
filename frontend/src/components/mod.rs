// Reusable components live here.

pub mod badge;
pub mod error_banner;
pub mod header;
pub mod leaderboard_table;
pub mod loading_spinner;
pub mod pagination;
pub mod raw_html;
pub mod seo_panel;
pub mod tags_input;
pub mod theme_toggle;
