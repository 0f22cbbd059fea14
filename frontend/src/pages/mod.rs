pub mod article_detail;
pub mod article_editor;
pub mod leaderboard;
pub mod not_found;
