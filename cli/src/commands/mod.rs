pub mod autosave;
pub mod leaderboard;
pub mod seo;
pub mod slug;
pub mod tags;
pub mod theme;
pub mod validate;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Slug {
            title,
            attempt,
            check,
        } => slug::run(&title.join(" "), attempt, check),
        Commands::Tags {
            input,
            existing,
            normalizer,
            case_sensitive,
            max_length,
            suggest,
            json,
        } => tags::run(tags::TagsArgs {
            input,
            existing,
            normalizer,
            case_sensitive,
            max_length,
            suggest,
            json,
        }),
        Commands::Leaderboard {
            file,
            page,
            location,
            gender,
            country,
            age,
            stats,
        } => leaderboard::run(&file, page, location, gender, country, age, stats),
        Commands::Seo {
            file,
            json,
        } => seo::run(&file, json),
        Commands::Validate {
            file,
        } => validate::run(&file),
        Commands::Autosave {
            edits,
            store,
            id,
            gap_ms,
        } => autosave::run(&edits, &store, id, gap_ms).await,
        Commands::Theme {
            set,
            prefs,
        } => theme::run(set, &prefs),
    }
}
