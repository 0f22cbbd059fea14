use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NormalizerArg {
    Lowercase,
    Smart,
    Preserve,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AgeArg {
    Under18,
    #[value(name = "18-24")]
    From18To24,
    #[value(name = "25-34")]
    From25To34,
    #[value(name = "35-44")]
    From35To44,
    #[value(name = "45+")]
    Over45,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

#[derive(Parser)]
#[command(name = "iq-cli", version, about = "IQ test site content tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a URL slug from a title.
    Slug {
        /// Title words; joined with spaces.
        #[arg(required = true)]
        title: Vec<String>,
        /// Print the nth uniqueness candidate (`slug-2`, `slug-3`, ...).
        #[arg(long, default_value_t = 1)]
        attempt: usize,
        /// Validate an existing slug instead of generating one.
        #[arg(long)]
        check: bool,
    },
    /// Parse a comma-separated tag batch.
    Tags {
        /// Raw input, e.g. `"React, api, react"`.
        input: String,
        /// Tags already on the article (comma-separated).
        #[arg(long, default_value = "")]
        existing: String,
        #[arg(long, value_enum, default_value_t = NormalizerArg::Lowercase)]
        normalizer: NormalizerArg,
        #[arg(long)]
        case_sensitive: bool,
        #[arg(long)]
        max_length: Option<usize>,
        /// Print suggestions for this query from `--existing` plus the batch.
        #[arg(long)]
        suggest: Option<String>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Page through a leaderboard JSON file.
    Leaderboard {
        /// JSON array of leaderboard entries.
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rank locally within a city or country.
        #[arg(long)]
        location: Option<String>,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long, value_enum)]
        age: Option<AgeArg>,
        /// Print aggregate statistics after the table.
        #[arg(long)]
        stats: bool,
    },
    /// Score the SEO of an article form JSON file.
    Seo {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Validate an article form JSON file.
    Validate {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replay a sequence of edits through the debounced autosaver.
    Autosave {
        /// JSON array of article forms, oldest first (or a single form).
        #[arg(long)]
        edits: PathBuf,
        /// Article store; created when missing and rewritten after saving.
        #[arg(long, default_value = "./data/articles.json")]
        store: PathBuf,
        /// Id of the article being edited; omit for a new article.
        #[arg(long)]
        id: Option<String>,
        /// Pause between replayed edits, in milliseconds.
        #[arg(long, default_value_t = 0)]
        gap_ms: u64,
    },
    /// Read or change the stored colour theme.
    Theme {
        /// New theme; omit to print the current one.
        #[arg(value_enum)]
        set: Option<ThemeArg>,
        #[arg(long, default_value = "./data/preferences.json")]
        prefs: PathBuf,
    },
}
