use std::path::Path;

use anyhow::{bail, Result};
use iqtest_shared::{
    config::SiteConfig,
    i18n::{current::leaderboard as t, fill_one, fill_two},
    leaderboard::{check_rank_order, local_ranking, stats, AgeBucket, Gender, LeaderboardFilter},
    pagination::PageCache,
    perf::PerfSpan,
    LeaderboardEntry,
};
use iq_cli::utils::{read_json, render_leaderboard};

use crate::cli::{AgeArg, GenderArg};

pub fn run(
    file: &Path,
    page: usize,
    location: Option<String>,
    gender: Option<GenderArg>,
    country: Option<String>,
    age: Option<AgeArg>,
    show_stats: bool,
) -> Result<()> {
    let entries: Vec<LeaderboardEntry> = read_json(file)?;
    if let Some(anomaly) = check_rank_order(&entries) {
        tracing::warn!(?anomaly, "leaderboard is not in rank order");
    }

    let config = SiteConfig::from_env();
    let _span = PerfSpan::start("cli.leaderboard");
    let rows = match location.as_deref() {
        Some(location) => local_ranking(&entries, location),
        None => entries.iter().map(|entry| (entry.rank, entry.clone())).collect(),
    };

    let filter = LeaderboardFilter {
        gender: gender.map(|gender| match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }),
        country,
        age_bucket: age.map(|age| match age {
            AgeArg::Under18 => AgeBucket::Under18,
            AgeArg::From18To24 => AgeBucket::From18To24,
            AgeArg::From25To34 => AgeBucket::From25To34,
            AgeArg::From35To44 => AgeBucket::From35To44,
            AgeArg::Over45 => AgeBucket::Over45,
        }),
    };

    let mut cache = PageCache::with_limit(rows, config.page_size, config.max_cached_pages);
    if !filter.is_empty() {
        cache.apply_filter(|(_, entry): &(u32, LeaderboardEntry)| filter.matches(entry));
    }
    if page > cache.total_pages() {
        bail!("page {page} out of range (1..={})", cache.total_pages());
    }

    let title = match location.as_deref() {
        Some(location) => fill_one(t::LOCAL_TITLE_TEMPLATE, location),
        None => t::TITLE.to_string(),
    };
    println!("{title}");
    let current = cache.go_to(page).to_vec();
    if current.is_empty() {
        println!("{}", t::EMPTY);
    } else {
        print!("{}", render_leaderboard(&current));
    }
    println!(
        "{}",
        fill_two(
            iqtest_shared::i18n::current::pagination::SUMMARY_TEMPLATE,
            cache.current_page(),
            cache.total_pages()
        )
    );
    tracing::debug!(cached = ?cache.cached_pages(), "page cache");

    if show_stats {
        let visible: Vec<LeaderboardEntry> =
            cache.items().iter().map(|(_, entry)| entry.clone()).collect();
        let summary = stats(&visible);
        if let Some(top) = summary.top_score {
            println!("{}", fill_two(t::STATS_TEMPLATE, summary.count, top));
        }
        if let Some(average) = summary.average_score {
            println!("avg: {average:.1}");
        }
        for (tier, count) in &summary.tiers {
            println!("  {}: {count}", tier.style().label);
        }
    }
    Ok(())
}
