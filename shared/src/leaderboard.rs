//! Leaderboard rows, badge tiers and the filters offered above the list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::current::{badge as badge_t, leaderboard as t};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Genius,
    Superior,
    Gifted,
    AboveAverage,
    Average,
    Developing,
}

/// Presentation attributes of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub css_class: &'static str,
}

impl BadgeTier {
    pub const ALL: [BadgeTier; 6] = [
        BadgeTier::Genius,
        BadgeTier::Superior,
        BadgeTier::Gifted,
        BadgeTier::AboveAverage,
        BadgeTier::Average,
        BadgeTier::Developing,
    ];

    pub fn from_score(score: i32) -> Self {
        match score {
            140.. => BadgeTier::Genius,
            130..=139 => BadgeTier::Superior,
            120..=129 => BadgeTier::Gifted,
            110..=119 => BadgeTier::AboveAverage,
            90..=109 => BadgeTier::Average,
            _ => BadgeTier::Developing,
        }
    }

    pub fn style(self) -> BadgeStyle {
        match self {
            BadgeTier::Genius => BadgeStyle {
                label: badge_t::GENIUS,
                icon: "fa-crown",
                css_class: "badge-genius",
            },
            BadgeTier::Superior => BadgeStyle {
                label: badge_t::SUPERIOR,
                icon: "fa-gem",
                css_class: "badge-superior",
            },
            BadgeTier::Gifted => BadgeStyle {
                label: badge_t::GIFTED,
                icon: "fa-star",
                css_class: "badge-gifted",
            },
            BadgeTier::AboveAverage => BadgeStyle {
                label: badge_t::ABOVE_AVERAGE,
                icon: "fa-arrow-trend-up",
                css_class: "badge-above-average",
            },
            BadgeTier::Average => BadgeStyle {
                label: badge_t::AVERAGE,
                icon: "fa-circle-check",
                css_class: "badge-average",
            },
            BadgeTier::Developing => BadgeStyle {
                label: badge_t::DEVELOPING,
                icon: "fa-seedling",
                css_class: "badge-developing",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => t::GENDER_MALE,
            Gender::Female => t::GENDER_FEMALE,
            Gender::Other => t::GENDER_OTHER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    Under18,
    From18To24,
    From25To34,
    From35To44,
    Over45,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 5] = [
        AgeBucket::Under18,
        AgeBucket::From18To24,
        AgeBucket::From25To34,
        AgeBucket::From35To44,
        AgeBucket::Over45,
    ];

    pub fn of_age(age: u32) -> Self {
        match age {
            0..=17 => AgeBucket::Under18,
            18..=24 => AgeBucket::From18To24,
            25..=34 => AgeBucket::From25To34,
            35..=44 => AgeBucket::From35To44,
            _ => AgeBucket::Over45,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBucket::Under18 => "< 18",
            AgeBucket::From18To24 => "18–24",
            AgeBucket::From25To34 => "25–34",
            AgeBucket::From35To44 => "35–44",
            AgeBucket::Over45 => "45+",
        }
    }
}

/// One row as returned by the backend, already in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub score: i32,
    /// Country code or city label, e.g. `"VN"` or `"Hà Nội, VN"`.
    pub location: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub badge: BadgeTier,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub duration_secs: Option<u32>,
}

impl LeaderboardEntry {
    /// Country part of `location` (text after the last comma).
    pub fn country(&self) -> &str {
        self.location
            .rsplit(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }

    /// `mm:ss` for the duration column.
    pub fn duration_label(&self) -> Option<String> {
        self.duration_secs
            .map(|secs| format!("{:02}:{:02}", secs / 60, secs % 60))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardFilter {
    pub gender: Option<Gender>,
    pub country: Option<String>,
    pub age_bucket: Option<AgeBucket>,
}

impl LeaderboardFilter {
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.country.is_none() && self.age_bucket.is_none()
    }

    /// Entries without the filtered attribute never match that criterion.
    pub fn matches(&self, entry: &LeaderboardEntry) -> bool {
        if let Some(gender) = self.gender {
            if entry.gender != Some(gender) {
                return false;
            }
        }
        if let Some(country) = self.country.as_deref() {
            if !entry.country().eq_ignore_ascii_case(country.trim()) {
                return false;
            }
        }
        if let Some(bucket) = self.age_bucket {
            if entry.age.map(AgeBucket::of_age) != Some(bucket) {
                return false;
            }
        }
        true
    }
}

/// Distinct countries in first-seen order, for the filter dropdown.
pub fn countries(entries: &[LeaderboardEntry]) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for entry in entries {
        let country = entry.country();
        if !country.is_empty() && !seen.iter().any(|c| c.eq_ignore_ascii_case(country)) {
            seen.push(country.to_string());
        }
    }
    seen
}

/// Entries of one location keep server order and get local ranks `1..=n`.
pub fn local_ranking(entries: &[LeaderboardEntry], location: &str) -> Vec<(u32, LeaderboardEntry)> {
    let location = location.trim();
    entries
        .iter()
        .filter(|entry| {
            entry.location.trim().eq_ignore_ascii_case(location)
                || entry.country().eq_ignore_ascii_case(location)
        })
        .cloned()
        .enumerate()
        .map(|(idx, entry)| (idx as u32 + 1, entry))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardStats {
    pub count: usize,
    pub top_score: Option<i32>,
    pub average_score: Option<f64>,
    pub tiers: BTreeMap<BadgeTier, usize>,
}

pub fn stats(entries: &[LeaderboardEntry]) -> LeaderboardStats {
    let mut tiers = BTreeMap::new();
    for entry in entries {
        *tiers.entry(entry.badge).or_insert(0) += 1;
    }
    let total: i64 = entries.iter().map(|entry| i64::from(entry.score)).sum();
    LeaderboardStats {
        count: entries.len(),
        top_score: entries.iter().map(|entry| entry.score).max(),
        average_score: (!entries.is_empty()).then(|| total as f64 / entries.len() as f64),
        tiers,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankAnomaly {
    /// `rank` at `index` is not the previous rank + 1 (or starts above 1).
    Gap { index: usize, rank: u32 },
    /// Score increases although rank goes down.
    ScoreInversion { index: usize },
}

/// First place where the server ordering breaks the dense-rank /
/// descending-score contract. Diagnostic only; the list is never re-sorted.
pub fn check_rank_order(entries: &[LeaderboardEntry]) -> Option<RankAnomaly> {
    let mut expected = 1u32;
    for (index, entry) in entries.iter().enumerate() {
        if entry.rank != expected {
            return Some(RankAnomaly::Gap {
                index,
                rank: entry.rank,
            });
        }
        if index > 0 && entries[index - 1].score < entry.score {
            return Some(RankAnomaly::ScoreInversion {
                index,
            });
        }
        expected += 1;
    }
    None
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn entry(rank: u32, score: i32, location: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            name: format!("Người chơi {rank}"),
            score,
            location: location.to_string(),
            date: "2024-05-01".to_string(),
            badge: BadgeTier::from_score(score),
            gender: None,
            age: None,
            duration_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::entry, *};

    #[test]
    fn tiers_follow_score_bands() {
        assert_eq!(BadgeTier::from_score(155), BadgeTier::Genius);
        assert_eq!(BadgeTier::from_score(140), BadgeTier::Genius);
        assert_eq!(BadgeTier::from_score(139), BadgeTier::Superior);
        assert_eq!(BadgeTier::from_score(120), BadgeTier::Gifted);
        assert_eq!(BadgeTier::from_score(110), BadgeTier::AboveAverage);
        assert_eq!(BadgeTier::from_score(90), BadgeTier::Average);
        assert_eq!(BadgeTier::from_score(89), BadgeTier::Developing);
        assert_eq!(BadgeTier::from_score(-5), BadgeTier::Developing);
    }

    #[test]
    fn every_tier_has_a_distinct_style() {
        let classes: std::collections::HashSet<_> =
            BadgeTier::ALL.iter().map(|tier| tier.style().css_class).collect();
        assert_eq!(classes.len(), BadgeTier::ALL.len());
        assert_eq!(BadgeTier::Genius.style().label, "Thiên tài");
    }

    #[test]
    fn entry_deserializes_with_optional_fields_missing() {
        let json = r#"{"rank":1,"name":"Lan","score":142,"location":"Hà Nội, VN",
            "date":"2024-05-01","badge":"genius"}"#;
        let parsed: LeaderboardEntry = serde_json::from_str(json).expect("parse entry");
        assert_eq!(parsed.badge, BadgeTier::Genius);
        assert_eq!(parsed.country(), "VN");
        assert_eq!(parsed.gender, None);
    }

    #[test]
    fn filter_combines_criteria() {
        let mut a = entry(1, 130, "Hà Nội, VN");
        a.gender = Some(Gender::Female);
        a.age = Some(22);
        let mut b = entry(2, 128, "Tokyo, JP");
        b.gender = Some(Gender::Female);
        b.age = Some(30);
        let c = entry(3, 120, "VN");

        let filter = LeaderboardFilter {
            gender: Some(Gender::Female),
            country: Some("vn".to_string()),
            age_bucket: None,
        };
        assert!(filter.matches(&a));
        assert!(!filter.matches(&b));
        assert!(!filter.matches(&c));

        let by_age = LeaderboardFilter {
            age_bucket: Some(AgeBucket::From25To34),
            ..LeaderboardFilter::default()
        };
        assert!(by_age.matches(&b));
        assert!(!by_age.matches(&a));
        assert!(LeaderboardFilter::default().matches(&c));
    }

    #[test]
    fn local_ranking_renumbers_in_server_order() {
        let entries = vec![
            entry(1, 150, "VN"),
            entry(2, 140, "JP"),
            entry(3, 138, "Đà Nẵng, VN"),
            entry(4, 120, "VN"),
        ];
        let local = local_ranking(&entries, "VN");
        let ranks: Vec<(u32, u32)> = local.iter().map(|(local, e)| (*local, e.rank)).collect();
        assert_eq!(ranks, vec![(1, 1), (2, 3), (3, 4)]);
    }

    #[test]
    fn stats_and_countries() {
        let entries = vec![entry(1, 150, "VN"), entry(2, 100, "JP"), entry(3, 95, "vn")];
        let summary = stats(&entries);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.top_score, Some(150));
        assert_eq!(summary.tiers.get(&BadgeTier::Average), Some(&2));
        assert_eq!(countries(&entries), vec!["VN".to_string(), "JP".to_string()]);
        assert_eq!(stats(&[]).average_score, None);
    }

    #[test]
    fn rank_order_check_reports_first_anomaly() {
        let good = vec![entry(1, 150, "VN"), entry(2, 150, "VN"), entry(3, 120, "VN")];
        assert_eq!(check_rank_order(&good), None);

        let gap = vec![entry(1, 150, "VN"), entry(3, 140, "VN")];
        assert_eq!(check_rank_order(&gap), Some(RankAnomaly::Gap {
            index: 1,
            rank: 3
        }));

        let inverted = vec![entry(1, 120, "VN"), entry(2, 130, "VN")];
        assert_eq!(check_rank_order(&inverted), Some(RankAnomaly::ScoreInversion {
            index: 1
        }));
    }

    #[test]
    fn duration_label_formats_minutes() {
        let mut e = entry(1, 100, "VN");
        assert_eq!(e.duration_label(), None);
        e.duration_secs = Some(754);
        assert_eq!(e.duration_label().as_deref(), Some("12:34"));
    }
}
