#[cfg(test)]
mod tests {
    use std::io::Write;

    use iq_cli::utils;
    use iqtest_shared::{
        leaderboard::BadgeTier,
        seo::analyze,
        tags::{parse_bulk_tags, TagParseOptions},
        ArticleForm, LeaderboardEntry,
    };
    use tempfile::{tempdir, NamedTempFile};

    fn entry(rank: u32, name: &str, score: i32) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            name: name.to_string(),
            score,
            location: "Hà Nội, VN".to_string(),
            date: "2024-05-01".to_string(),
            badge: BadgeTier::from_score(score),
            gender: None,
            age: None,
            duration_secs: Some(754),
        }
    }

    #[test]
    fn read_json_reports_path_on_bad_input() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"{ not json").expect("write");
        file.flush().expect("flush");

        let err = utils::read_json::<ArticleForm>(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));
    }

    #[test]
    fn write_then_read_creates_parent_dirs() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("entries.json");
        let entries = vec![entry(1, "An", 142), entry(2, "Bình", 128)];

        utils::write_json(&path, &entries).expect("write json");
        let loaded: Vec<LeaderboardEntry> = utils::read_json(&path).expect("read json");
        assert_eq!(loaded, entries);
    }

    #[test]
    fn missing_store_reads_as_default() {
        let dir = tempdir().expect("tempdir");
        let loaded: Vec<LeaderboardEntry> =
            utils::read_json_or_default(&dir.path().join("absent.json")).expect("default");
        assert!(loaded.is_empty());
    }

    #[test]
    fn parse_list_drops_blanks() {
        assert_eq!(utils::parse_list(" rust, ,wasm ,"), vec!["rust", "wasm"]);
        assert!(utils::parse_list("").is_empty());
    }

    #[test]
    fn leaderboard_table_has_header_and_rows() {
        let rows = vec![(1, entry(1, "An", 142)), (2, entry(2, "Bình", 128))];
        let table = utils::render_leaderboard(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("An"));
        assert!(lines[1].contains(BadgeTier::Genius.style().label));
        assert!(lines[2].contains("128"));
    }

    #[test]
    fn seo_report_lists_every_check() {
        let report = analyze(&ArticleForm::default());
        let rendered = utils::render_seo_report(&report);
        assert_eq!(rendered.lines().count(), report.checks.len() + 1);
        assert!(rendered.starts_with(&report.summary()));
    }

    #[test]
    fn tag_batch_summary_mentions_duplicates() {
        let batch = parse_bulk_tags(
            "react, api, React",
            &[],
            &TagParseOptions::default(),
        );
        let rendered = utils::render_tag_batch(&batch, 50);
        assert!(rendered.contains("valid: react, api"));
        assert!(rendered.contains("duplicates: react"));
    }
}
