#[cfg(test)]
mod tests {
    use std::{path::Path, process::Command};

    use iq_cli::utils;
    use iqtest_shared::{article::Article, ArticleForm};
    use tempfile::tempdir;

    fn iq_cli() -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_iq-cli"));
        command.env("RUST_LOG", "warn");
        command
    }

    fn stdout_of(command: &mut Command) -> String {
        let output = command.output().expect("run iq-cli");
        assert!(
            output.status.success(),
            "iq-cli failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn draft(title: &str) -> ArticleForm {
        let mut form = ArticleForm::default();
        form.set_title(title);
        form.content = "<p>Trắc nghiệm IQ trực tuyến.</p>".to_string();
        form
    }

    #[test]
    fn slug_command_folds_vietnamese() {
        let out = stdout_of(iq_cli().args(["slug", "Hướng", "dẫn", "React", "&", "Vue.js"]));
        assert_eq!(out.trim(), "huong-dan-react-vue-js");
    }

    #[test]
    fn slug_command_appends_attempt_suffix() {
        let out = stdout_of(iq_cli().args(["slug", "Bài test", "--attempt", "3"]));
        assert_eq!(out.trim(), "bai-test-3");
    }

    #[test]
    fn slug_check_rejects_invalid() {
        let status = iq_cli().args(["slug", "--check", "Bad Slug"]).status().expect("run");
        assert!(!status.success());
    }

    #[test]
    fn tags_command_emits_json_batch() {
        let out = stdout_of(iq_cli().args(["tags", "react, api, React, ,", "--json"]));
        let body: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(body["batch"]["valid_tags"], serde_json::json!(["react", "api"]));
        assert_eq!(body["batch"]["duplicates"], serde_json::json!(["react"]));
        assert_eq!(body["batch"]["empty_count"], 2);
    }

    #[test]
    fn validate_fails_on_empty_form() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("form.json");
        utils::write_json(&path, &ArticleForm::default()).expect("write");
        let status = iq_cli()
            .args(["validate", "--file"])
            .arg(&path)
            .status()
            .expect("run");
        assert!(!status.success());
    }

    #[test]
    fn autosave_replay_creates_one_article() {
        let dir = tempdir().expect("tempdir");
        let edits = dir.path().join("edits.json");
        let store = dir.path().join("store").join("articles.json");
        utils::write_json(&edits, &vec![draft("IQ"), draft("IQ là gì")]).expect("write");

        let out = stdout_of(
            iq_cli()
                .args(["autosave", "--edits"])
                .arg(&edits)
                .arg("--store")
                .arg(&store),
        );
        assert!(out.starts_with("saved 1 (iq-la-gi)"), "{out}");

        let saved: Vec<Article> = utils::read_json(&store).expect("store");
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].form.title, "IQ là gì");
    }

    #[test]
    fn theme_persists_between_runs() {
        let dir = tempdir().expect("tempdir");
        let prefs = dir.path().join("prefs.json");
        let run = |args: &[&str], prefs: &Path| {
            stdout_of(iq_cli().arg("theme").args(args).arg("--prefs").arg(prefs))
        };
        assert_eq!(run(&[], &prefs).trim(), "light");
        assert_eq!(run(&["dark"], &prefs).trim(), "dark");
        assert_eq!(run(&[], &prefs).trim(), "dark");
    }
}
