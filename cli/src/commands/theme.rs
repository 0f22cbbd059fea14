use std::path::Path;

use anyhow::{Context, Result};
use iqtest_shared::preferences::{JsonFilePreferences, Theme};

use crate::cli::ThemeArg;

pub fn run(set: Option<ThemeArg>, prefs: &Path) -> Result<()> {
    let store = JsonFilePreferences::open(prefs)
        .with_context(|| format!("failed to open {}", prefs.display()))?;
    if let Some(next) = set {
        let theme = match next {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        };
        theme.save(&store)?;
        tracing::info!(theme = theme.as_str(), "theme saved");
    }
    println!("{}", Theme::load(&store).as_str());
    Ok(())
}
