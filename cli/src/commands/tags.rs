use anyhow::Result;
use iqtest_shared::tags::{
    merge_tags, parse_bulk_tags, suggest_tags, TagNormalizer, TagParseOptions,
};
use iq_cli::utils::{parse_list, render_tag_batch};
use serde_json::json;

use crate::cli::NormalizerArg;

const SUGGESTION_LIMIT: usize = 8;

pub struct TagsArgs {
    pub input: String,
    pub existing: String,
    pub normalizer: NormalizerArg,
    pub case_sensitive: bool,
    pub max_length: Option<usize>,
    pub suggest: Option<String>,
    pub json: bool,
}

pub fn run(args: TagsArgs) -> Result<()> {
    let mut options = TagParseOptions {
        case_sensitive: args.case_sensitive,
        normalizer: match args.normalizer {
            NormalizerArg::Lowercase => TagNormalizer::Lowercase,
            NormalizerArg::Smart => TagNormalizer::Smart,
            NormalizerArg::Preserve => TagNormalizer::Preserve,
        },
        ..TagParseOptions::default()
    };
    if let Some(max_length) = args.max_length {
        options.max_length = max_length.max(1);
    }

    let existing = parse_list(&args.existing);
    let batch = parse_bulk_tags(&args.input, &existing, &options);
    let (merged, overflow) = merge_tags(&existing, &batch.valid_tags);
    if !overflow.is_empty() {
        tracing::warn!(dropped = overflow.len(), "tag limit reached");
    }

    let suggestions = args
        .suggest
        .as_deref()
        .map(|query| {
            let mut pool = existing.clone();
            pool.extend(batch.valid_tags.iter().cloned());
            suggest_tags(query, &pool, &[], SUGGESTION_LIMIT)
        })
        .unwrap_or_default();

    if args.json {
        let body = json!({
            "batch": batch,
            "merged": merged,
            "overflow": overflow,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print!("{}", render_tag_batch(&batch, options.max_length));
    println!("merged: {}", merged.join(", "));
    if !overflow.is_empty() {
        println!("overflow: {}", overflow.join(", "));
    }
    if !suggestions.is_empty() {
        println!("suggestions: {}", suggestions.join(", "));
    }
    Ok(())
}
