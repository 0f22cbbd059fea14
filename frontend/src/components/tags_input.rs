use iqtest_shared::{
    config::SiteConfig,
    tags::{
        add_tag, merge_tags, parse_bulk_tags, suggest_tags, TagError, TagParseOptions,
        MAX_TAGS_PER_ARTICLE,
    },
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    hooks::use_debounced_callback,
    i18n::{current::tags as t, fill_one},
};

const SUGGESTION_LIMIT: usize = 8;

#[derive(Properties, PartialEq)]
pub struct TagsInputProps {
    pub tags: Vec<String>,
    pub on_change: Callback<Vec<String>>,
    /// Known tags offered as suggestions.
    #[prop_or_default]
    pub available: Vec<String>,
}

#[function_component(TagsInput)]
pub fn tags_input(props: &TagsInputProps) -> Html {
    let draft = use_state(String::new);
    let suggestions = use_state(Vec::<String>::new);
    let feedback = use_state(Vec::<String>::new);
    let delay_ms = SiteConfig::default().suggestion_debounce.as_millis() as u32;

    let refresh_suggestions = {
        let suggestions = suggestions.clone();
        let available = props.available.clone();
        let selected = props.tags.clone();
        use_debounced_callback(
            delay_ms,
            Callback::from(move |query: String| {
                suggestions.set(suggest_tags(&query, &available, &selected, SUGGESTION_LIMIT));
            }),
        )
    };

    let commit = {
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        let draft = draft.clone();
        let feedback = feedback.clone();
        let suggestions = suggestions.clone();
        Callback::from(move |raw: String| {
            let options = TagParseOptions::default();
            let batch = parse_bulk_tags(&raw, &tags, &options);
            let (merged, overflow) = merge_tags(&tags, &batch.valid_tags);
            let mut messages = batch.messages(options.max_length);
            if !overflow.is_empty() {
                messages.push(fill_one(t::LIMIT_TEMPLATE, MAX_TAGS_PER_ARTICLE));
            }
            if merged != tags {
                on_change.emit(merged);
            }
            feedback.set(messages);
            suggestions.set(Vec::new());
            draft.set(String::new());
        })
    };

    let oninput = {
        let draft = draft.clone();
        let commit = commit.clone();
        let refresh_suggestions = refresh_suggestions.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                // Pasted lists commit straight away; the last token stays editable.
                if let Some((complete, rest)) = value.rsplit_once(',') {
                    commit.emit(complete.to_string());
                    draft.set(rest.to_string());
                    refresh_suggestions.emit(rest.to_string());
                } else {
                    draft.set(value.clone());
                    refresh_suggestions.emit(value);
                }
            }
        })
    };

    let onkeydown = {
        let draft = draft.clone();
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        let feedback = feedback.clone();
        let suggestions = suggestions.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            event.prevent_default();
            match add_tag(&draft, &tags, &TagParseOptions::default()) {
                Ok(next) => {
                    on_change.emit(next);
                    feedback.set(Vec::new());
                    suggestions.set(Vec::new());
                    draft.set(String::new());
                },
                Err(TagError::Empty) => {},
                // The draft stays so it can be corrected.
                Err(err) => feedback.set(vec![err.user_message()]),
            }
        })
    };

    let onblur = {
        let draft = draft.clone();
        let commit = commit.clone();
        Callback::from(move |_: FocusEvent| {
            if !draft.trim().is_empty() {
                commit.emit((*draft).clone());
            }
        })
    };

    let limit_reached = props.tags.len() >= MAX_TAGS_PER_ARTICLE;

    html! {
        <div class="tags-input flex flex-col gap-2">
            <ul class="flex flex-wrap gap-2">
                { for props.tags.iter().enumerate().map(|(idx, tag)| {
                    let onclick = {
                        let tags = props.tags.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |_| {
                            let mut next = tags.clone();
                            next.remove(idx);
                            on_change.emit(next);
                        })
                    };
                    html! {
                        <li key={tag.clone()} class="inline-flex items-center gap-1 rounded-full bg-[var(--surface-alt)] px-3 py-1 text-sm">
                            { tag }
                            <button
                                type="button"
                                aria-label={fill_one(t::REMOVE_ARIA_TEMPLATE, tag)}
                                {onclick}
                            >
                                {"×"}
                            </button>
                        </li>
                    }
                }) }
            </ul>
            <input
                type="text"
                class="form-input"
                placeholder={t::PLACEHOLDER}
                value={(*draft).clone()}
                disabled={limit_reached}
                {oninput}
                {onkeydown}
                {onblur}
            />
            if !suggestions.is_empty() {
                <ul class="suggestions rounded-lg border border-[var(--border)] shadow" role="listbox">
                    { for suggestions.iter().map(|suggestion| {
                        let onmousedown = {
                            let commit = commit.clone();
                            let suggestion = suggestion.clone();
                            Callback::from(move |event: MouseEvent| {
                                event.prevent_default();
                                commit.emit(suggestion.clone());
                            })
                        };
                        html! {
                            <li key={suggestion.clone()} role="option" class="cursor-pointer px-3 py-1 hover:bg-[var(--surface-alt)]" {onmousedown}>
                                { suggestion }
                            </li>
                        }
                    }) }
                </ul>
            }
            { for feedback.iter().map(|message| html! {
                <p class="text-xs text-[var(--muted)]">{ message }</p>
            }) }
        </div>
    }
}
