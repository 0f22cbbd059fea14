use iqtest_shared::{request_seq::RequestSequencer, Article, ArticleStatus};
use yew::prelude::*;

use crate::{
    api,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner, raw_html::RawHtml},
    hooks::scroll_window_to_top,
    i18n::{current::article as t, fill_one},
    utils::format_date,
};

#[derive(Properties, PartialEq)]
pub struct ArticleDetailProps {
    pub id: String,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    let article = use_state(|| None::<Article>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let sequencer = use_memo((), |_| RequestSequencer::new());

    {
        let article = article.clone();
        let loading = loading.clone();
        let error = error.clone();
        let sequencer = sequencer.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let ticket = sequencer.issue();
            loading.set(true);
            scroll_window_to_top();
            {
                let sequencer = sequencer.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::fetch_article(&id).await;
                    let Some(result) = sequencer.accept(ticket, result) else {
                        return;
                    };
                    match result {
                        Ok(data) => {
                            article.set(Some(data));
                            error.set(None);
                        },
                        Err(err) => {
                            article.set(None);
                            error.set(Some(err.user_message().to_string()));
                        },
                    }
                    loading.set(false);
                });
            }
            move || sequencer.cancel_all()
        });
    }

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let Some(article) = (*article).clone() else {
        return html! {
            <section class="mx-auto max-w-3xl px-4 py-10">
                <ErrorBanner message={(*error).clone().unwrap_or_default()} auto_dismiss={false} />
            </section>
        };
    };
    let form = &article.form;

    html! {
        <article class="mx-auto max-w-3xl space-y-6 px-4 py-10">
            if form.status != ArticleStatus::Published {
                <p class="rounded-lg bg-amber-100 px-4 py-2 text-sm text-amber-800">{ t::NOT_PUBLISHED }</p>
            }
            <header class="space-y-2">
                <h1 class="text-3xl font-bold">{ &form.title }</h1>
                <p class="text-sm text-[var(--muted)]">
                    { fill_one(t::PUBLISHED_ON_TEMPLATE, format_date(&article.created_at)) }
                    if article.updated_at != article.created_at {
                        { " · " }
                        { fill_one(t::UPDATED_ON_TEMPLATE, format_date(&article.updated_at)) }
                    }
                </p>
                if !form.excerpt.is_empty() {
                    <p class="text-lg text-[var(--muted)]">{ &form.excerpt }</p>
                }
            </header>
            if let Some(image) = form.featured_image.clone() {
                <img src={image} alt={form.title.clone()} class="w-full rounded-2xl" loading="lazy" />
            }
            <RawHtml html={AttrValue::from(form.content.clone())} class="prose max-w-none" />
            if !form.tags.is_empty() {
                <ul class="flex flex-wrap gap-2">
                    { for form.tags.iter().map(|tag| html! {
                        <li key={tag.clone()} class="rounded-full bg-[var(--surface-alt)] px-3 py-1 text-sm">{ format!("#{tag}") }</li>
                    }) }
                </ul>
            }
        </article>
    }
}
