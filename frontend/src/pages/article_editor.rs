use std::rc::Rc;

use iqtest_shared::{
    article::{Field, ValidationErrors},
    config::SiteConfig,
    i18n::current::slug as slug_t,
    request_seq::RequestSequencer,
    save_latch::SaveLatch,
    seo::{analyze, SeoReport},
    ArticleForm, ArticleStatus, Author, Category,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{error_banner::ErrorBanner, seo_panel::SeoPanel, tags_input::TagsInput},
    hooks::use_debounced_callback,
    i18n::current::{common as common_t, editor as t},
    router::Route,
    utils::log_warn,
};

type Edit = Rc<dyn Fn(&mut ArticleForm)>;

fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Copy, PartialEq)]
enum SaveKind {
    Manual,
    Auto,
}

#[derive(Properties, PartialEq)]
pub struct ArticleEditorProps {
    /// `None` creates a new article.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(ArticleEditorPage)]
pub fn article_editor_page(props: &ArticleEditorProps) -> Html {
    let config = use_memo((), |_| SiteConfig::default());
    let form = use_state(ArticleForm::default);
    let seo_report = use_state(|| analyze(&ArticleForm::default()));
    let errors = use_state(ValidationErrors::default);
    let banner = use_state(|| None::<String>);
    let notice = use_state(|| None::<&'static str>);
    let slug_taken = use_state(|| false);
    let saving = use_state(|| false);
    let categories = use_state(Vec::<Category>::new);
    let authors = use_state(Vec::<Author>::new);
    let known_tags = use_state(Vec::<String>::new);
    let article_id = use_mut_ref(|| props.id.clone());
    let last_saved = use_mut_ref(|| None::<u64>);
    let latch = use_memo((), |_| SaveLatch::new());
    let slug_seq = use_memo((), |_| RequestSequencer::new());

    // Reference data for the selectors.
    {
        let categories = categories.clone();
        let authors = authors.clone();
        let known_tags = known_tags.clone();
        let banner = banner.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_categories().await {
                    Ok(data) => categories.set(data),
                    Err(err) => banner.set(Some(err.user_message().to_string())),
                }
                match api::fetch_authors().await {
                    Ok(data) => authors.set(data),
                    Err(err) => banner.set(Some(err.user_message().to_string())),
                }
                match api::fetch_tags().await {
                    Ok(data) => known_tags.set(data.into_iter().map(|tag| tag.name).collect()),
                    Err(err) => log_warn(&format!("tag suggestions unavailable: {err}")),
                }
            });
            || ()
        });
    }

    {
        let form = form.clone();
        let seo_report = seo_report.clone();
        let last_saved = last_saved.clone();
        let article_id = article_id.clone();
        let banner = banner.clone();
        use_effect_with(props.id.clone(), move |id| {
            *article_id.borrow_mut() = id.clone();
            if let Some(id) = id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_article(&id).await {
                        Ok(article) => {
                            let mut loaded = article.form;
                            // Published URLs must not drift when the title is edited.
                            loaded.slug_edited = true;
                            *last_saved.borrow_mut() = Some(loaded.fingerprint());
                            seo_report.set(analyze(&loaded));
                            form.set(loaded);
                        },
                        Err(err) => {
                            log_warn(&format!("article {id} not loaded: {err}"));
                            banner.set(Some(t::LOAD_FAILED.to_string()));
                        },
                    }
                });
            }
            || ()
        });
    }

    let save = {
        let article_id = article_id.clone();
        let last_saved = last_saved.clone();
        let latch = latch.clone();
        let errors = errors.clone();
        let banner = banner.clone();
        let notice = notice.clone();
        let saving = saving.clone();
        Callback::from(move |(snapshot, kind): (ArticleForm, SaveKind)| {
            let fingerprint = snapshot.fingerprint();
            if kind == SaveKind::Auto && *last_saved.borrow() == Some(fingerprint) {
                return;
            }
            if let Err(invalid) = snapshot.validate() {
                // Autosave stays quiet; the explicit save shows what is wrong.
                if kind == SaveKind::Manual {
                    errors.set(invalid);
                }
                return;
            }
            errors.set(ValidationErrors::default());
            let Some(guard) = latch.try_acquire() else {
                if kind == SaveKind::Manual {
                    notice.set(Some(t::SAVE_IN_PROGRESS));
                }
                return;
            };

            saving.set(true);
            let article_id = article_id.clone();
            let last_saved = last_saved.clone();
            let banner = banner.clone();
            let notice = notice.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _guard = guard;
                let existing = article_id.borrow().clone();
                let result = match existing.as_deref() {
                    Some(id) => api::update_article(id, &snapshot).await,
                    None => api::create_article(&snapshot).await,
                };
                match result {
                    Ok(article) => {
                        *article_id.borrow_mut() = Some(article.id);
                        *last_saved.borrow_mut() = Some(fingerprint);
                        notice.set(Some(match kind {
                            SaveKind::Manual => t::SAVED,
                            SaveKind::Auto => t::AUTOSAVED,
                        }));
                    },
                    Err(err) => {
                        log_warn(&format!("save failed: {err}"));
                        banner.set(Some(err.user_message().to_string()));
                    },
                }
                saving.set(false);
            });
        })
    };

    let schedule_seo = {
        let seo_report = seo_report.clone();
        use_debounced_callback(
            config.seo_debounce.as_millis() as u32,
            Callback::from(move |snapshot: ArticleForm| seo_report.set(analyze(&snapshot))),
        )
    };

    let schedule_autosave = {
        let save = save.clone();
        use_debounced_callback(
            config.autosave_debounce.as_millis() as u32,
            Callback::from(move |snapshot: ArticleForm| save.emit((snapshot, SaveKind::Auto))),
        )
    };

    let check_slug = {
        let slug_taken = slug_taken.clone();
        let slug_seq = slug_seq.clone();
        let article_id = article_id.clone();
        use_debounced_callback(
            config.seo_debounce.as_millis() as u32,
            Callback::from(move |slug: String| {
                if slug.is_empty() {
                    slug_taken.set(false);
                    return;
                }
                let ticket = slug_seq.issue();
                let slug_seq = slug_seq.clone();
                let slug_taken = slug_taken.clone();
                let exclude = article_id.borrow().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::is_slug_available(&slug, exclude.as_deref()).await;
                    match slug_seq.accept(ticket, result) {
                        Some(Ok(available)) => slug_taken.set(!available),
                        Some(Err(err)) => log_warn(&format!("slug check failed: {err}")),
                        None => {},
                    }
                });
            }),
        )
    };

    let update = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |edit: Edit| {
            let mut next = (*form).clone();
            edit(&mut next);
            if next == *form {
                return;
            }
            if next.slug != form.slug {
                check_slug.emit(next.slug.clone());
            }
            notice.set(None);
            schedule_seo.emit(next.clone());
            schedule_autosave.emit(next.clone());
            form.set(next);
        })
    };

    let bind = |apply: fn(&mut ArticleForm, String)| {
        let update = update.clone();
        Callback::from(move |event: Event| {
            let value = event_value(&event);
            update.emit(Rc::new(move |form: &mut ArticleForm| apply(form, value.clone())));
        })
    };
    let bind_input = |apply: fn(&mut ArticleForm, String)| {
        let onchange = bind(apply);
        Callback::from(move |event: InputEvent| onchange.emit(event.into()))
    };

    let on_title = bind_input(|form, value| form.set_title(value));
    let on_slug = bind(|form, value| form.set_slug(value));
    let on_content = bind_input(|form, value| form.content = value);
    let on_excerpt = bind_input(|form, value| form.excerpt = value);
    let on_status = bind(|form, value| {
        form.status = ArticleStatus::parse(&value).unwrap_or_default();
    });
    let on_author = bind(|form, value| form.author_id = optional(value));
    let on_image = bind(|form, value| form.featured_image = optional(value));
    let on_publish_at = bind(|form, value| form.publish_at = optional(value));
    let on_meta_title = bind_input(|form, value| form.seo.meta_title = value);
    let on_meta_description = bind_input(|form, value| form.seo.meta_description = value);
    let on_keyword = bind_input(|form, value| form.seo.focus_keyword = value);

    let on_tags = {
        let update = update.clone();
        Callback::from(move |tags: Vec<String>| {
            update.emit(Rc::new(move |form: &mut ArticleForm| form.tags = tags.clone()));
        })
    };

    let on_save = {
        let form = form.clone();
        let save = save.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            save.emit(((*form).clone(), SaveKind::Manual));
        })
    };

    let field_error = |field: Field| {
        errors.for_field(field).map(|message| {
            html! { <p class="text-xs text-red-600">{ message }</p> }
        })
    };

    let heading = if props.id.is_some() { t::EDIT_TITLE } else { t::NEW_TITLE };
    let saved_id = article_id.borrow().clone();

    html! {
        <section class="mx-auto grid max-w-6xl gap-6 px-4 py-6 lg:grid-cols-[1fr_20rem]">
            <form class="space-y-4" onsubmit={on_save}>
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">{ heading }</h1>
                    if let Some(id) = saved_id {
                        <Link<Route> to={Route::ArticleDetail { id }} classes="text-sm text-[var(--primary)]">
                            { t::VIEW_ARTICLE }
                        </Link<Route>>
                    }
                </div>

                if let Some(message) = (*banner).clone() {
                    <ErrorBanner message={message} on_close={Some({
                        let banner = banner.clone();
                        Callback::from(move |_| banner.set(None))
                    })} />
                }
                if let Some(message) = *notice {
                    <p class="text-sm text-green-700" role="status">{ message }</p>
                }

                <label class="block space-y-1">
                    <span>{ t::TITLE_LABEL }</span>
                    <input class="form-input w-full" value={form.title.clone()} oninput={on_title} />
                    { field_error(Field::Title) }
                </label>

                <label class="block space-y-1">
                    <span>{ t::SLUG_LABEL }</span>
                    <input class="form-input w-full" value={form.slug.clone()} onchange={on_slug} />
                    { field_error(Field::Slug) }
                    if *slug_taken {
                        <p class="text-xs text-red-600">{ slug_t::TAKEN }</p>
                    } else if !form.slug.is_empty() {
                        <p class="text-xs text-[var(--muted)]">{ t::SLUG_AVAILABLE }</p>
                    }
                </label>

                <label class="block space-y-1">
                    <span>{ t::CONTENT_LABEL }</span>
                    <textarea class="form-input h-80 w-full font-mono" value={form.content.clone()} oninput={on_content} />
                    { field_error(Field::Content) }
                </label>

                <label class="block space-y-1">
                    <span>{ t::EXCERPT_LABEL }</span>
                    <textarea class="form-input w-full" value={form.excerpt.clone()} oninput={on_excerpt} />
                    { field_error(Field::Excerpt) }
                </label>

                <div class="grid gap-4 md:grid-cols-2">
                    <label class="block space-y-1">
                        <span>{ t::STATUS_LABEL }</span>
                        <select class="form-input w-full" onchange={on_status}>
                            { for ArticleStatus::ALL.iter().map(|status| html! {
                                <option value={status.as_str()} selected={form.status == *status}>
                                    { status.label() }
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="block space-y-1">
                        <span>{ t::AUTHOR_LABEL }</span>
                        <select class="form-input w-full" onchange={on_author}>
                            <option value="" selected={form.author_id.is_none()}>{ t::NO_AUTHOR }</option>
                            { for authors.iter().map(|author| html! {
                                <option value={author.id.clone()} selected={form.author_id.as_deref() == Some(author.id.as_str())}>
                                    { &author.name }
                                </option>
                            }) }
                        </select>
                    </label>
                </div>

                <fieldset class="space-y-1">
                    <legend>{ t::CATEGORY_LABEL }</legend>
                    <div class="flex flex-wrap gap-3">
                        { for categories.iter().map(|category| {
                            let checked = form.category_ids.contains(&category.id);
                            let onchange = {
                                let update = update.clone();
                                let id = category.id.clone();
                                Callback::from(move |_: Event| {
                                    let id = id.clone();
                                    update.emit(Rc::new(move |form: &mut ArticleForm| {
                                        if let Some(pos) = form.category_ids.iter().position(|c| *c == id) {
                                            form.category_ids.remove(pos);
                                        } else {
                                            form.category_ids.push(id.clone());
                                        }
                                    }));
                                })
                            };
                            html! {
                                <label key={category.id.clone()} class="inline-flex items-center gap-2">
                                    <input type="checkbox" {checked} {onchange} />
                                    { &category.name }
                                </label>
                            }
                        }) }
                    </div>
                    { field_error(Field::Categories) }
                </fieldset>

                <div class="space-y-1">
                    <span>{ t::TAGS_LABEL }</span>
                    <TagsInput tags={form.tags.clone()} on_change={on_tags} available={(*known_tags).clone()} />
                    { field_error(Field::Tags) }
                </div>

                <div class="grid gap-4 md:grid-cols-2">
                    <label class="block space-y-1">
                        <span>{ t::IMAGE_LABEL }</span>
                        <input type="url" class="form-input w-full" value={form.featured_image.clone().unwrap_or_default()} onchange={on_image} />
                        { field_error(Field::FeaturedImage) }
                    </label>
                    <label class="block space-y-1">
                        <span>{ t::SCHEDULE_LABEL }</span>
                        <input type="datetime-local" class="form-input w-full" value={form.publish_at.clone().unwrap_or_default()} onchange={on_publish_at} />
                        { field_error(Field::PublishAt) }
                    </label>
                </div>

                <fieldset class="space-y-3 rounded-2xl border border-[var(--border)] p-4">
                    <label class="block space-y-1">
                        <span>{ t::FOCUS_KEYWORD_LABEL }</span>
                        <input class="form-input w-full" value={form.seo.focus_keyword.clone()} oninput={on_keyword} />
                    </label>
                    <label class="block space-y-1">
                        <span>{ t::META_TITLE_LABEL }</span>
                        <input class="form-input w-full" value={form.seo.meta_title.clone()} oninput={on_meta_title} />
                        { field_error(Field::MetaTitle) }
                    </label>
                    <label class="block space-y-1">
                        <span>{ t::META_DESCRIPTION_LABEL }</span>
                        <textarea class="form-input w-full" value={form.seo.meta_description.clone()} oninput={on_meta_description} />
                        { field_error(Field::MetaDescription) }
                    </label>
                </fieldset>

                <button type="submit" class="btn-primary" disabled={*saving}>
                    { if *saving { common_t::SAVING } else { common_t::SAVE } }
                </button>
            </form>

            <SeoPanel report={SeoReport::clone(&seo_report)} />
        </section>
    }
}
