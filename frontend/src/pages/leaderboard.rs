use iqtest_shared::{
    config::SiteConfig,
    leaderboard::{
        check_rank_order, countries, local_ranking, stats, AgeBucket, Gender, LeaderboardFilter,
    },
    perf::PerfSpan,
    request_seq::RequestSequencer,
    LeaderboardEntry,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        error_banner::ErrorBanner, leaderboard_table::LeaderboardTable,
        loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    hooks::{scroll_window_to_top, use_page_cache},
    i18n::{current::leaderboard as t, fill_one, fill_two},
    router::Route,
    utils::{log_warn, now_ms},
};

type Row = (u32, LeaderboardEntry);

#[derive(Properties, PartialEq)]
pub struct LeaderboardPageProps {
    /// City or country; `None` shows the global board.
    #[prop_or_default]
    pub location: Option<String>,
}

fn build_rows(entries: &[LeaderboardEntry], location: Option<&str>) -> Vec<Row> {
    match location {
        Some(location) => local_ranking(entries, location),
        None => entries.iter().map(|entry| (entry.rank, entry.clone())).collect(),
    }
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .filter(|value| !value.is_empty())
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardPageProps) -> Html {
    let config = use_memo((), |_| SiteConfig::default());
    let cache = use_page_cache::<Row>(config.page_size, config.max_cached_pages);
    let entries = use_state(Vec::<LeaderboardEntry>::new);
    let filter = use_state(LeaderboardFilter::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let sequencer = use_memo((), |_| RequestSequencer::new());
    // Latest selection, readable from the fetch task after it resolves.
    let active_filter = use_mut_ref(LeaderboardFilter::default);

    {
        let cache = cache.clone();
        let entries = entries.clone();
        let filter = filter.clone();
        let loading = loading.clone();
        let error = error.clone();
        let sequencer = sequencer.clone();
        let active_filter = active_filter.clone();
        use_effect_with(props.location.clone(), move |location| {
            let location = location.clone();
            let ticket = sequencer.issue();
            loading.set(true);
            *active_filter.borrow_mut() = LeaderboardFilter::default();
            filter.set(LeaderboardFilter::default());
            {
                let sequencer = sequencer.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::fetch_leaderboard().await;
                    // A newer location may have been requested meanwhile.
                    let Some(result) = sequencer.accept(ticket, result) else {
                        return;
                    };
                    match result {
                        Ok(data) => {
                            if let Some(anomaly) = check_rank_order(&data) {
                                log_warn(&format!("leaderboard order anomaly: {anomaly:?}"));
                            }
                            let _span = PerfSpan::start_with("leaderboard.rows", now_ms);
                            cache.replace_source(build_rows(&data, location.as_deref()));
                            // A filter picked while loading must still hold.
                            let criteria = active_filter.borrow().clone();
                            if !criteria.is_empty() {
                                cache.apply_filter(move |(_, entry): &Row| criteria.matches(entry));
                            }
                            entries.set(data);
                            error.set(None);
                        },
                        Err(err) => {
                            log_warn(&format!("leaderboard fetch failed: {err}"));
                            error.set(Some(err.user_message().to_string()));
                        },
                    }
                    loading.set(false);
                });
            }
            move || sequencer.cancel_all()
        });
    }

    let update_filter = {
        let cache = cache.clone();
        let filter = filter.clone();
        let active_filter = active_filter.clone();
        Callback::from(move |next: LeaderboardFilter| {
            *active_filter.borrow_mut() = next.clone();
            if next.is_empty() {
                cache.clear_filter();
            } else {
                let criteria = next.clone();
                cache.apply_filter(move |(_, entry): &Row| criteria.matches(entry));
            }
            filter.set(next);
        })
    };

    let on_gender_change = {
        let active_filter = active_filter.clone();
        let update_filter = update_filter.clone();
        Callback::from(move |event: Event| {
            let gender = select_value(&event)
                .and_then(|value| value.parse::<usize>().ok())
                .and_then(|idx| Gender::ALL.get(idx).copied());
            let current = active_filter.borrow().clone();
            update_filter.emit(LeaderboardFilter {
                gender,
                ..current
            });
        })
    };

    let on_country_change = {
        let active_filter = active_filter.clone();
        let update_filter = update_filter.clone();
        Callback::from(move |event: Event| {
            let current = active_filter.borrow().clone();
            update_filter.emit(LeaderboardFilter {
                country: select_value(&event),
                ..current
            });
        })
    };

    let on_age_change = {
        let active_filter = active_filter.clone();
        let update_filter = update_filter.clone();
        Callback::from(move |event: Event| {
            let age_bucket = select_value(&event)
                .and_then(|value| value.parse::<usize>().ok())
                .and_then(|idx| AgeBucket::ALL.get(idx).copied());
            let current = active_filter.borrow().clone();
            update_filter.emit(LeaderboardFilter {
                age_bucket,
                ..current
            });
        })
    };

    let on_clear_filters = {
        let update_filter = update_filter.clone();
        Callback::from(move |_: MouseEvent| update_filter.emit(LeaderboardFilter::default()))
    };

    let on_page_change = {
        let cache = cache.clone();
        Callback::from(move |page: usize| {
            cache.go_to(page);
            scroll_window_to_top();
        })
    };

    let on_prefetch = {
        let cache = cache.clone();
        Callback::from(move |page: usize| cache.prewarm(page))
    };

    let title = match props.location.as_deref() {
        Some(location) => fill_one(t::LOCAL_TITLE_TEMPLATE, location),
        None => t::TITLE.to_string(),
    };
    let summary = stats(&entries);
    let country_options = countries(&entries);

    html! {
        <section class="mx-auto max-w-5xl space-y-4 px-4 py-6">
            <header class="flex flex-wrap items-end justify-between gap-3">
                <div>
                    <h1 class="text-2xl font-bold">{ title }</h1>
                    if let Some(top) = summary.top_score {
                        <p class="text-sm text-[var(--muted)]">
                            { fill_two(t::STATS_TEMPLATE, summary.count, top) }
                        </p>
                    }
                </div>
                if props.location.is_some() {
                    <Link<Route> to={Route::Leaderboard} classes="text-sm text-[var(--primary)]">
                        { t::BACK_TO_GLOBAL }
                    </Link<Route>>
                }
            </header>

            if let Some(message) = (*error).clone() {
                <ErrorBanner message={message} />
            }

            <div class="flex flex-wrap gap-3 text-sm">
                <label class="flex items-center gap-2">
                    { t::FILTER_GENDER }
                    <select onchange={on_gender_change}>
                        <option value="" selected={filter.gender.is_none()}>{ t::FILTER_ALL }</option>
                        { for Gender::ALL.iter().enumerate().map(|(idx, gender)| html! {
                            <option value={idx.to_string()} selected={filter.gender == Some(*gender)}>
                                { gender.label() }
                            </option>
                        }) }
                    </select>
                </label>
                if props.location.is_none() {
                    <label class="flex items-center gap-2">
                        { t::FILTER_COUNTRY }
                        <select onchange={on_country_change}>
                            <option value="" selected={filter.country.is_none()}>{ t::FILTER_ALL }</option>
                            { for country_options.iter().map(|country| html! {
                                <option value={country.clone()} selected={filter.country.as_deref() == Some(country.as_str())}>
                                    { country }
                                </option>
                            }) }
                        </select>
                    </label>
                }
                <label class="flex items-center gap-2">
                    { t::FILTER_AGE }
                    <select onchange={on_age_change}>
                        <option value="" selected={filter.age_bucket.is_none()}>{ t::FILTER_ALL }</option>
                        { for AgeBucket::ALL.iter().enumerate().map(|(idx, bucket)| html! {
                            <option value={idx.to_string()} selected={filter.age_bucket == Some(*bucket)}>
                                { bucket.label() }
                            </option>
                        }) }
                    </select>
                </label>
                if !filter.is_empty() {
                    <button type="button" class="text-[var(--primary)]" onclick={on_clear_filters}>
                        { t::CLEAR_FILTERS }
                    </button>
                }
            </div>

            if *loading {
                <LoadingSpinner />
            } else {
                <LeaderboardTable rows={cache.current()} />
                <Pagination
                    current_page={cache.current_page()}
                    total_pages={cache.total_pages()}
                    on_page_change={on_page_change}
                    on_prefetch={Some(on_prefetch)}
                />
            }
        </section>
    }
}
