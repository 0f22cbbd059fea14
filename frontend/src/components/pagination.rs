use iqtest_shared::pagination::visible_range;
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one, fill_two};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
    /// Fired when the pointer rests on a page button, before any click.
    #[prop_or_default]
    pub on_prefetch: Option<Callback<usize>>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.75rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[rgba(var(--surface-rgb),0.95)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "shadow-sm",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex flex-col items-center gap-2" aria-label={t::ARIA_NAV}>
            <div class="flex flex-wrap items-center gap-2">
                <button
                    type="button"
                    class={base_btn_classes.clone()}
                    disabled={prev_disabled}
                    onclick={prev_onclick}
                    aria-label={t::ARIA_PREV}
                >
                    <i class="fas fa-chevron-left" aria-hidden="true"></i>
                </button>
                { for visible_range(current_page, total_pages).map(|page| {
                    let is_current = page == current_page;
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        is_current.then_some(
                            "bg-[var(--primary)] text-white border-transparent cursor-default pointer-events-none"
                        )
                    );
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };
                    let onmouseenter = props.on_prefetch.clone().map(|prefetch| {
                        Callback::from(move |_: MouseEvent| prefetch.emit(page))
                    });

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                            aria-current={is_current.then(|| AttrValue::from("page"))}
                            disabled={is_current}
                            {onclick}
                            {onmouseenter}
                        >
                            { page }
                        </button>
                    }
                }) }
                <button
                    type="button"
                    class={base_btn_classes.clone()}
                    disabled={next_disabled}
                    onclick={next_onclick}
                    aria-label={t::ARIA_NEXT}
                >
                    <i class="fas fa-chevron-right" aria-hidden="true"></i>
                </button>
            </div>
            <p class="text-xs text-[var(--muted)]">
                { fill_two(t::SUMMARY_TEMPLATE, current_page, total_pages) }
            </p>
        </nav>
    }
}
