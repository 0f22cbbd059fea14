use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::theme_toggle::ThemeToggle,
    i18n::current::{common as common_text, header as t},
    router::Route,
};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let link_class = |active: bool| {
        classes!(
            "px-3",
            "py-2",
            "rounded-lg",
            "text-sm",
            "font-semibold",
            "transition-colors",
            if active {
                "text-[var(--primary)]"
            } else {
                "text-[var(--text)] hover:text-[var(--primary)]"
            }
        )
    };
    let on_leaderboard = matches!(
        route,
        Some(Route::Home | Route::Leaderboard | Route::LocalLeaderboard { .. })
    );
    let on_admin = matches!(route, Some(Route::NewArticle | Route::EditArticle { .. }));

    html! {
        <header class="sticky top-0 z-40 border-b border-[var(--border)] bg-[var(--surface)]">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
                <Link<Route> to={Route::Home} classes="text-lg font-bold">
                    { common_text::BRAND_NAME }
                </Link<Route>>
                <nav class="flex items-center gap-1" aria-label={t::NAV_MAIN_ARIA}>
                    <Link<Route> to={Route::Leaderboard} classes={link_class(on_leaderboard)}>
                        { t::NAV_LEADERBOARD }
                    </Link<Route>>
                    <Link<Route> to={Route::NewArticle} classes={link_class(on_admin)}>
                        { t::NAV_ADMIN }
                    </Link<Route>>
                    <ThemeToggle class="ml-2" />
                </nav>
            </div>
        </header>
    }
}
