use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/leaderboard")]
    Leaderboard,

    #[at("/leaderboard/:location")]
    LocalLeaderboard { location: String },

    #[at("/posts/:id")]
    ArticleDetail { id: String },

    #[at("/admin/articles/new")]
    NewArticle,

    #[at("/admin/articles/:id/edit")]
    EditArticle { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Leaderboard => html! { <pages::leaderboard::LeaderboardPage /> },
        Route::LocalLeaderboard {
            location,
        } => {
            html! { <pages::leaderboard::LeaderboardPage location={Some(location)} /> }
        },
        Route::ArticleDetail {
            id,
        } => {
            html! { <pages::article_detail::ArticleDetailPage id={id} /> }
        },
        Route::NewArticle => html! { <pages::article_editor::ArticleEditorPage /> },
        Route::EditArticle {
            id,
        } => {
            html! { <pages::article_editor::ArticleEditorPage id={Some(id)} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <main class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
