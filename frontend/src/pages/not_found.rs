use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="mx-auto max-w-xl space-y-3 px-4 py-16 text-center">
            <h2 class="text-2xl font-bold">{ t::TITLE }</h2>
            <p>{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes="text-[var(--primary)]">{ t::BACK_HOME }</Link<Route>>
        </section>
    }
}
