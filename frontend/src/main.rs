mod api;
mod components;
pub mod hooks;
mod pages;
mod preferences;
mod router;
mod utils;

use iqtest_shared::i18n;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
