use yew::prelude::*;

use crate::i18n::current::common as t;

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex items-center justify-center gap-3 p-6" role="status" aria-live="polite" aria-busy="true">
            <div class="h-10 w-10 animate-spin rounded-full border-[3px] border-[var(--primary)] border-t-transparent"></div>
            <span class="sr-only">{ t::LOADING }</span>
        </div>
    }
}
