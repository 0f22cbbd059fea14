use std::rc::Rc;

use iqtest_shared::preferences::{PreferenceStore, Theme, THEME_KEY};
use yew::prelude::*;

use crate::{
    i18n::current::theme_toggle as t,
    preferences::{apply_theme, LocalStoragePreferences},
    utils::log_warn,
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let store = use_memo((), |_| LocalStoragePreferences::new());
    let theme_state = {
        let store = store.clone();
        use_state(move || Theme::load(&*store))
    };

    {
        let store = store.clone();
        let theme_state = theme_state.clone();
        use_effect_with((), move |_| {
            apply_theme(*theme_state);
            let id = store.subscribe(
                THEME_KEY,
                Rc::new(move |value: Option<&str>| {
                    let theme = value.and_then(Theme::parse).unwrap_or_default();
                    apply_theme(theme);
                    theme_state.set(theme);
                }),
            );
            move || store.unsubscribe(id)
        });
    }

    let onclick = {
        let store = store.clone();
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            if let Err(err) = theme_state.toggled().save(&*store) {
                log_warn(&format!("theme not persisted: {err}"));
                apply_theme(theme_state.toggled());
                theme_state.set(theme_state.toggled());
            }
        })
    };

    let is_dark = *theme_state == Theme::Dark;
    let label = if is_dark { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };
    let icon_class = if is_dark { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "group",
        "btn-fluent-icon",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "hover:bg-[var(--surface-alt)]",
        "transition-all",
        "duration-100",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <i
                class={classes!(
                    "fas",
                    icon_class,
                    "fa-lg",
                    "text-[var(--text)]",
                    "group-hover:text-[var(--primary)]"
                )}
                aria-hidden="true"
            ></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}
