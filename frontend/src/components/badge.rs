use iqtest_shared::BadgeTier;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub tier: BadgeTier,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let style = props.tier.style();
    html! {
        <span class={classes!("badge", "inline-flex", "items-center", "gap-1", "rounded-full", "px-2", "py-0.5", "text-xs", style.css_class)}>
            <i class={classes!("fas", style.icon)} aria-hidden="true"></i>
            { style.label }
        </span>
    }
}
