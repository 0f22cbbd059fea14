use iqtest_shared::seo::{SeoGrade, SeoReport};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SeoPanelProps {
    pub report: SeoReport,
}

#[function_component(SeoPanel)]
pub fn seo_panel(props: &SeoPanelProps) -> Html {
    let grade_class = match props.report.grade() {
        SeoGrade::Good => "text-green-600",
        SeoGrade::NeedsWork => "text-amber-500",
        SeoGrade::Poor => "text-red-600",
    };

    html! {
        <aside class="seo-panel rounded-2xl border border-[var(--border)] p-4">
            <p class={classes!("text-lg", "font-bold", grade_class)}>{ props.report.summary() }</p>
            <ul class="mt-3 space-y-1 text-sm">
                { for props.report.checks.iter().map(|check| {
                    let icon = if check.passed { "fa-circle-check text-green-600" } else { "fa-circle-xmark text-red-600" };
                    html! {
                        <li class="flex items-start gap-2">
                            <i class={classes!("fas", icon)} aria-hidden="true"></i>
                            <span>{ &check.message }</span>
                        </li>
                    }
                }) }
            </ul>
        </aside>
    }
}
