use ammonia::Builder;

/// Millisecond clock for [`iqtest_shared::perf::PerfSpan::start_with`].
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn log_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Article bodies come from the editor as HTML; strip anything executable
/// before it reaches `inner_html`.
pub fn sanitize_article_html(html: &str) -> String {
    Builder::default()
        .add_tag_attributes("img", &["loading"])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

pub fn format_date(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).to_string()
}
