use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use iqtest_shared::pagination::PageCache;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Handle to a [`PageCache`] living across renders.
///
/// Navigation re-renders the owner; prewarming does not.
#[derive(Clone)]
pub struct PageCacheHandle<T: 'static> {
    cache: Rc<RefCell<PageCache<T>>>,
    refresh: UseForceUpdateHandle,
}

impl<T: Clone + 'static> PageCacheHandle<T> {
    pub fn current(&self) -> Vec<T> {
        self.cache.borrow().current().to_vec()
    }

    pub fn current_page(&self) -> usize {
        self.cache.borrow().current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.cache.borrow().total_pages()
    }

    pub fn go_to(&self, page: usize) {
        self.cache.borrow_mut().go_to(page);
        self.refresh.force_update();
    }

    pub fn prewarm(&self, page: usize) {
        self.cache.borrow_mut().prewarm(page);
    }

    pub fn apply_filter(&self, predicate: impl Fn(&T) -> bool) {
        self.cache.borrow_mut().apply_filter(predicate);
        self.refresh.force_update();
    }

    pub fn clear_filter(&self) {
        self.cache.borrow_mut().clear_filter();
        self.refresh.force_update();
    }

    pub fn replace_source(&self, entries: Vec<T>) {
        self.cache.borrow_mut().replace_source(entries);
        self.refresh.force_update();
    }
}

#[hook]
pub fn use_page_cache<T>(page_size: usize, max_cached: usize) -> PageCacheHandle<T>
where
    T: Clone + 'static,
{
    let cache = use_mut_ref(|| PageCache::with_limit(Vec::new(), page_size, max_cached));
    let refresh = use_force_update();
    PageCacheHandle {
        cache,
        refresh,
    }
}

/// Trailing-edge debounce: each call restarts the timer and only the last
/// value reaches `handler`. Pending calls are cancelled on unmount.
#[hook]
pub fn use_debounced_callback<T>(delay_ms: u32, handler: Callback<T>) -> Callback<T>
where
    T: 'static,
{
    let timer = use_mut_ref(|| None::<Timeout>);
    let latest = use_mut_ref(|| handler.clone());
    *latest.borrow_mut() = handler;

    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    use_callback((delay_ms,), move |value: T, (delay_ms,)| {
        let handler = latest.borrow().clone();
        let timeout = Timeout::new(*delay_ms, move || handler.emit(value));
        // Replacing the previous timeout drops and thereby cancels it.
        *timer.borrow_mut() = Some(timeout);
    })
}

pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
