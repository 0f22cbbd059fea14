//! In-memory page cache behind the leaderboard list.
//!
//! The full, rank-ordered entry list is already on the client. Pages are
//! sliced ahead of time around the current page so navigation never shows a
//! loading state, while the number of materialized pages stays bounded.

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::{Range, RangeInclusive},
};

use crate::config::MAX_CACHED_PAGES;

/// Width of the page-number window shown by the pagination control.
pub const VISIBLE_WINDOW: usize = 5;
/// Extra pages cached on each side of the visible window.
pub const PREFETCH_MARGIN: usize = 2;
/// Pages within this distance of the current page survive eviction.
pub const RETAIN_RADIUS: usize = 5;

pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Up to [`VISIBLE_WINDOW`] page numbers around `current`, clamped to
/// `[1, total]`. Near the edges the window shifts instead of shrinking.
pub fn visible_range(current: usize, total: usize) -> RangeInclusive<usize> {
    let total = total.max(1);
    if total <= VISIBLE_WINDOW {
        return 1..=total;
    }
    let current = current.clamp(1, total);
    let half = VISIBLE_WINDOW / 2;
    let end = (current.saturating_sub(half).max(1) + VISIBLE_WINDOW - 1).min(total);
    let start = end + 1 - VISIBLE_WINDOW;
    start..=end
}

/// The visible window widened by [`PREFETCH_MARGIN`] on both sides.
pub fn extended_range(current: usize, total: usize) -> RangeInclusive<usize> {
    let total = total.max(1);
    let visible = visible_range(current, total);
    let start = visible.start().saturating_sub(PREFETCH_MARGIN).max(1);
    let end = (visible.end() + PREFETCH_MARGIN).min(total);
    start..=end
}

/// Index range of `page` (1-based) inside a list of `len` items.
pub fn page_bounds(len: usize, page_size: usize, page: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

#[derive(Debug, Clone)]
pub struct PageCache<T> {
    source: Vec<T>,
    items: Vec<T>,
    filtered: bool,
    page_size: usize,
    max_cached: usize,
    current_page: usize,
    cache: BTreeMap<usize, Vec<T>>,
}

impl<T: Clone> PageCache<T> {
    pub fn new(entries: Vec<T>, page_size: usize) -> Self {
        Self::with_limit(entries, page_size, MAX_CACHED_PAGES)
    }

    pub fn with_limit(entries: Vec<T>, page_size: usize, max_cached: usize) -> Self {
        let mut cache = Self {
            items: entries.clone(),
            source: entries,
            filtered: false,
            page_size: page_size.max(1),
            max_cached: max_cached.max(1),
            current_page: 1,
            cache: BTreeMap::new(),
        };
        cache.populate_around_current();
        cache
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Entries in the current (possibly filtered) view.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible_range(&self) -> RangeInclusive<usize> {
        visible_range(self.current_page, self.total_pages())
    }

    pub fn extended_range(&self) -> RangeInclusive<usize> {
        extended_range(self.current_page, self.total_pages())
    }

    pub fn is_cached(&self, page: usize) -> bool {
        self.cache.contains_key(&page)
    }

    pub fn cached_pages(&self) -> Vec<usize> {
        self.cache.keys().copied().collect()
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Entries of the current page.
    pub fn current(&self) -> &[T] {
        self.cache
            .get(&self.current_page)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Slice a page straight from the view, bypassing the cache.
    pub fn page_slice(&self, page: usize) -> &[T] {
        &self.items[page_bounds(self.items.len(), self.page_size, page)]
    }

    /// Move to `page` (clamped) and return its entries.
    pub fn go_to(&mut self, page: usize) -> &[T] {
        let page = page.clamp(1, self.total_pages());
        if page != self.current_page {
            tracing::debug!(from = self.current_page, to = page, "leaderboard page change");
        }
        self.current_page = page;
        self.populate_around_current();
        self.current()
    }

    pub fn next_page(&mut self) -> &[T] {
        self.go_to(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> &[T] {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Materialize `page` ahead of a likely click (hover on its button).
    ///
    /// Returns `true` when the page had to be sliced.
    pub fn prewarm(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() || self.cache.contains_key(&page) {
            return false;
        }
        self.insert_page(page);
        self.evict(Some(page));
        true
    }

    /// Narrow the view to entries matching `predicate`.
    ///
    /// Filtering changes the index→entry mapping, so the cache is dropped
    /// wholesale and navigation restarts from page 1.
    pub fn apply_filter(&mut self, predicate: impl Fn(&T) -> bool) {
        self.items = self
            .source
            .iter()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect();
        self.filtered = true;
        self.reset();
    }

    pub fn clear_filter(&mut self) {
        self.items = self.source.clone();
        self.filtered = false;
        self.reset();
    }

    /// Swap in a freshly fetched list. Any active filter is dropped.
    pub fn replace_source(&mut self, entries: Vec<T>) {
        self.items = entries.clone();
        self.source = entries;
        self.filtered = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.cache.clear();
        self.current_page = 1;
        self.populate_around_current();
    }

    fn populate_around_current(&mut self) {
        for page in self.extended_range() {
            if !self.cache.contains_key(&page) {
                self.insert_page(page);
            }
        }
        self.evict(None);
    }

    fn insert_page(&mut self, page: usize) {
        let slice = self.page_slice(page).to_vec();
        self.cache.insert(page, slice);
    }

    fn evict(&mut self, pinned: Option<usize>) {
        if self.cache.len() <= self.max_cached {
            return;
        }
        let current = self.current_page;
        let near = current.saturating_sub(RETAIN_RADIUS).max(1)..=current + RETAIN_RADIUS;
        let keep: BTreeSet<usize> = self.extended_range().chain(near).chain(pinned).collect();
        let before = self.cache.len();
        self.cache.retain(|page, _| keep.contains(page));
        // Small limits can still be exceeded by the neighbourhood alone.
        while self.cache.len() > self.max_cached {
            let farthest = |skip_pinned: bool| {
                self.cache
                    .keys()
                    .copied()
                    .filter(|page| *page != current && !(skip_pinned && Some(*page) == pinned))
                    .max_by_key(|page| (page.abs_diff(current), *page))
            };
            let Some(victim) = farthest(true).or_else(|| farthest(false)) else {
                break;
            };
            self.cache.remove(&victim);
        }
        tracing::debug!(before, after = self.cache.len(), current, "evicted leaderboard pages");
    }
}
