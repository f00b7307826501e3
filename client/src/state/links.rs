//! Paginated link-list state owned by the home page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LinkActions` drives the transitions here from API results; the list
//! component only reads. The page counter is adopted from the server's
//! `meta.current_page` and never written from user input, so it always
//! matches the most recent successful fetch.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::net::types::{PageMeta, PaginatedResponse, ShortUrl};

/// Number of placeholder rows rendered while a fetch is in flight.
pub const SKELETON_ROWS: usize = 5;

/// Cached copy of the current page of short links.
#[derive(Clone, Debug)]
pub struct LinksState {
    pub items: Vec<ShortUrl>,
    pub meta: Option<PageMeta>,
    pub current_page: u32,
    pub loading: bool,
}

impl Default for LinksState {
    fn default() -> Self {
        Self { items: Vec::new(), meta: None, current_page: 1, loading: true }
    }
}

/// What the list component should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Rows,
}

impl LinksState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace the cached page with a successful fetch result.
    pub fn apply_page(&mut self, page: PaginatedResponse<ShortUrl>) {
        self.items = page.data;
        self.current_page = page.meta.current_page;
        self.meta = Some(page.meta);
        self.loading = false;
    }

    /// End a failed fetch. The previously cached page stays visible.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows
        }
    }

    /// Page count reported by the server, or 1 before the first fetch.
    pub fn total_pages(&self) -> u32 {
        self.meta.as_ref().map_or(1, |m| m.last_page.max(1))
    }

    /// Total number of links across all pages.
    pub fn total(&self) -> u64 {
        self.meta.as_ref().map_or(0, |m| m.total)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages()
    }

    /// Page the previous control requests, or `None` while it is disabled.
    pub fn prev_page(&self) -> Option<u32> {
        (!self.prev_disabled()).then(|| self.current_page.saturating_sub(1))
    }

    /// Page the next control requests, or `None` while it is disabled.
    pub fn next_page(&self) -> Option<u32> {
        (!self.next_disabled()).then(|| self.current_page + 1)
    }

    pub fn show_pager(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }

    pub fn total_label(&self) -> String {
        format!("{} TOTAL", self.total())
    }
}
