//! Link mutations and the invalidate-and-reload contract.
//!
//! DESIGN
//! ======
//! `LinkActions` is a `Copy` handle over the link-list and toast signals,
//! provided through context by the home page. Every mutating operation ends
//! in [`LinkActions::invalidate`] on success, so the visible page is always a
//! server response rather than a locally patched copy.
//!
//! ERROR HANDLING
//! ==============
//! API failures are caught here, logged, and turned into error toasts. The
//! state they would have changed is left as it was.
//!
//! Requests are not deduplicated or cancelled: two quick page changes can
//! land out of order and the later response wins.

#[cfg(test)]
#[path = "link_actions_test.rs"]
mod link_actions_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{PaginatedResponse, ShortUrl};
use crate::state::form::FormState;
use crate::state::links::LinksState;
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;
use crate::state::toast::{ToastKind, ToastState};

pub const CREATED: &str = "URL shortened successfully!";
pub const CREATE_FAILED: &str = "Failed to shorten URL. Please try again.";
pub const DELETED: &str = "URL deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete URL";
pub const LOAD_FAILED: &str = "Failed to load URLs";
pub const COPIED: &str = "Copied to clipboard!";
pub const COPY_FAILED: &str = "Could not copy to clipboard";

/// Handle for everything that talks to the API on behalf of the home page.
#[derive(Clone, Copy)]
pub struct LinkActions {
    links: RwSignal<LinksState>,
    toasts: RwSignal<ToastState>,
}

impl LinkActions {
    pub fn new(links: RwSignal<LinksState>, toasts: RwSignal<ToastState>) -> Self {
        Self { links, toasts }
    }

    /// Request `page` and replace the cached list with the response.
    pub fn fetch_page(self, page: u32) {
        self.links.update(LinksState::begin_fetch);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_urls(page).await;
                self.finish_fetch(page, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page;
        }
    }

    /// Apply a list response for `page`, or clear the loading state and
    /// report the failure.
    pub fn finish_fetch(self, page: u32, result: Result<PaginatedResponse<ShortUrl>, ApiError>) {
        match result {
            Ok(result) => self.links.update(|s| s.apply_page(result)),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to fetch urls page {page}: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = (page, e);
                self.links.update(LinksState::fetch_failed);
                self.notify(ToastKind::Error, LOAD_FAILED);
            }
        }
    }

    /// Reload the page currently on screen.
    pub fn invalidate(self) {
        let page = self.links.with_untracked(|s| s.current_page);
        self.fetch_page(page);
    }

    /// Submit the form's URL. On success the form shows the new link and the
    /// list reloads; on failure the typed input is kept.
    pub fn create(self, form: RwSignal<FormState>) {
        let Some(original_url) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_url(&original_url).await;
                self.finish_create(form, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = original_url;
        }
    }

    /// Settle a create request started by [`LinkActions::create`].
    pub fn finish_create(self, form: RwSignal<FormState>, result: Result<ShortUrl, ApiError>) {
        match result {
            Ok(created) => {
                #[cfg(feature = "hydrate")]
                log::info!("shortened {} to {}", created.original_url, created.short_url);
                form.update(|f| f.submit_succeeded(&created));
                self.invalidate();
                self.notify(ToastKind::Success, CREATED);
            }
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to shorten url: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                form.update(FormState::submit_failed);
                self.notify(ToastKind::Error, CREATE_FAILED);
            }
        }
    }

    /// Delete link `id`; the row goes away when the reload confirms it.
    pub fn delete(self, id: i64) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_url(id).await;
                self.finish_delete(id, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    /// Settle a delete request: reload on success, toast on failure.
    pub fn finish_delete(self, id: i64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.invalidate();
                self.notify(ToastKind::Success, DELETED);
            }
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to delete url {id}: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = (id, e);
                self.notify(ToastKind::Error, DELETE_FAILED);
            }
        }
    }

    /// Copy `text` to the clipboard, running `on_copied` if it worked.
    pub fn copy(self, text: String, on_copied: Option<Callback<()>>) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::util::browser::copy_text(&text).await {
                    self.notify(ToastKind::Success, COPIED);
                    if let Some(cb) = on_copied {
                        cb.run(());
                    }
                } else {
                    log::warn!("clipboard write rejected");
                    self.notify(ToastKind::Error, COPY_FAILED);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, on_copied);
        }
    }

    /// Show a toast and schedule its dismissal.
    pub fn notify(self, kind: ToastKind, message: &str) {
        let Some(id) = self.toasts.try_update(|t| t.push(kind, message)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
                let _ = toasts.try_update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
