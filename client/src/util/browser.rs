//! Browser integrations used by link actions: clipboard and new-tab opening.
//!
//! TRADE-OFFS
//! ==========
//! Both are best-effort browser-only behavior; SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Write `text` to the system clipboard. Returns whether the write succeeded.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
            return false;
        };
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
