//! Link-creation form state.
//!
//! DESIGN
//! ======
//! Plain struct driven through `RwSignal<FormState>` by the form component
//! and `LinkActions::create`. A submit moves `pending` false -> true -> false
//! exactly once; only a success clears `input`, so a failed request leaves
//! the typed URL in place for a retry.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::ShortUrl;

/// Controlled-input state for the creation form.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    /// Current text of the URL input.
    pub input: String,
    /// A create request is in flight.
    pub pending: bool,
    /// Short link returned by the last successful create.
    pub created_url: Option<String>,
    /// The created link was just copied; drives the check-mark icon.
    pub copied: bool,
}

impl FormState {
    /// Start a submit. Returns the URL to send, or `None` when the input is
    /// blank or a submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        let url = self.input.trim();
        if url.is_empty() || self.pending {
            return None;
        }
        let url = url.to_owned();
        self.pending = true;
        Some(url)
    }

    /// Show the created link and clear the input.
    pub fn submit_succeeded(&mut self, created: &ShortUrl) {
        self.created_url = Some(created.short_url.clone());
        self.input.clear();
        self.pending = false;
        self.copied = false;
    }

    /// End a failed submit. The typed input is left as-is.
    pub fn submit_failed(&mut self) {
        self.pending = false;
    }
}
