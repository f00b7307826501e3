//! Local UI chrome state (active sidebar tab and header title).
//!
//! DESIGN
//! ======
//! Kept apart from `links` so switching tabs never touches the cached page.
//! The one coupling is the reload request `select_tab` returns, which the
//! home page turns into a fetch.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level UI state: which sidebar tab is showing.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
}

impl UiState {
    /// Switch to `tab`. Returns `true` when the switch requires the link
    /// list to be reloaded, which is every time the list tab is selected.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.active_tab = tab;
        tab == Tab::List
    }
}

/// Sidebar tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Create,
    List,
}

impl Tab {
    /// Sidebar button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create Link",
            Self::List => "All Links",
        }
    }

    /// Page header title while the tab is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Link Creation",
            Self::List => "Shortened Links",
        }
    }
}
