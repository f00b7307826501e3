//! Left navigation rail with the two top-level tabs.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::ui::Tab;

const BRAND: &str = "Shortlink";

fn tab_class(active: Tab, tab: Tab) -> &'static str {
    if active == tab { "sidebar__tab sidebar__tab--active" } else { "sidebar__tab" }
}

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Create => "+",
        Tab::List => "☰",
    }
}

/// Sidebar tab selector. Selection is reported through `on_select`; the
/// owner decides what switching means.
#[component]
pub fn Sidebar(#[prop(into)] active: Signal<Tab>, on_select: Callback<Tab>) -> impl IntoView {
    let tab_button = move |tab: Tab| {
        view! {
            <button
                class=move || tab_class(active.get(), tab)
                aria-current=move || (active.get() == tab).then_some("page")
                on:click=move |_| on_select.run(tab)
            >
                <span class="sidebar__icon" aria-hidden="true">{tab_icon(tab)}</span>
                {tab.label()}
            </button>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">{BRAND}</div>
            <nav class="sidebar__nav">
                {tab_button(Tab::Create)}
                {tab_button(Tab::List)}
            </nav>
        </aside>
    }
}
