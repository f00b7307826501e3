//! Home page: sidebar, header, and the active tab's content.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the page controller. It owns the tab switch, provides
//! `LinkActions` to the components below it, loads the first page on mount,
//! and reloads the current page whenever the list tab is selected.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::sidebar::Sidebar;
use crate::components::toaster::Toaster;
use crate::components::url_form::UrlForm;
use crate::components::url_list::UrlList;
use crate::state::links::LinksState;
use crate::state::toast::ToastState;
use crate::state::ui::{Tab, UiState};
use crate::util::link_actions::LinkActions;

/// Single-screen shortener UI.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let links = expect_context::<RwSignal<LinksState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let actions = LinkActions::new(links, toasts);
    provide_context(actions);

    // Load on mount. Effects only run in the browser.
    Effect::new(move || actions.invalidate());

    let active = Signal::derive(move || ui.get().active_tab);
    let on_select = Callback::new(move |tab: Tab| {
        if ui.try_update(|u| u.select_tab(tab)).unwrap_or(false) {
            actions.invalidate();
        }
    });

    view! {
        <div class="home-page">
            <Sidebar active=active on_select=on_select/>

            <main class="home-page__main">
                <header class="home-page__header">
                    <h1 class="home-page__title">{move || active.get().title()}</h1>
                </header>

                <div class="home-page__content">
                    {move || match active.get() {
                        Tab::Create => {
                            view! {
                                <div class="home-page__center">
                                    <UrlForm/>
                                </div>
                            }
                                .into_any()
                        }
                        Tab::List => {
                            view! {
                                <section class="home-page__list">
                                    <div class="home-page__list-header">
                                        <h2>"Manage Links"</h2>
                                        <span class="badge">{move || links.with(LinksState::total_label)}</span>
                                    </div>
                                    <UrlList/>
                                </section>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </main>

            <Toaster/>
        </div>
    }
}
