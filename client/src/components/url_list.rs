//! Paginated table of short links with copy, open, and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `LinksState` from context and never mutates it directly: deletes
//! and page changes go through `LinkActions`, and the table re-renders when
//! the reload lands.

#[cfg(test)]
#[path = "url_list_test.rs"]
mod url_list_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::ShortUrl;
use crate::state::links::{LinksState, ListView, SKELETON_ROWS};
use crate::util::browser::open_in_new_tab;
use crate::util::format::format_created_at;
use crate::util::link_actions::LinkActions;

const COLUMNS: [&str; 4] = ["Original Destination", "Shortened URL", "Date Created", "Actions"];

fn column_class(index: usize) -> &'static str {
    match index {
        2 => "url-table__head url-table__date",
        3 => "url-table__head url-table__actions",
        _ => "url-table__head",
    }
}

/// Link list: skeleton while loading, empty state, or table plus pager.
#[component]
pub fn UrlList() -> impl IntoView {
    let links = expect_context::<RwSignal<LinksState>>();
    let actions = expect_context::<LinkActions>();

    view! {
        <div class="url-list">
            {move || match links.with(LinksState::view) {
                ListView::Loading => view! { <Skeleton/> }.into_any(),
                ListView::Empty => view! { <EmptyState/> }.into_any(),
                ListView::Rows => {
                    view! {
                        <UrlTable links=links actions=actions/>
                        <Pager links=links actions=actions/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn Skeleton() -> impl IntoView {
    view! {
        <div class="url-list__skeleton" aria-busy="true">
            {(0..SKELETON_ROWS).map(|_| view! { <div class="skeleton-row"></div> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon" aria-hidden="true">"↗"</div>
            <h3 class="empty-state__title">"No data available"</h3>
            <p class="empty-state__hint">"Your shortened URLs will appear here."</p>
        </div>
    }
}

#[component]
fn UrlTable(links: RwSignal<LinksState>, actions: LinkActions) -> impl IntoView {
    let rows = move || {
        links
            .get()
            .items
            .into_iter()
            .map(|url| view! { <UrlRow url=url actions=actions/> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="table-wrap">
            <table class="url-table">
                <thead>
                    <tr>
                        {COLUMNS
                            .iter()
                            .enumerate()
                            .map(|(i, name)| view! { <th class=column_class(i)>{*name}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn UrlRow(url: ShortUrl, actions: LinkActions) -> impl IntoView {
    let ShortUrl { id, original_url, short_url, created_at, .. } = url;
    let copy_target = short_url.clone();
    let open_target = short_url.clone();
    let original_title = original_url.clone();

    view! {
        <tr class="url-table__row">
            <td class="url-table__original">
                <p class="truncate" title=original_title>{original_url}</p>
            </td>
            <td>
                <div class="url-table__short">
                    <code class="mono">{short_url}</code>
                    <button
                        class="btn btn--ghost btn--icon"
                        title="Copy link"
                        on:click=move |_| actions.copy(copy_target.clone(), None)
                    >
                        "⧉"
                    </button>
                    <button
                        class="btn btn--ghost btn--icon"
                        title="Open link"
                        on:click=move |_| open_in_new_tab(&open_target)
                    >
                        "↗"
                    </button>
                </div>
            </td>
            <td class="url-table__date">{format_created_at(&created_at)}</td>
            <td class="url-table__actions">
                <button class="btn btn--ghost btn--icon" title="Delete link" on:click=move |_| actions.delete(id)>
                    "🗑"
                </button>
            </td>
        </tr>
    }
}

/// Prev/next controls. Disabled states come straight from `LinksState`;
/// the handlers only fire for pages the gating allows.
#[component]
fn Pager(links: RwSignal<LinksState>, actions: LinkActions) -> impl IntoView {
    let on_prev = move |_| {
        if let Some(page) = links.with_untracked(LinksState::prev_page) {
            actions.fetch_page(page);
        }
    };
    let on_next = move |_| {
        if let Some(page) = links.with_untracked(LinksState::next_page) {
            actions.fetch_page(page);
        }
    };

    view! {
        <Show when=move || links.with(LinksState::show_pager)>
            <div class="pager">
                <p class="pager__label">{move || links.with(LinksState::page_label)}</p>
                <div class="pager__buttons">
                    <button
                        class="btn btn--outline btn--icon"
                        title="Previous page"
                        disabled=move || links.with(LinksState::prev_disabled)
                        on:click=on_prev
                    >
                        "‹"
                    </button>
                    <button
                        class="btn btn--outline btn--icon"
                        title="Next page"
                        disabled=move || links.with(LinksState::next_disabled)
                        on:click=on_next
                    >
                        "›"
                    </button>
                </div>
            </div>
        </Show>
    }
}
