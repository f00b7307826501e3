use super::*;
use crate::net::types::PageLinks;

fn url(id: i64) -> ShortUrl {
    ShortUrl {
        id,
        code: format!("c{id}"),
        original_url: format!("https://example.com/{id}"),
        short_url: format!("https://sho.rt/c{id}"),
        created_at: "2025-01-05T12:30:00Z".to_owned(),
    }
}

fn page(current: u32, last: u32, total: u64, rows: i64) -> PaginatedResponse<ShortUrl> {
    PaginatedResponse {
        data: (1..=rows).map(url).collect(),
        meta: PageMeta { current_page: current, last_page: last, per_page: 10, total, ..PageMeta::default() },
        links: PageLinks::default(),
    }
}

fn loaded(current: u32, last: u32) -> LinksState {
    let mut state = LinksState::default();
    state.apply_page(page(current, last, u64::from(last) * 10, 10));
    state
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn default_state_is_loading_on_page_one() {
    let state = LinksState::default();
    assert!(state.loading);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.view(), ListView::Loading);
}

#[test]
fn first_page_of_three_shows_five_rows_and_label() {
    let mut state = LinksState::default();
    state.apply_page(page(1, 3, 25, 5));
    assert_eq!(state.view(), ListView::Rows);
    assert_eq!(state.items.len(), 5);
    assert_eq!(state.page_label(), "Page 1 of 3");
    assert_eq!(state.total_label(), "25 TOTAL");
}

#[test]
fn current_page_is_adopted_from_server() {
    let mut state = LinksState::default();
    // Asked for page 9 of 2; the server answers with its last page.
    state.begin_fetch();
    state.apply_page(page(2, 2, 15, 5));
    assert_eq!(state.current_page, 2);
}

#[test]
fn empty_result_renders_empty_state() {
    let mut state = LinksState::default();
    state.apply_page(page(1, 1, 0, 0));
    assert_eq!(state.view(), ListView::Empty);
    assert_eq!(state.total_label(), "0 TOTAL");
}

#[test]
fn failed_fetch_keeps_previous_rows() {
    let mut state = loaded(2, 3);
    state.begin_fetch();
    assert_eq!(state.view(), ListView::Loading);
    state.fetch_failed();
    assert_eq!(state.view(), ListView::Rows);
    assert_eq!(state.items.len(), 10);
    assert_eq!(state.current_page, 2);
}

#[test]
fn deleted_row_disappears_only_after_refetch() {
    let mut state = LinksState::default();
    state.apply_page(page(1, 1, 3, 3));
    // Delete succeeded server-side; nothing changes until the reload lands.
    state.begin_fetch();
    assert_eq!(state.items.len(), 3);
    let mut after = page(1, 1, 2, 3);
    after.data.retain(|u| u.id != 2);
    state.apply_page(after);
    assert_eq!(state.items.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
}

// =============================================================
// Pager gating
// =============================================================

#[test]
fn prev_disabled_exactly_on_first_page() {
    assert!(loaded(1, 3).prev_disabled());
    assert!(!loaded(2, 3).prev_disabled());
    assert!(!loaded(3, 3).prev_disabled());
}

#[test]
fn next_disabled_exactly_on_last_page() {
    assert!(!loaded(1, 3).next_disabled());
    assert!(!loaded(2, 3).next_disabled());
    assert!(loaded(3, 3).next_disabled());
}

#[test]
fn prev_and_next_pages_follow_gating() {
    let first = loaded(1, 3);
    assert_eq!(first.prev_page(), None);
    assert_eq!(first.next_page(), Some(2));

    let middle = loaded(2, 3);
    assert_eq!(middle.prev_page(), Some(1));
    assert_eq!(middle.next_page(), Some(3));

    let last = loaded(3, 3);
    assert_eq!(last.prev_page(), Some(2));
    assert_eq!(last.next_page(), None);
}

#[test]
fn pager_hidden_for_single_page() {
    assert!(!loaded(1, 1).show_pager());
    assert!(loaded(1, 2).show_pager());
    assert!(!LinksState::default().show_pager());
}

#[test]
fn zero_last_page_counts_as_one() {
    let mut state = LinksState::default();
    state.apply_page(page(1, 0, 0, 0));
    assert_eq!(state.total_pages(), 1);
    assert!(state.next_disabled());
}
