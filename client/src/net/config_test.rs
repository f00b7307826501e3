use super::*;

#[test]
fn runtime_base_wins_over_build_time() {
    assert_eq!(resolve_base_url(Some("/api"), Some("http://build.test")), "/api");
}

#[test]
fn blank_runtime_falls_back_to_build_time() {
    assert_eq!(resolve_base_url(Some("  "), Some("http://build.test/api")), "http://build.test/api");
    assert_eq!(resolve_base_url(None, Some("http://build.test/api")), "http://build.test/api");
}

#[test]
fn trailing_slashes_are_stripped() {
    assert_eq!(resolve_base_url(Some("http://api.test/v1//"), None), "http://api.test/v1");
}

#[test]
fn no_candidates_means_same_origin() {
    assert_eq!(resolve_base_url(None, None), "");
    assert_eq!(resolve_base_url(Some(""), Some("")), "");
}

#[test]
fn root_slash_resolves_to_same_origin() {
    assert_eq!(resolve_base_url(Some("/"), None), "");
}
