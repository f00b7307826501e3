//! API base URL resolution.
//!
//! The SSR host renders the effective base into a `<meta>` tag so one WASM
//! bundle works against any deployment. Builds that run without the host
//! can bake a base in through the `API_URL` environment variable at compile
//! time. With neither, requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the runtime API base URL.
pub const API_URL_META: &str = "shortlink-api-url";

/// Pick the API base from the runtime and build-time candidates.
///
/// Blank candidates are skipped and trailing slashes are stripped, so the
/// result can be joined with `/urls` directly. Returns an empty string for a
/// same-origin base.
pub fn resolve_base_url(runtime: Option<&str>, build_time: Option<&str>) -> String {
    [runtime, build_time]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map(|base| base.trim_end_matches('/').to_owned())
        .unwrap_or_default()
}

/// The base URL every API call is issued against.
pub fn api_base() -> String {
    resolve_base_url(runtime_base().as_deref(), option_env!("API_URL"))
}

fn runtime_base() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_URL_META}\"]");
        document.query_selector(&selector).ok()??.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
