//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the host's own endpoints (health, optional API
//! proxy) with Leptos SSR rendering under a single Axum router. The compiled
//! WASM/CSS bundle is served from the Leptos site root under `/pkg`.

pub mod proxy;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Host endpoints that do not depend on Leptos.
fn api_routes(state: AppState) -> Router {
    let mut router = Router::new().route("/healthz", get(healthz));
    if state.config.proxy_api {
        router = router.route(&format!("{}/{{*path}}", proxy::PROXY_PREFIX), any(proxy::forward));
    }
    router.with_state(state)
}

/// Full host router: API routes + Leptos SSR at `/` + bundle at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let api_base = state.config.public_api_base();

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), api_base.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
