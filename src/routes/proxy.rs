//! Same-origin forwarding of `/api/*` to the upstream shortener API.
//!
//! The path is forwarded exactly as received, percent-encoding included, so
//! an encoded `?` or `/` inside a segment stays inside that segment.
//! Only the method, path, query, body and the `content-type`/`accept`
//! headers travel upstream; the upstream status, body and `content-type`
//! come back unchanged. An unreachable upstream becomes `502 Bad Gateway`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Mount point of the proxy; stripped before joining with `API_URL`.
pub const PROXY_PREFIX: &str = "/api";

const FORWARDED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Join the upstream base with the proxied path and raw query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/{*path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = uri.path().strip_prefix(PROXY_PREFIX).unwrap_or(uri.path());
    let url = upstream_url(&state.config.api_url, path, uri.query());

    let mut request = state.http.request(method.clone(), &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let mut response_headers = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        response_headers.insert(header::CONTENT_TYPE, content_type.clone());
    }
    let bytes = upstream.bytes().await?;

    tracing::debug!(%method, %url, status = status.as_u16(), "proxied api request");
    Ok((status, response_headers, bytes).into_response())
}
