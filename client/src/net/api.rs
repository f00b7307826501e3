//! REST client for the shortener API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Nothing here retries or logs;
//! callers decide how a failure is surfaced.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::config::api_base;
#[cfg(feature = "hydrate")]
use super::types::{CreateUrlRequest, Envelope};
use super::types::{PaginatedResponse, ResolvedUrl, ShortUrl};

/// Failure of a single API round trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("request failed: {status}")]
    Http { status: u16 },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[cfg(feature = "hydrate")]
    fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    #[cfg(feature = "hydrate")]
    fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn ensure_success(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http { status })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn urls_endpoint(base: &str, page: u32) -> String {
    format!("{base}/urls?page={page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_endpoint(base: &str) -> String {
    format!("{base}/urls")
}

#[cfg(any(test, feature = "hydrate"))]
fn url_endpoint(base: &str, id: i64) -> String {
    format!("{base}/urls/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn resolve_endpoint(base: &str, code: &str) -> String {
    format!("{base}/resolve/{code}")
}

/// Fetch one page of short links via `GET /urls?page={page}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status, or an
/// undecodable body.
pub async fn list_urls(page: u32) -> Result<PaginatedResponse<ShortUrl>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = urls_endpoint(&api_base(), page);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(ApiError::network)?;
        ensure_success(resp.status())?;
        resp.json::<PaginatedResponse<ShortUrl>>()
            .await
            .map_err(ApiError::decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err(ApiError::Unavailable)
    }
}

/// Shorten `original_url` via `POST /urls`.
///
/// The server validates the URL and assigns the code. The response may be
/// bare or wrapped in `{ "data": ... }`; both yield the created record.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status (including
/// server-side validation rejections), or an undecodable body.
pub async fn create_url(original_url: &str) -> Result<ShortUrl, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = CreateUrlRequest { original_url: original_url.to_owned() };
        let resp = gloo_net::http::Request::post(&create_endpoint(&api_base()))
            .json(&payload)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        ensure_success(resp.status())?;
        let body: Envelope<ShortUrl> = resp.json().await.map_err(ApiError::decode)?;
        Ok(body.into_inner())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = original_url;
        Err(ApiError::Unavailable)
    }
}

/// Delete a short link via `DELETE /urls/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status, which
/// includes deleting an id that is already gone.
pub async fn delete_url(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&url_endpoint(&api_base(), id))
            .send()
            .await
            .map_err(ApiError::network)?;
        ensure_success(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Look up the destination of `code` via `GET /resolve/{code}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status (unknown
/// code), or an undecodable body.
pub async fn resolve_code(code: &str) -> Result<ResolvedUrl, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&resolve_endpoint(&api_base(), code))
            .send()
            .await
            .map_err(ApiError::network)?;
        ensure_success(resp.status())?;
        let body: Envelope<ResolvedUrl> = resp.json().await.map_err(ApiError::decode)?;
        Ok(body.into_inner())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(ApiError::Unavailable)
    }
}
