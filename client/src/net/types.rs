//! Wire-schema DTOs for the shortener REST API.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the API emits (Laravel-style resource
//! collections) so serde decoding stays lossless. Nullable fields are
//! `Option`s and fields the API may omit carry `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A shortened link as stored by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrl {
    pub id: i64,
    /// Token embedded in the short URL path.
    pub code: String,
    pub original_url: String,
    /// Fully-qualified short link, displayed verbatim.
    pub short_url: String,
    /// Creation timestamp as the API formats it.
    pub created_at: String,
}

/// One page of a collection plus page-count metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
    #[serde(default)]
    pub links: PageLinks,
}

/// Pagination metadata returned alongside `data`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    /// 1-based index of the first row on this page; `None` when empty.
    #[serde(default)]
    pub from: Option<u64>,
    /// 1-based index of the last row on this page; `None` when empty.
    #[serde(default)]
    pub to: Option<u64>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Navigation links; each is `None` when that page does not exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Request body for `POST /urls`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUrlRequest {
    pub original_url: String,
}

/// Response body for `GET /resolve/{code}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUrl {
    pub original_url: String,
}

/// Single-resource response body.
///
/// The API wraps single resources in `{ "data": ... }` on some routes and
/// returns them bare on others. Both shapes decode here and callers only
/// ever see the inner value via [`Envelope::into_inner`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}
