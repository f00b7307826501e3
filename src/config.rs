//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Path prefix the host forwards to the upstream API when proxying.
pub const PROXY_PREFIX: &str = "/api";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Upstream shortener API base, without a trailing slash.
    pub api_url: String,
    /// Mount `/api/*` and point the browser at it instead of `api_url`.
    pub proxy_api: bool,
    pub proxy_timeout_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_owned(),
            proxy_api: true,
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    }
}

impl HostConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `API_URL`: upstream base URL, default `http://localhost:8000/api`
    /// - `PROXY_API`: `true` (default) or `false`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_url = match get("API_URL") {
            Some(raw) => parse_api_url(&raw)?,
            None => defaults.api_url,
        };
        let proxy_api = get("PROXY_API").map_or(Ok(defaults.proxy_api), |raw| parse_bool("PROXY_API", &raw))?;
        let proxy_timeout_secs = get("PROXY_TIMEOUT_SECS")
            .map_or(Ok(defaults.proxy_timeout_secs), |raw| parse_number("PROXY_TIMEOUT_SECS", &raw))?;
        let port = get("PORT").map_or(Ok(defaults.port), |raw| parse_number("PORT", &raw))?;

        Ok(Self { port, api_url, proxy_api, proxy_timeout_secs })
    }

    /// API base the browser should call.
    pub fn public_api_base(&self) -> String {
        if self.proxy_api { PROXY_PREFIX.to_owned() } else { self.api_url.clone() }
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::Invalid { var: "API_URL", value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw.to_owned() }),
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>()
        .map_err(|_| ConfigError::Invalid { var, value: raw.to_owned() })
}
