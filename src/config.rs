//! Dev server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup function instead of reading the process
//! environment directly, so tests can feed a map without touching global
//! state. `DevConfig::from_env` is the thin production wrapper.

use std::net::IpAddr;
use std::path::PathBuf;

use reqwest::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5173;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

/// Errors produced while reading dev server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but its value could not be used.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Where `/api` requests are forwarded and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Backend origin, e.g. `http://localhost:8000`. Never ends with `/`.
    pub target: String,
    /// Drop the incoming `Host` header so the upstream sees its own authority.
    pub change_origin: bool,
}

impl ProxyConfig {
    /// Build the upstream URL for an incoming path and query.
    ///
    /// # Errors
    ///
    /// Returns an error string if the joined URL does not parse.
    pub fn upstream_url(&self, path_and_query: &str) -> Result<Url, String> {
        let joined = format!("{}{path_and_query}", self.target);
        Url::parse(&joined).map_err(|e| format!("{joined}: {e}"))
    }
}

/// Full dev server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub proxy: ProxyConfig,
}

impl DevConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `API_URL`: backend origin (default `http://localhost:8000`)
    /// - `API_CHANGE_ORIGIN`: `true` (default) or `false`
    /// - `HOST`: bind address (default `0.0.0.0`)
    /// - `PORT`: bind port (default 5173)
    /// - `STATIC_DIR`: built UI directory (default `client/dist`)
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let target = parse_target(lookup("API_URL").as_deref())?;
        let change_origin = parse_bool("API_CHANGE_ORIGIN", lookup("API_CHANGE_ORIGIN").as_deref(), true)?;

        let host = lookup("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_owned())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::Invalid { var: "HOST", reason: e.to_string() })?;
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self { host, port, static_dir, proxy: ProxyConfig { target, change_origin } })
    }
}

fn parse_target(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.unwrap_or(DEFAULT_API_URL).trim();
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid { var: "API_URL", reason: e.to_string() })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            var: "API_URL",
            reason: format!("unsupported scheme '{}' (expected http or https)", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::Invalid { var: "API_URL", reason: "missing host".into() });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_bool(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid { var, reason: format!("expected a boolean, got '{other}'") }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
