//! `/api` forwarding to the backend origin.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser UI calls relative `/api/...` paths. During development the
//! backend runs as a separate process, so this handler relays each request
//! to `ProxyConfig::target` and relays the response back untouched. There is
//! no inspection, rewriting, or retry beyond header hygiene.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{StatusCode, uri::PathAndQuery};
use axum::response::{IntoResponse, Response};
use reqwest::redirect::Policy;

use crate::config::ProxyConfig;

/// Upper bound on buffered request bodies.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Connection-scoped headers that must not be forwarded in either direction.
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::CONTENT_LENGTH,
];

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while relaying a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming request body could not be buffered.
    #[error("request body read failed: {0}")]
    ReadBody(String),

    /// The upstream URL could not be built from the incoming path.
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),

    /// The upstream request failed or its body could not be read.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ReadBody(_) | Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "proxy request failed");
        (status, self.to_string()).into_response()
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Shared proxy state, injected into the handler via the `State` extractor.
/// Clone is required by Axum; `reqwest::Client` is an `Arc` internally.
#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    pub config: ProxyConfig,
}

impl ProxyState {
    /// Build the shared upstream client. Redirects are relayed, not followed.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
        Ok(Self { client, config })
    }
}

// =============================================================================
// HANDLER
// =============================================================================

/// Relay any `/api`-prefixed request to the backend origin.
pub async fn forward(State(proxy): State<ProxyState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", PathAndQuery::as_str);
    let url = proxy.config.upstream_url(path_and_query).map_err(ProxyError::InvalidUrl)?;

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::ReadBody(e.to_string()))?;
    let headers = upstream_request_headers(&parts.headers, proxy.config.change_origin);

    tracing::debug!(method = %parts.method, %url, "forwarding to upstream");
    let upstream = proxy
        .client
        .request(parts.method, url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = strip_hop_by_hop(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Copy request headers for the upstream, dropping `Host` when rewriting origin.
pub(crate) fn upstream_request_headers(incoming: &HeaderMap, change_origin: bool) -> HeaderMap {
    let mut headers = strip_hop_by_hop(incoming);
    if change_origin {
        headers.remove(header::HOST);
    }
    headers
}

pub(crate) fn strip_hop_by_hop(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in &HOP_BY_HOP {
        out.remove(name);
    }
    // `keep-alive` has no typed constant.
    out.remove("keep-alive");
    out
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
