//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One origin serves both halves of the dev setup: every path starting with
//! `/api` is relayed to the backend, and every other path is a static asset
//! from the built UI directory, with unknown paths falling back to
//! `index.html`.

use std::path::Path;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::proxy::{self, ProxyState};

/// Prefix owned by the backend. Matched with `starts_with`, so `/api`,
/// `/api/`, `/api/items` and `/apix` are all forwarded.
pub const API_PREFIX: &str = "/api";

/// Whether a request path is relayed to the backend.
pub fn is_api_path(path: &str) -> bool {
    path.starts_with(API_PREFIX)
}

/// Divert `/api`-prefixed requests to the proxy before routing.
async fn api_prefix(State(state): State<ProxyState>, req: Request, next: Next) -> Response {
    if is_api_path(req.uri().path()) {
        proxy::forward(State(state), req).await.into_response()
    } else {
        next.run(req).await
    }
}

/// Full dev server: `/api` proxy, `/healthz`, and static UI assets.
pub fn app(state: ProxyState, static_dir: &Path) -> Router {
    let assets = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(middleware::from_fn_with_state(state, api_prefix))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
