//! REST API helpers for the Item endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Unavailable`, since these calls
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `ApiError` instead of panicking. What to do
//! with a failure is decided by the caller in `state::items`.

#![allow(clippy::unused_async)]
// Static dispatch only; implementors are never boxed or sent across threads.
#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::types::{Item, ItemId, NewItem};

/// Collection endpoint for list and create.
pub const ITEMS_ENDPOINT: &str = "/api/items";

/// Errors produced by Item API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// No browser HTTP stack in this build.
    #[error("HTTP not available outside the browser")]
    Unavailable,
}

/// Characters escaped when an id becomes a single path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path for a single item, e.g. `/api/items/2`. Text ids are percent-encoded
/// so they stay one segment.
pub fn item_endpoint(id: &ItemId) -> String {
    let segment = id.to_string();
    format!("{ITEMS_ENDPOINT}/{}", utf8_percent_encode(&segment, PATH_SEGMENT_ENCODE_SET))
}

/// The three calls the item list page makes.
pub trait ItemsApi {
    /// `GET /api/items`: the full current set, in server order.
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;

    /// `POST /api/items` with `{ "name": ... }`. The response body is ignored.
    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError>;

    /// `DELETE /api/items/{id}`. The response body is ignored.
    async fn delete_item(&self, id: &ItemId) -> Result<(), ApiError>;
}

/// `ItemsApi` over the browser `fetch` API, using relative `/api` paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpItemsApi;

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
}

impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(ITEMS_ENDPOINT)
                .send()
                .await
                .map_err(transport)?;
            check_status(&resp)?;
            resp.json::<Vec<Item>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(ITEMS_ENDPOINT)
                .json(item)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = item;
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&item_endpoint(id))
                .send()
                .await
                .map_err(transport)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
