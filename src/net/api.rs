//! HTTP client for the backend search service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning an error since the endpoint is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into [`SearchError`] so the UI can show
//! one human-readable message and stay usable for the next attempt.
//! Response bodies are parsed as JSON regardless of HTTP status so a
//! server-supplied `error` message survives non-2xx responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SearchResponse;

/// Path of the backend search endpoint.
pub const SEARCH_ENDPOINT: &str = "/search";

/// Shown when a non-2xx response carries no usable `error` field.
const FALLBACK_ERROR: &str = "Search failed";

/// Why a search attempt produced no results to render.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request never completed (DNS, connection, abort).
    #[error("network error: {0}")]
    Network(String),
    /// The body was not JSON, or a 2xx body did not match the contract.
    #[error("invalid response from server")]
    InvalidBody,
    /// Non-2xx status; carries the server's message when it sent one.
    #[error("{0}")]
    Failed(String),
    /// Searching is only possible in the browser.
    #[error("search is not available during server rendering")]
    Unavailable,
}

/// Submit a query to `POST /search` and decode the response.
///
/// # Errors
///
/// Returns a [`SearchError`] describing the failure; the caller surfaces
/// its display string in the error panel.
pub async fn submit_search(query: &str) -> Result<SearchResponse, SearchError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::types::SearchRequest {
            query: query.to_owned(),
        };
        let resp = gloo_net::http::Request::post(SEARCH_ENDPOINT)
            .json(&request)
            .map_err(|e| SearchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let ok = resp.ok();
        let body = resp
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        decode_response(ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(SearchError::Unavailable)
    }
}

/// Decode a `/search` response body given whether the HTTP status was 2xx.
///
/// Failure bodies are still parsed: the backend reports problems as
/// `{"error": "..."}` with a non-2xx status, and that message is what
/// the user should see.
pub fn decode_response(ok: bool, body: &str) -> Result<SearchResponse, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| SearchError::InvalidBody)?;

    if !ok {
        let message = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(FALLBACK_ERROR)
            .to_owned();
        return Err(SearchError::Failed(message));
    }

    serde_json::from_value(value).map_err(|_| SearchError::InvalidBody)
}
