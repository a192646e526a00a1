//! HTTP loader for the static collections payload.
//!
//! Client-side (hydrate): a single `GET` via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since the payload is only
//! fetched after the page mounts in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (status, transport, decode) is folded into one `LoadError`
//! whose `Display` text is what the page shows after `"Error: "`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Collection, CollectionsEnvelope};

/// Fixed path of the collections payload.
pub const COLLECTIONS_ENDPOINT: &str = "/data/raw.json";

/// Message shown for any non-success HTTP status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

/// Message used when an underlying error carries no text.
pub const FALLBACK_LOAD_MESSAGE: &str = "Failed to load collections";

/// Why the collections payload could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The provider answered with a non-success status. The status is kept
    /// for logging but not shown to the user.
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Fetch { status: u16 },

    /// The request never produced a response (network, CORS, body read).
    #[error("{0}")]
    Request(String),

    /// The body was not JSON or did not match the expected envelope.
    #[error("{0}")]
    Parse(String),
}

impl LoadError {
    /// Transport failure, substituting the fallback for an empty message.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(or_fallback(message.into()))
    }

    /// Decode failure, substituting the fallback for an empty message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(or_fallback(message.into()))
    }
}

fn or_fallback(message: String) -> String {
    if message.trim().is_empty() { FALLBACK_LOAD_MESSAGE.to_owned() } else { message }
}

/// Reject any status outside `200..=299`.
///
/// # Errors
///
/// Returns `LoadError::Fetch` carrying the status.
pub fn ensure_success(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(LoadError::Fetch { status }) }
}

/// Decode a `/data/raw.json` body into the ordered collection list.
///
/// # Errors
///
/// Returns `LoadError::Parse` if the body is not JSON or any required field
/// (`data`, `collections`, `collectionId`, `name`, `isPublic`) is missing or
/// has the wrong type.
pub fn decode_collections(body: &str) -> Result<Vec<Collection>, LoadError> {
    let envelope: CollectionsEnvelope = serde_json::from_str(body).map_err(|e| LoadError::parse(e.to_string()))?;
    Ok(envelope.data.collections)
}

/// Fetch and decode the collection list from [`COLLECTIONS_ENDPOINT`].
///
/// # Errors
///
/// Returns a `LoadError` for a non-success status, a transport failure, or
/// an undecodable body. On the server build this always errors.
pub async fn fetch_collections() -> Result<Vec<Collection>, LoadError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COLLECTIONS_ENDPOINT)
            .send()
            .await
            .map_err(|e| LoadError::request(e.to_string()))?;
        ensure_success(resp.status())?;
        let body = resp.text().await.map_err(|e| LoadError::request(e.to_string()))?;
        decode_collections(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(LoadError::request("not available on server"))
    }
}
