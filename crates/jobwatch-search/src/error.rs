//! Error types for the search client.

use thiserror::Error;

/// Errors that can occur when querying the search endpoint.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not parse as a search response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint returned a non-success status.
    #[error("search for {term:?} returned status {status}")]
    Status { term: String, status: u16 },
}
