//! Search client for the Amazon Jobs API.
//!
//! This crate provides the posting model, the recency filter that decides
//! whether a posting is fresh enough to notify about, and an HTTP client
//! that runs one keyword query against the search endpoint.

mod client;
mod error;
mod recency;
mod types;

pub use client::{DEFAULT_SEARCH_URL, SearchClient};
pub use error::SearchError;
pub use recency::{DEFAULT_WINDOW_DAYS, is_recent_on};
pub use types::Posting;
