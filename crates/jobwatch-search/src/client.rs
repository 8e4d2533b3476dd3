//! HTTP client for the job search endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{Posting, SearchError};

/// Production search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://www.amazon.jobs/en/search.json";

/// Response envelope for a search query.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Matching listings. An absent array is an empty result, not an error.
    #[serde(default)]
    jobs: Vec<Posting>,
}

/// Client for the job search endpoint.
///
/// The endpoint URL is a constructor argument so tests can point at a mock
/// server.
pub struct SearchClient {
    http: Client,
    search_url: String,
}

impl SearchClient {
    /// Create a new client for the given search endpoint URL.
    pub fn new(search_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            search_url: search_url.into(),
        }
    }

    /// Run one keyword query, restricted to entry-level software postings
    /// from the last day, sorted most-recent-first.
    ///
    /// A failing query surfaces as an error; it is the caller's decision to
    /// continue with the remaining terms. No retry happens here.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Posting>, SearchError> {
        let response = self
            .http
            .get(&self.search_url)
            .query(&[
                ("normalized_country_code[]", "USA"),
                ("offset", "0"),
                ("result_limit", "20"),
                ("sort", "recent"),
                ("country", "USA"),
                ("base_query", term),
                ("category[]", "software-development"),
                ("experience[]", "entry-level"),
                ("level[]", "entry-level"),
                ("posted_within[]", "1d"),
            ])
            .header("Accept", "application/json")
            .header("Accept-Language", "en-US,en;q=0.5")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                term: term.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(term, count = parsed.jobs.len(), "search returned postings");
        Ok(parsed.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn jobs_body() -> serde_json::Value {
        serde_json::json!({
            "jobs": [
                {
                    "id_icims": "2900001",
                    "title": "Software Development Engineer I",
                    "location": "Seattle, WA",
                    "posted_date": "March 1, 2024",
                    "level": "Entry",
                    "basic_qualifications": "BS in CS or equivalent"
                },
                {
                    "id_icims": "2900002",
                    "title": "System Development Engineer",
                    "posted_date": "March 1, 2024"
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_search_parses_jobs() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/search.json"))
            .and(query_param("base_query", "sde 2025"))
            .and(query_param("sort", "recent"))
            .and(query_param("result_limit", "20"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(jobs_body()))
            .mount(&server)
            .await;

        let client = SearchClient::new(format!("{}/en/search.json", server.uri()));
        let postings = client.search("sde 2025").await.unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].id, "2900001");
        assert_eq!(postings[0].location, "Seattle, WA");
        assert_eq!(postings[0].level.as_deref(), Some("Entry"));

        // Optional fields absent on the wire become None / empty.
        assert_eq!(postings[1].id, "2900002");
        assert_eq!(postings[1].location, "");
        assert_eq!(postings[1].level, None);
        assert_eq!(postings[1].basic_qualifications, None);
    }

    #[tokio::test]
    async fn test_search_missing_jobs_array_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hits": 0
            })))
            .mount(&server)
            .await;

        let client = SearchClient::new(server.uri());
        let postings = client.search("software dev engineer").await.unwrap();
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_search_non_200_is_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = SearchClient::new(server.uri());
        let err = client.search("sde 2025").await.unwrap_err();

        match err {
            SearchError::Status { term, status } => {
                assert_eq!(term, "sde 2025");
                assert_eq!(status, 500);
            }
            other => panic!("expected Status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = SearchClient::new(server.uri());
        let err = client.search("sde 2025").await.unwrap_err();
        assert!(matches!(err, SearchError::Json(_)));
    }
}
