//! Posting model.

use serde::{Deserialize, Serialize};

/// One job listing returned by the search endpoint.
///
/// `id` uniquely identifies a posting across queries and across runs; two
/// postings with the same id are the same posting regardless of any other
/// field differences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    /// Stable identifier assigned by the source system.
    #[serde(rename = "id_icims")]
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Human-readable location. The API spells the key `location` or
    /// `locations` depending on the endpoint revision.
    #[serde(default, alias = "locations")]
    pub location: String,
    /// Posted date as rendered by the API, e.g. "March 1, 2024".
    pub posted_date: String,
    /// Seniority level, when the listing carries one.
    #[serde(default)]
    pub level: Option<String>,
    /// Basic qualifications blurb, when the listing carries one.
    #[serde(default)]
    pub basic_qualifications: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_location_key() {
        let p: Posting = serde_json::from_str(
            r#"{"id_icims":"1","title":"SDE","location":"Seattle, WA","posted_date":"March 1, 2024"}"#,
        )
        .unwrap();
        assert_eq!(p.location, "Seattle, WA");
    }

    #[test]
    fn test_locations_key_is_accepted_as_alias() {
        let p: Posting = serde_json::from_str(
            r#"{"id_icims":"1","title":"SDE","locations":"Seattle, WA","posted_date":"March 1, 2024"}"#,
        )
        .unwrap();
        assert_eq!(p.location, "Seattle, WA");
    }

    #[test]
    fn test_missing_location_defaults_to_empty() {
        let p: Posting = serde_json::from_str(
            r#"{"id_icims":"1","title":"SDE","posted_date":"March 1, 2024"}"#,
        )
        .unwrap();
        assert_eq!(p.location, "");
    }
}
