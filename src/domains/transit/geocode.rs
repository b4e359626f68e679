//! Geocode client for the transit backend.
//!
//! Resolves a free-text location query into a list of coordinate candidates
//! via `GET {base}/geocode`. The backend orders candidates by relevance and
//! that order is preserved as-is.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::TransitError;
use super::types::Locale;

/// API name used in error messages. Part of the error text contract.
const API_NAME: &str = "Geocode";

/// A validated geocode request.
#[derive(Debug, Clone)]
pub struct GeocodeRequest {
    pub locale: Locale,
    pub query: String,
}

/// One geocode candidate returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeLocation {
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

/// Build the query fields for a geocode request.
///
/// Pure mapping; emission order is fixed for determinism.
pub fn build_geocode_query(params: &GeocodeRequest) -> Vec<(&'static str, String)> {
    vec![
        ("locale", params.locale.as_str().to_string()),
        ("query", params.query.clone()),
    ]
}

/// Client for the backend geocode endpoint.
#[derive(Debug, Clone)]
pub struct GeocodeApi {
    base_url: String,
    client: reqwest::Client,
}

impl GeocodeApi {
    /// Create a client against the given base endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Resolve a location query to geocode candidates.
    ///
    /// Performs exactly one outbound call. A non-success status fails with
    /// the backend error without reading the body; a success status with an
    /// undecodable body fails with a decode error.
    pub async fn geocode(
        &self,
        params: &GeocodeRequest,
    ) -> Result<Vec<GeocodeLocation>, TransitError> {
        let url = format!("{}/geocode", self.base_url);
        debug!("GET {} query={}", url, params.query);

        let response = self
            .client
            .get(&url)
            .query(&build_geocode_query(params))
            .send()
            .await
            .map_err(|source| TransitError::Request {
                api: API_NAME,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransitError::backend(API_NAME, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransitError::Request {
                api: API_NAME,
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| TransitError::Decode {
            api: API_NAME,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_build_query_contains_exactly_locale_and_query() {
        let request = GeocodeRequest {
            locale: Locale::En,
            query: "Tel Aviv".to_string(),
        };
        let query = build_geocode_query(&request);
        assert_eq!(
            query,
            vec![
                ("locale", "en".to_string()),
                ("query", "Tel Aviv".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_query_url_encodes() {
        let request = GeocodeRequest {
            locale: Locale::He,
            query: "תל אביב - יפו".to_string(),
        };
        let encoded = serde_urlencoded::to_string(build_geocode_query(&request)).unwrap();
        assert!(encoded.starts_with("locale=he&query="));
        assert!(!encoded.contains(' '));
    }

    #[tokio::test]
    async fn test_geocode_success_preserves_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/geocode")
                    .query_param("locale", "he")
                    .query_param("query", "ירושלים");
                then.status(200).json_body(json!([
                    {"description": "First", "lat": 31.77, "lng": 35.23},
                    {"description": "Second", "lat": 31.78, "lng": 35.21,
                     "code": "J2", "place_id": "xyz"}
                ]));
            })
            .await;

        let api = GeocodeApi::new(server.base_url());
        let results = api
            .geocode(&GeocodeRequest {
                locale: Locale::He,
                query: "ירושלים".to_string(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].description, "First");
        assert_eq!(results[1].code.as_deref(), Some("J2"));
        assert_eq!(results[1].place_id.as_deref(), Some("xyz"));
    }

    #[tokio::test]
    async fn test_geocode_backend_error_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode");
                then.status(500);
            })
            .await;

        let api = GeocodeApi::new(server.base_url());
        let err = api
            .geocode(&GeocodeRequest {
                locale: Locale::En,
                query: "Jerusalem".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Geocode API error: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_geocode_decode_error_on_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode");
                then.status(200).body("not json");
            })
            .await;

        let api = GeocodeApi::new(server.base_url());
        let err = api
            .geocode(&GeocodeRequest {
                locale: Locale::En,
                query: "Jerusalem".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TransitError::Decode { api: "Geocode", .. }));
    }

    #[tokio::test]
    async fn test_geocode_trailing_slash_in_base_url() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode");
                then.status(200).json_body(json!([]));
            })
            .await;

        let api = GeocodeApi::new(format!("{}/", server.base_url()));
        let results = api
            .geocode(&GeocodeRequest {
                locale: Locale::En,
                query: "x".to_string(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(results.is_empty());
    }
}
