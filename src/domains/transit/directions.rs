//! Directions client for the transit backend.
//!
//! Plans a multimodal trip between two places via `GET {base}/directions`.
//! The itinerary plan the backend returns (legs, steps, fares, geometry) is
//! opaque to this layer: it is decoded as JSON and passed through unmodified.

use serde_json::Value;
use tracing::debug;

use super::error::TransitError;
use super::types::{Locale, OptimizeMode, Place};

/// API name used in error messages. Part of the error text contract.
const API_NAME: &str = "Directions";

/// A validated directions request.
///
/// Invariant: `date` and `time` are co-required, both present or both
/// absent. The tool dispatcher rejects violations before this type is built.
#[derive(Debug, Clone)]
pub struct DirectionsRequest {
    pub from_place: Place,
    pub to_place: Place,
    pub arrive_by: bool,
    pub locale: Locale,
    pub wheelchair: bool,
    pub mode: String,
    pub show_intermediate_stops: bool,
    pub num_itineraries: u32,
    pub max_walk_distance: String,
    pub optimize: OptimizeMode,
    pub ignore_realtime_updates: bool,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Build the query fields for a directions request.
///
/// Pure mapping; emission order is fixed for determinism. Every required
/// field is always emitted in its canonical string form; `date` and `time`
/// are appended only when present.
pub fn build_directions_query(params: &DirectionsRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("fromPlace", params.from_place.as_str().to_string()),
        ("toPlace", params.to_place.as_str().to_string()),
        ("arriveBy", params.arrive_by.to_string()),
        ("locale", params.locale.as_str().to_string()),
        ("wheelchair", params.wheelchair.to_string()),
        ("mode", params.mode.clone()),
        (
            "showIntermediateStops",
            params.show_intermediate_stops.to_string(),
        ),
        ("numItineraries", params.num_itineraries.to_string()),
        ("maxWalkDistance", params.max_walk_distance.clone()),
        ("optimize", params.optimize.as_str().to_string()),
        (
            "ignoreRealtimeUpdates",
            params.ignore_realtime_updates.to_string(),
        ),
    ];

    if let Some(date) = &params.date {
        query.push(("date", date.clone()));
    }
    if let Some(time) = &params.time {
        query.push(("time", time.clone()));
    }

    query
}

/// Client for the backend directions endpoint.
#[derive(Debug, Clone)]
pub struct DirectionsApi {
    base_url: String,
    client: reqwest::Client,
}

impl DirectionsApi {
    /// Create a client against the given base endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch an itinerary plan for the given request.
    ///
    /// Performs exactly one outbound call. A non-success status fails with
    /// the backend error without reading the body; a success status with an
    /// undecodable body fails with a decode error.
    pub async fn directions(&self, params: &DirectionsRequest) -> Result<Value, TransitError> {
        let url = format!("{}/directions", self.base_url);
        debug!(
            "GET {} from={} to={}",
            url,
            params.from_place.as_str(),
            params.to_place.as_str()
        );

        let response = self
            .client
            .get(&url)
            .query(&build_directions_query(params))
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

    fn default_request() -> DirectionsRequest {
        DirectionsRequest {
            from_place: Place::parse("Start::1,2").unwrap(),
            to_place: Place::parse("End::3,4").unwrap(),
            arrive_by: false,
            locale: Locale::En,
            wheelchair: false,
            mode: "TRANSIT,WALK".to_string(),
            show_intermediate_stops: true,
            num_itineraries: 3,
            max_walk_distance: "1000".to_string(),
            optimize: OptimizeMode::Quick,
            ignore_realtime_updates: false,
            date: None,
            time: None,
        }
    }

    #[test]
    fn test_build_query_field_order_without_date_time() {
        let query = build_directions_query(&default_request());
        let names: Vec<_> = query.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "fromPlace",
                "toPlace",
                "arriveBy",
                "locale",
                "wheelchair",
                "mode",
                "showIntermediateStops",
                "numItineraries",
                "maxWalkDistance",
                "optimize",
                "ignoreRealtimeUpdates",
            ]
        );
    }

    #[test]
    fn test_build_query_canonical_values() {
        let query = build_directions_query(&default_request());
        let get = |name: &str| {
            query
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("fromPlace"), "Start::1,2");
        assert_eq!(get("toPlace"), "End::3,4");
        assert_eq!(get("arriveBy"), "false");
        assert_eq!(get("locale"), "en");
        assert_eq!(get("showIntermediateStops"), "true");
        assert_eq!(get("numItineraries"), "3");
        assert_eq!(get("maxWalkDistance"), "1000");
        assert_eq!(get("optimize"), "QUICK");
        assert_eq!(get("ignoreRealtimeUpdates"), "false");
    }

    #[test]
    fn test_build_query_omits_absent_date_time() {
        let query = build_directions_query(&default_request());
        assert!(query.iter().all(|(name, _)| *name != "date"));
        assert!(query.iter().all(|(name, _)| *name != "time"));
    }

    #[test]
    fn test_build_query_includes_date_time_verbatim() {
        let mut request = default_request();
        request.date = Some("2024-07-30".to_string());
        request.time = Some("10:00".to_string());

        let query = build_directions_query(&request);
        assert_eq!(query[query.len() - 2], ("date", "2024-07-30".to_string()));
        assert_eq!(query[query.len() - 1], ("time", "10:00".to_string()));
    }

    #[test]
    fn test_build_query_boolean_and_enum_literals_together() {
        // independence of field encoding: wheelchair, optimize, and locale
        // checked together in one request
        let mut request = default_request();
        request.wheelchair = true;
        request.optimize = OptimizeMode::Triangle;
        request.locale = Locale::He;

        let query = build_directions_query(&request);
        assert!(query.contains(&("wheelchair", "true".to_string())));
        assert!(query.contains(&("optimize", "TRIANGLE".to_string())));
        assert!(query.contains(&("locale", "he".to_string())));
    }

    #[tokio::test]
    async fn test_directions_passes_body_through() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/directions")
                    .query_param("fromPlace", "Start::1,2")
                    .query_param("toPlace", "End::3,4")
                    .query_param("mode", "TRANSIT,WALK")
                    .query_param("numItineraries", "3");
                then.status(200).json_body(json!({"a": 1}));
            })
            .await;

        let api = DirectionsApi::new(server.base_url());
        let plan = api.directions(&default_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(plan, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_directions_backend_error_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/directions");
                then.status(500);
            })
            .await;

        let api = DirectionsApi::new(server.base_url());
        let err = api.directions(&default_request()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Directions API error: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_directions_decode_error_on_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/directions");
                then.status(200).body("{truncated");
            })
            .await;

        let api = DirectionsApi::new(server.base_url());
        let err = api.directions(&default_request()).await.unwrap_err();

        assert!(matches!(err, TransitError::Decode { api: "Directions", .. }));
    }

    #[tokio::test]
    async fn test_directions_sends_date_and_time_when_present() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/directions")
                    .query_param("date", "2024-07-30")
                    .query_param("time", "10:00");
                then.status(200).json_body(json!({}));
            })
            .await;

        let mut request = default_request();
        request.date = Some("2024-07-30".to_string());
        request.time = Some("10:00".to_string());

        let api = DirectionsApi::new(server.base_url());
        api.directions(&request).await.unwrap();

        mock.assert_async().await;
    }
}
