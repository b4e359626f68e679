//! Geocode tool definition.
//!
//! Converts a free-text location query into geographical coordinate
//! candidates via the transit backend.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, json_result};
use crate::domains::tools::ToolContext;
use crate::domains::transit::{GeocodeRequest, Locale};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the geocode tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeocodeParams {
    /// Locale used for matching and result labels.
    #[schemars(description = "Locale for the search (he for Hebrew, en for English)")]
    pub locale: Locale,

    /// The location text to resolve.
    #[schemars(description = "Location query to geocode (e.g., 'תל אביב' or 'Tel Aviv')")]
    pub query: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Geocode tool - resolves a location query to coordinate candidates.
pub struct GeocodeTool;

impl GeocodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "geocode";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Convert a location query to geographical coordinates using the transit backend. \
         Returns candidate locations ordered by relevance, each with a display label and \
         a coordinate pair.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(params: &GeocodeParams, context: &ToolContext) -> CallToolResult {
        info!("Geocode tool called for query: {}", params.query);

        let request = GeocodeRequest {
            locale: params.locale,
            query: params.query.clone(),
        };

        match context.geocode.geocode(&request).await {
            Ok(results) => {
                info!("Geocode returned {} candidate(s)", results.len());
                json_result(&results)
            }
            Err(e) => error_result(e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeocodeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(context: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let context = context.clone();
            async move {
                let params: GeocodeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &context).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_params_require_locale() {
        let result = serde_json::from_str::<GeocodeParams>(r#"{"query": "Tel Aviv"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_params_reject_unknown_locale() {
        let result =
            serde_json::from_str::<GeocodeParams>(r#"{"locale": "fr", "query": "Paris"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_params_parse() {
        let params: GeocodeParams =
            serde_json::from_str(r#"{"locale": "en", "query": "Tel Aviv"}"#).unwrap();
        assert_eq!(params.locale, Locale::En);
        assert_eq!(params.query, "Tel Aviv");
    }

    #[tokio::test]
    async fn test_execute_success_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/geocode")
                    .query_param("locale", "en")
                    .query_param("query", "Tel Aviv");
                then.status(200).json_body(json!([
                    {"description": "Tel Aviv", "lat": 32.08, "lng": 34.78}
                ]));
            })
            .await;

        let context = ToolContext::with_base_url(&server.base_url());
        let params: GeocodeParams =
            serde_json::from_str(r#"{"locale": "en", "query": "Tel Aviv"}"#).unwrap();

        let result = GeocodeTool::execute(&params, &context).await;
        assert!(!result.is_error.unwrap_or(false));

        let decoded: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(
            decoded,
            json!([{"description": "Tel Aviv", "lat": 32.08, "lng": 34.78}])
        );
    }

    #[tokio::test]
    async fn test_execute_backend_error_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode");
                then.status(500);
            })
            .await;

        let context = ToolContext::with_base_url(&server.base_url());
        let params: GeocodeParams =
            serde_json::from_str(r#"{"locale": "he", "query": "חיפה"}"#).unwrap();

        let result = GeocodeTool::execute(&params, &context).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Geocode API error: 500 Internal Server Error");
    }
}
