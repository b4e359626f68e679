//! Directions tool definition.
//!
//! Plans a multimodal trip between two encoded places via the transit
//! backend. Beyond the schema contract, the tool enforces two rules the
//! backend does not: the `date`/`time` parameters are co-required, and both
//! endpoints must be valid `label::lat,lng` place encodings. Violations are
//! rejected before any network call.

use chrono::{NaiveDate, NaiveTime};
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
use crate::domains::transit::{DirectionsRequest, Locale, OptimizeMode, Place};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the directions tool.
///
/// Optional fields carry the backend's documented defaults; they are applied
/// during deserialization, before the request builder runs.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsParams {
    /// Trip origin.
    #[schemars(
        description = "Starting location in format 'formatted_address::lat,lng' (e.g., 'תל אביב::31.7776,35.2357')"
    )]
    pub from_place: String,

    /// Trip destination.
    #[schemars(
        description = "Destination location in format 'formatted_address::lat,lng' (e.g., 'תל אביב::31.7776,35.2357')"
    )]
    pub to_place: String,

    /// Response locale.
    #[serde(default)]
    #[schemars(description = "Locale for the response (he for Hebrew, en for English)")]
    pub locale: Locale,

    /// Optimize for arrival rather than departure time.
    #[serde(default)]
    #[schemars(description = "Whether to optimize for arrival time (false for departure time)")]
    pub arrive_by: bool,

    /// Require wheelchair-accessible routes.
    #[serde(default)]
    #[schemars(description = "Whether route should be wheelchair accessible")]
    pub wheelchair: bool,

    /// Comma-separated transport mode list.
    #[serde(default = "default_mode")]
    #[schemars(description = "Transportation modes (e.g., 'WALK,TRANSIT')")]
    pub mode: String,

    /// Include intermediate stops in transit legs.
    #[serde(default = "default_true")]
    #[schemars(description = "Whether to show intermediate stops")]
    pub show_intermediate_stops: bool,

    /// Number of alternative itineraries to request.
    #[serde(default = "default_num_itineraries")]
    #[schemars(description = "Number of alternative routes to return")]
    pub num_itineraries: u32,

    /// Maximum walking distance in meters, as a numeric string.
    #[serde(default = "default_max_walk_distance")]
    #[schemars(description = "Maximum walking distance in meters")]
    pub max_walk_distance: String,

    /// Route optimization preference.
    #[serde(default)]
    #[schemars(description = "Route optimization preference")]
    pub optimize: OptimizeMode,

    /// Plan against the static schedule only.
    #[serde(default)]
    #[schemars(description = "Whether to ignore real-time updates")]
    pub ignore_realtime_updates: bool,

    /// Trip date. Co-required with `time`.
    #[serde(default)]
    #[schemars(
        description = "Date for the trip (optional) in format YYYY-MM-DD (e.g., 2025-06-08); \
                       don't use past dates, only today or future dates"
    )]
    pub date: Option<String>,

    /// Trip time. Co-required with `date`.
    #[serde(default)]
    #[schemars(description = "Time for the trip (optional) in format HH:MM (e.g., 10:00)")]
    pub time: Option<String>,
}

fn default_mode() -> String {
    "WALK,TRANSIT".to_string()
}

fn default_true() -> bool {
    true
}

fn default_num_itineraries() -> u32 {
    3
}

fn default_max_walk_distance() -> String {
    "1207".to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Directions tool - plans a multimodal trip between two places.
pub struct DirectionsTool;

impl DirectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "directions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get transit directions between two locations using the transit backend. \
         Locations are given as 'formatted_address::lat,lng' encoded places; the result \
         is the backend's itinerary plan with legs, stops, and fares.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(from = %params.from_place, to = %params.to_place))]
    pub async fn execute(params: &DirectionsParams, context: &ToolContext) -> CallToolResult {
        info!(
            "Directions tool called: {} -> {}",
            params.from_place, params.to_place
        );

        // date and time are co-required; the backend does not check this.
        if params.date.is_some() != params.time.is_some() {
            return error_result("date and time must both be present or both be absent");
        }

        if let Some(date) = &params.date {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return error_result(format!("Invalid date '{date}': expected format YYYY-MM-DD"));
            }
        }
        if let Some(time) = &params.time {
            if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                return error_result(format!("Invalid time '{time}': expected format HH:MM"));
            }
        }

        let from_place = match Place::parse(&params.from_place) {
            Ok(place) => place,
            Err(e) => return error_result(e),
        };
        let to_place = match Place::parse(&params.to_place) {
            Ok(place) => place,
            Err(e) => return error_result(e),
        };

        let request = DirectionsRequest {
            from_place,
            to_place,
            arrive_by: params.arrive_by,
            locale: params.locale,
            wheelchair: params.wheelchair,
            mode: params.mode.clone(),
            show_intermediate_stops: params.show_intermediate_stops,
            num_itineraries: params.num_itineraries,
            max_walk_distance: params.max_walk_distance.clone(),
            optimize: params.optimize,
            ignore_realtime_updates: params.ignore_realtime_updates,
            date: params.date.clone(),
            time: params.time.clone(),
        };

        match context.directions.directions(&request).await {
            Ok(plan) => json_result(&plan),
            Err(e) => error_result(e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DirectionsParams>(),
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
                let params: DirectionsParams =
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
