//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Tool metadata for listing
//! - A transport-independent dispatch entry point

use std::sync::Arc;
use tracing::warn;

use rmcp::model::{CallToolResult, Tool};

use super::context::ToolContext;
use super::definitions::{DirectionsTool, GeocodeTool};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    context: Arc<ToolContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![GeocodeTool::NAME, DirectionsTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools; the
    /// router is built from the same definitions.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GeocodeTool::to_tool(), DirectionsTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// This mirrors what the rmcp router does for the stdio transport, for
    /// callers that embed the server without a transport. Execution failures
    /// land in the returned envelope; only dispatch-level problems (unknown
    /// tool, arguments that do not fit the schema) surface as `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            GeocodeTool::NAME => {
                let params = serde_json::from_value(arguments)
                    .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
                Ok(GeocodeTool::execute(&params, &self.context).await)
            }
            DirectionsTool::NAME => {
                let params = serde_json::from_value(arguments)
                    .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
                Ok(DirectionsTool::execute(&params, &self.context).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
