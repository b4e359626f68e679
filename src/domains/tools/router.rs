//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the stdio transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; the shared [`ToolContext`] carries the backend clients into them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::definitions::{DirectionsTool, GeocodeTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GeocodeTool::create_route(context.clone()))
        .with_route(DirectionsTool::create_route(context))
}
