//! Common utilities shared across tool definitions.
//!
//! Every tool invocation terminates in a [`CallToolResult`] envelope: a
//! single text payload carrying either the pretty-printed JSON success value
//! or a human-readable failure message. Nothing else crosses the tool
//! boundary.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create an error result with the given message.
pub fn error_result(message: impl std::fmt::Display) -> CallToolResult {
    let message = message.to_string();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result carrying the pretty-printed JSON form of `value`.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(format!("Failed to serialize result: {e}")),
    }
}
