//! Transport layer for the MCP server.
//!
//! The server speaks JSON-RPC over standard input/output, the default MCP
//! mode. The transport handles the connection lifecycle and delegates all
//! message processing to the server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
