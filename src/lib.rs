//! Transit MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the geocoding and trip-planning capabilities of a transit-information
//! backend as callable tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **transit**: The backend boundary: place encoding, request builders,
//!     and the HTTP clients for the geocode and directions endpoints
//!   - **tools**: MCP tool definitions, registry, and router
//!
//! # Example
//!
//! ```rust,no_run
//! use transit_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
