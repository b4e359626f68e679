//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server:
//!
//! - **transit**: the boundary to the external transit backend: place
//!   encoding, request builders, and the HTTP clients
//! - **tools**: the MCP tool surface: parameter schemas, dispatch, and
//!   result envelopes

pub mod tools;
pub mod transit;
