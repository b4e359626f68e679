//! Shared tool context.
//!
//! The backend clients are constructed exactly once, at server startup, from
//! configuration. Tools receive the context `Arc`-shared through their
//! routes; there is no process-global client state.

use crate::core::config::Config;
use crate::domains::transit::{DirectionsApi, GeocodeApi};

/// Long-lived context holding the backend client instances.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub geocode: GeocodeApi,
    pub directions: DirectionsApi,
}

impl ToolContext {
    /// Build the context from server configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.backend.base_url)
    }

    /// Build the context against an explicit base endpoint.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            geocode: GeocodeApi::new(base_url),
            directions: DirectionsApi::new(base_url),
        }
    }
}
