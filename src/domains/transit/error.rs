//! Transit-specific error types.

use thiserror::Error;

/// Errors surfaced by the transit backend boundary.
///
/// The `Backend` display format is an external contract: downstream callers
/// parse the status code out of the message text. Do not reword it.
#[derive(Debug, Error)]
pub enum TransitError {
    /// A place value did not match the `label::lat,lng` encoding.
    #[error(
        "Invalid location '{0}': must be in format 'formatted_address::lat,lng' \
         (e.g., 'תל אביב::31.7776,35.2357')"
    )]
    MalformedLocation(String),

    /// The backend answered with a non-success status.
    #[error("{api} API error: {status} {status_text}")]
    Backend {
        api: &'static str,
        status: u16,
        status_text: String,
    },

    /// The request could not be performed (connection, DNS, read failure).
    #[error("{api} API request failed: {source}")]
    Request {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a success status but an undecodable body.
    #[error("{api} API returned a malformed response: {source}")]
    Decode {
        api: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl TransitError {
    /// Create a `Backend` error from a reqwest status code.
    pub fn backend(api: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Backend {
            api,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}
