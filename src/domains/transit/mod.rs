//! Transit backend domain.
//!
//! Everything that touches the external transit API lives here:
//!
//! - `types` - shared value types: the `label::lat,lng` place encoding,
//!   locales, and route optimization preferences
//! - `geocode` - the geocode client and its query builder
//! - `directions` - the trip-planning client and its query builder
//! - `error` - typed failures surfaced by the clients
//!
//! The clients perform exactly one outbound HTTP call per invocation: no
//! retries, no caching, no timeout override. The base endpoint is injected
//! at construction time and fixed for the lifetime of the client.

mod directions;
mod error;
mod geocode;
mod types;

pub use directions::{DirectionsApi, DirectionsRequest, build_directions_query};
pub use error::TransitError;
pub use geocode::{GeocodeApi, GeocodeLocation, GeocodeRequest, build_geocode_query};
pub use types::{Locale, OptimizeMode, Place};
