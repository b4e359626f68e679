//! Shared transit value types.
//!
//! The place encoding and the two closed parameter sets (locale and route
//! optimization preference) used by both the geocode and directions APIs.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::TransitError;

/// A place reference in the compact `label::lat,lng` encoding.
///
/// The label is free text (it may itself contain `::`; the split happens at
/// the last occurrence), and the coordinates are signed decimal numbers.
/// Parsing keeps the verbatim source text so the backend receives the value
/// exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    label: String,
    lat: f64,
    lng: f64,
    raw: String,
}

impl Place {
    /// Parse a `label::lat,lng` encoded place.
    ///
    /// Fails with [`TransitError::MalformedLocation`] when the value does not
    /// match the shape. No network or side effect; this is the validation
    /// gate that runs before any backend call is attempted.
    pub fn parse(value: &str) -> Result<Self, TransitError> {
        let malformed = || TransitError::MalformedLocation(value.to_string());

        let (label, coords) = value.rsplit_once("::").ok_or_else(malformed)?;
        if label.is_empty() {
            return Err(malformed());
        }

        let (lat, lng) = coords.split_once(',').ok_or_else(malformed)?;
        if !is_signed_decimal(lat) || !is_signed_decimal(lng) {
            return Err(malformed());
        }

        Ok(Self {
            label: label.to_string(),
            lat: lat.parse().map_err(|_| malformed())?,
            lng: lng.parse().map_err(|_| malformed())?,
            raw: value.to_string(),
        })
    }

    /// The human-readable label part.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// The verbatim encoded form, as received.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Place {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A coordinate: optional sign, at least one integer digit, optional
/// fractional part. Matches `-?\d+\.?\d*`.
fn is_signed_decimal(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Response locale accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Hebrew.
    #[default]
    He,
    /// English.
    En,
}

impl Locale {
    /// The literal tag sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::He => "he",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route optimization preference accepted by the directions API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptimizeMode {
    #[default]
    Quick,
    Safe,
    Flat,
    Greenways,
    Triangle,
}

impl OptimizeMode {
    /// The literal tag sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "QUICK",
            Self::Safe => "SAFE",
            Self::Flat => "FLAT",
            Self::Greenways => "GREENWAYS",
            Self::Triangle => "TRIANGLE",
        }
    }
}

impl fmt::Display for OptimizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
