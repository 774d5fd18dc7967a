//! Calendar date codec for request payloads.
//!
//! The wire contract carries dates as `MM/DD/YYYY` strings on input, while
//! responses use the store's native ISO `YYYY-MM-DD` form. [`ApiDate`] wraps
//! [`NaiveDate`] with a strict serde implementation for the former so that an
//! ISO string in a request body is rejected with a validation error instead
//! of being silently misparsed.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Input format accepted for order date fields.
pub const API_DATE_FORMAT: &str = "%m/%d/%Y";

/// A calendar date carried as `MM/DD/YYYY` text on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiDate(NaiveDate);

/// Parse failure for a wire date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date {raw:?}: expected MM/DD/YYYY")]
pub struct ApiDateParseError {
    raw: String,
}

impl ApiDate {
    /// Wrap an already-parsed calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse the strict `MM/DD/YYYY` wire form.
    pub fn parse(raw: &str) -> Result<Self, ApiDateParseError> {
        NaiveDate::parse_from_str(raw, API_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ApiDateParseError {
                raw: raw.to_owned(),
            })
    }

    /// Unwrap the underlying calendar date.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ApiDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<ApiDate> for NaiveDate {
    fn from(date: ApiDate) -> Self {
        date.0
    }
}

impl std::fmt::Display for ApiDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(API_DATE_FORMAT))
    }
}

impl std::str::FromStr for ApiDate {
    type Err = ApiDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ApiDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
