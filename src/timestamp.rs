//! `updated_at` values and the instant they describe.
//!
//! DESIGN
//! ======
//! Boards arrive with `updated_at` either as epoch milliseconds (integer or
//! fractional) or as a date string. The cache never rewrites the value; it only derives an
//! instant from it for ordering. Strings that do not parse have no instant
//! and sort after every parseable timestamp.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const NANOS_PER_MILLI: i128 = 1_000_000;

/// An entity's last-modified marker, kept in the shape the server sent it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Non-integer epoch milliseconds, e.g. `1687319824370.5`.
    Fractional(serde_json::Number),
    /// Date string, e.g. `2023-06-21 03:57:04.370` or RFC 3339.
    Text(String),
}

impl Timestamp {
    /// Parse a timestamp out of a raw JSON value.
    ///
    /// Returns `None` for anything other than a number or a string.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(n.as_i64().map_or_else(|| Self::Fractional(n.clone()), Self::Millis)),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Nanoseconds since the Unix epoch, if the value describes a real instant.
    #[must_use]
    pub fn instant(&self) -> Option<i128> {
        match self {
            Self::Millis(ms) => Some(i128::from(*ms) * NANOS_PER_MILLI),
            Self::Fractional(ms) => ms.as_f64().and_then(scale_fractional),
            Self::Text(text) => parse_text(text.trim()),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale_fractional(ms: f64) -> Option<i128> {
    // Past this the nanosecond count no longer fits an i128.
    if !ms.is_finite() || ms.abs() >= 1e30 {
        return None;
    }
    // Whole and fractional parts are scaled apart; the product alone loses
    // precision at current epoch magnitudes.
    let whole = ms.trunc();
    let frac = ((ms - whole) * 1_000_000.0).round();
    Some(whole as i128 * NANOS_PER_MILLI + frac as i128)
}

fn parse_text(text: &str) -> Option<i128> {
    if let Ok(dt) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(dt.unix_timestamp_nanos());
    }

    // Naive forms carry no offset and are read as UTC.
    PrimitiveDateTime::parse(
        text,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(
            text,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
    })
    .or_else(|_| Date::parse(text, format_description!("[year]-[month]-[day]")).map(Date::midnight))
    .ok()
    .map(|dt| dt.assume_utc().unix_timestamp_nanos())
}

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;
