// Lenient timestamp input for create bodies.
//
// Accepted forms
// - RFC 3339 with an offset: "2024-05-01T10:00:00+02:00"
// - naive ISO 8601, read as UTC: "2024-05-01T10:00:00", "2024-05-01T10:00:00.123456"
// - Unix epoch seconds, integer or fractional: 1714557600, 1714557600.5

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("invalid datetime: {0}")]
    InvalidText(String),

    #[error("epoch seconds out of range: {0}")]
    OutOfRange(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(i64),
    FractionalSeconds(f64),
    Text(String),
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampError::InvalidText(raw.to_string()))
}

fn from_epoch_seconds(seconds: i64) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| TimestampError::OutOfRange(seconds.to_string()))
}

fn from_fractional_epoch_seconds(seconds: f64) -> Result<DateTime<Utc>, TimestampError> {
    let micros = (seconds * 1_000_000.0).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(TimestampError::OutOfRange(seconds.to_string()));
    }
    DateTime::from_timestamp_micros(micros as i64)
        .ok_or_else(|| TimestampError::OutOfRange(seconds.to_string()))
}

/// `deserialize_with` target for optional timestamps; pair it with `#[serde(default)]`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    raw.map(|raw| match raw {
        RawTimestamp::Seconds(seconds) => from_epoch_seconds(seconds),
        RawTimestamp::FractionalSeconds(seconds) => from_fractional_epoch_seconds(seconds),
        RawTimestamp::Text(text) => parse_timestamp(&text),
    })
    .transpose()
    .map_err(D::Error::custom)
}
