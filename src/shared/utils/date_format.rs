//! Serde adapter for publish dates.
//!
//! Dates are written as `2020-01-01T00:00:00`, with fractional seconds only
//! when the value has them. Reading is lenient: a bare
//! date, a local date-time (optionally with fractional seconds) or an RFC 3339
//! timestamp with offset are all accepted. Offsets are normalized to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serializer};

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }

    for format in LOCAL_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(value);
        }
    }

    DateTime::parse_from_rfc3339(input).map(|value| value.naive_utc())
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(OUTPUT_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
}
