//! Tolerant field extraction from loosely-typed JSON payloads.
//!
//! Every helper here degrades to a default instead of failing, except
//! [`required_id`]. The API adds and reshapes fields between versions and a
//! single odd value should never cost the whole record.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::debug;

use crate::constants::query::DATE_FORMAT;
use crate::error::AppError;

/// Reads the mandatory positive integer `id` of a record.
///
/// Accepts JSON integers and numeric strings. Anything else, including zero,
/// negative numbers and a missing key, is an `InvalidRecord` error.
pub fn required_id(obj: &Value, kind: &'static str) -> Result<u64, AppError> {
    if !obj.is_object() {
        return Err(AppError::invalid_record(kind, "expected a JSON object"));
    }

    let id = match obj.get("id") {
        None | Some(Value::Null) => {
            return Err(AppError::invalid_record(kind, "missing id"));
        }
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
    };

    match id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(AppError::invalid_record(
            kind,
            format!("id is not a positive integer: {}", obj["id"]),
        )),
    }
}

/// Reads a string field. Numbers and booleans are converted to their textual
/// form; missing, null or structured values become an empty string.
pub fn string_field(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Reads an optional non-negative integer field. Accepts JSON integers and
/// numeric strings.
pub fn optional_u32(obj: &Value, key: &str) -> Option<u32> {
    match obj.get(key)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Reads a signed integer field, defaulting to zero.
pub fn i32_field(obj: &Value, key: &str) -> i32 {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
    .unwrap_or(0)
}

/// Reads a boolean field, defaulting to `false` for anything but a JSON bool.
pub fn bool_field(obj: &Value, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Parses a `YYYY-MM-DD` game date, substituting `today` when the value is
/// missing or does not match the pattern exactly.
pub fn parse_game_date(raw: Option<&Value>, today: NaiveDate) -> NaiveDate {
    let parsed = raw
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok());

    match parsed {
        Some(date) => date,
        None => {
            debug!("Unparsable game date {raw:?}, falling back to {today}");
            today
        }
    }
}

/// Parses an ISO-8601 timestamp. A trailing `Z` is treated as `+00:00`;
/// timestamps without an offset are taken as UTC. Returns `None` on any
/// parse failure.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = match raw.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt);
    }

    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Reads the optional precise timestamp of a game.
pub fn parse_game_datetime(raw: Option<&Value>) -> Option<DateTime<FixedOffset>> {
    let text = raw?.as_str()?;
    let parsed = parse_timestamp(text);
    if parsed.is_none() {
        debug!("Ignoring malformed datetime {text:?}");
    }
    parsed
}
