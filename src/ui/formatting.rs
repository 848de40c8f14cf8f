use crate::data_fetcher::processors::fields::parse_timestamp;

/// Formats a game status for display.
///
/// Scheduled games carry their UTC tip-off timestamp as status; those are
/// shortened to `HH:MM`. Anything else passes through untouched.
pub fn format_status(raw: &str) -> String {
    if raw.contains('T')
        && raw.ends_with('Z')
        && let Some(dt) = parse_timestamp(raw)
    {
        return dt.format("%H:%M").to_string();
    }
    raw.to_string()
}

pub fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
