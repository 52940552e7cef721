use crate::domain::validation::ValidationError;
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Accepts an RFC 3339 timestamp, a `YYYY-MM-DD` date (midnight UTC) or epoch
/// milliseconds.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    input
        .parse::<i64>()
        .ok()
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g.
/// `1990-05-01T00:00:00.000Z`.
pub fn transform_to_timestamp(input: &str) -> Result<String, ValidationError> {
    parse_date(input)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| ValidationError::InvalidDate(input.to_string()))
}
