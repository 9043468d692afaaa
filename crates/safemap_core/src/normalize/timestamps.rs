use time::format_description::well_known::Rfc3339;
use time::{format_description, OffsetDateTime, PrimitiveDateTime, UtcOffset};
use tracing::{debug, warn};

/// Formats accepted without an explicit offset. These are interpreted as UTC.
const NAIVE_ALLOWLIST: [&str; 5] = [
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]",
    "[year]-[month]-[day]T[hour]:[minute]:[second]",
    "[year]-[month]-[day]T[hour]:[minute]",
    "[year]-[month]-[day] [hour]:[minute]:[second]",
    "[year]-[month]-[day] [hour]:[minute]",
];

fn parse_naive_assume_utc(raw: &str, fmt: &str) -> Option<OffsetDateTime> {
    let items = match format_description::parse(fmt) {
        Ok(i) => i,
        Err(e) => {
            warn!(fmt, error = %e, "invalid timestamp format description");
            return None;
        }
    };

    let pdt = PrimitiveDateTime::parse(raw, &items).ok()?;
    debug!(value = raw, fmt, "timestamp has no offset; assumed UTC");
    Some(pdt.assume_utc())
}

/// Drop sub-millisecond precision; stored timestamps carry milliseconds only.
pub fn truncate_to_millis(dt: OffsetDateTime) -> OffsetDateTime {
    dt.replace_nanosecond(u32::from(dt.millisecond()) * 1_000_000)
        .unwrap_or(dt)
}

/// Parse a stored timestamp string into a UTC date-time.
///
/// Contract:
/// - RFC3339 input (any offset) is converted to UTC.
/// - ISO-like input without an offset is accepted from a fixed allowlist and read as UTC.
/// - Anything else yields `None` with a warning; no value is guessed.
pub fn parse_stored_timestamp(raw_input: &str) -> Option<OffsetDateTime> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(dt.to_offset(UtcOffset::UTC));
    }

    for fmt in NAIVE_ALLOWLIST {
        if let Some(dt) = parse_naive_assume_utc(trimmed, fmt) {
            return Some(dt);
        }
    }

    warn!(value = trimmed, "unparseable stored timestamp; leaving it unset");
    None
}

/// Serialize as `YYYY-MM-DDTHH:MM:SS.mmmZ`, the shape browsers produce for dates.
pub fn format_stored_timestamp(dt: OffsetDateTime) -> Result<String, time::error::Format> {
    dt.to_offset(UtcOffset::UTC).format(time::macros::format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
}

/// Serde adapter for `Incident::timestamp`.
pub mod stored {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;

    pub fn serialize<S: Serializer>(
        value: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => {
                let s = super::format_stored_timestamp(*dt)
                    .map_err(<S::Error as serde::ser::Error>::custom)?;
                serializer.serialize_str(&s)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<OffsetDateTime>, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().and_then(super::parse_stored_timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn rfc3339_with_offset_is_converted_to_utc() {
        let dt = parse_stored_timestamp("2025-07-30T07:30:00-07:00").expect("parse");
        assert_eq!(dt, datetime!(2025-07-30 14:30:00 UTC));
        assert_eq!(dt.offset(), UtcOffset::UTC);
    }

    #[test]
    fn naive_iso_is_read_as_utc() {
        assert_eq!(
            parse_stored_timestamp("2025-07-30T14:30:00"),
            Some(datetime!(2025-07-30 14:30:00 UTC))
        );
        assert_eq!(
            parse_stored_timestamp("2025-07-30 14:30"),
            Some(datetime!(2025-07-30 14:30:00 UTC))
        );
    }

    #[test]
    fn garbage_and_blank_yield_none() {
        assert_eq!(parse_stored_timestamp("not-a-date"), None);
        assert_eq!(parse_stored_timestamp("   "), None);
        assert_eq!(parse_stored_timestamp("2025-13-01T00:00:00Z"), None);
    }

    #[test]
    fn formatting_keeps_milliseconds() {
        let dt = datetime!(2026-01-02 03:04:05.678 UTC);
        let s = format_stored_timestamp(dt).expect("format");
        assert_eq!(s, "2026-01-02T03:04:05.678Z");
        assert_eq!(parse_stored_timestamp(&s), Some(dt));
    }

    #[test]
    fn truncation_drops_sub_millisecond_digits() {
        let dt = datetime!(2026-01-02 03:04:05.678901234 UTC);
        assert_eq!(truncate_to_millis(dt), datetime!(2026-01-02 03:04:05.678 UTC));
    }
}
