use chrono::{DateTime, NaiveDate, Utc};

use crate::error::FieldError;

/// Timestamps are kept as UTC instants; the export only ever carries UTC.
pub type Timestamp = DateTime<Utc>;

/// Strict parse of `"YYYY-MM-DD HH:MM:SS"` → UTC instant
pub fn parse_timestamp(s: &str) -> Result<Timestamp, FieldError> {
    parse_fixed(s).ok_or_else(|| FieldError::InvalidTimestampFormat {
        value: s.to_string(),
    })
}

fn parse_fixed(s: &str) -> Option<Timestamp> {
    let b = s.as_bytes();
    // exact length + separators, every other position a digit
    if b.len() != 19 || b[4] != b'-' || b[7] != b'-' || b[10] != b' ' || b[13] != b':' || b[16] != b':' {
        return None;
    }
    let digits_ok = b
        .iter()
        .enumerate()
        .all(|(i, c)| matches!(i, 4 | 7 | 10 | 13 | 16) || c.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    let hour: u32 = s[11..13].parse().ok()?;
    let min: u32 = s[14..16].parse().ok()?;
    let sec: u32 = s[17..19].parse().ok()?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, min, sec)?;
    Some(naive.and_utc())
}

/// Millisecond epoch used by the columnar output.
pub fn to_epoch_millis(ts: &Timestamp) -> i64 {
    ts.timestamp_millis()
}

/// ISO-8601 rendering used by the CSV output, e.g. `2024-01-15T13:45:30Z`.
pub fn format_iso8601(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_utc_timestamp() {
        let ts = parse_timestamp("2024-01-15 13:45:30").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 15, 13, 45, 30).unwrap());
    }

    #[test]
    fn epoch_millis_round_trip_to_iso() {
        let ts = parse_timestamp("2024-01-15 13:45:30").unwrap();
        let millis = to_epoch_millis(&ts);
        assert_eq!(millis, 1_705_326_330_000);

        let back = DateTime::<Utc>::from_timestamp_millis(millis).unwrap();
        assert_eq!(format_iso8601(&back), "2024-01-15T13:45:30Z");
    }

    #[test]
    fn rejects_anything_but_the_exact_pattern() {
        for bad in [
            "",
            "2024-01-15",
            "2024/01/15 13:45:30",
            "2024-1-15 13:45:30",
            "2024-01-15T13:45:30",
            "2024-01-15 13:45:30Z",
            " 2024-01-15 13:45:30",
            "2024-02-30 00:00:00",
            "2024-01-15 24:00:00",
            "+024-01-15 13:45:30",
        ] {
            assert!(
                matches!(
                    parse_timestamp(bad),
                    Err(FieldError::InvalidTimestampFormat { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
