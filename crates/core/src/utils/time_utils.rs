use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses a backend timestamp string into a UTC instant.
///
/// The backend emits RFC 3339 (`2026-01-01T05:07:09+00:00`,
/// `2026-01-01T05:07:09Z`) but older rows carry naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` values, which are taken as UTC.
/// Returns `None` when the value matches neither shape.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Clock abstraction so render paths can be driven by a test double.
///
/// Production code uses [`SystemClock`]; tests substitute a fixed or
/// stepped clock to make countdown output deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2026-01-01T10:30:00+05:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 1, 1, 5, 30, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_zulu() {
        let parsed = parse_timestamp("2026-01-01T05:07:09Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 1, 1, 5, 7, 9).unwrap());
    }

    #[test]
    fn parses_naive_as_utc() {
        let parsed = parse_timestamp("2026-03-15T08:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0).unwrap());

        let with_millis = parse_timestamp("2026-03-15 08:00:00.250").unwrap();
        assert_eq!(with_millis.timestamp_millis() % 1000, 250);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("soon").is_none());
        assert!(parse_timestamp("2026-13-40T99:00:00Z").is_none());
    }
}
