//! Time Provider Abstraction
//!
//! Thread metadata and the document header carry ISO-8601 timestamps. The
//! clock is injected so tests and reproducible renders can pin it.
//!
//! # Examples
//!
//! ```rust
//! use wikiforum_core::models::time::{format_timestamp, TimeProvider, SystemTimeProvider};
//! use chrono::Utc;
//!
//! let provider = SystemTimeProvider;
//! let now = provider.now();
//! assert!(now <= Utc::now());
//! assert!(format_timestamp(now).ends_with('Z'));
//! ```

use chrono::{DateTime, SecondsFormat, Utc};

/// Trait for providing current time
pub trait TimeProvider: Send + Sync {
    /// Get the current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// System time provider using actual system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Provider returning a pinned instant
///
/// # Examples
///
/// ```rust
/// use wikiforum_core::models::time::{TimeProvider, FixedTimeProvider};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let mut provider = FixedTimeProvider::new(start);
/// provider.advance(Duration::hours(1));
///
/// assert_eq!(provider.now() - start, Duration::hours(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider {
    current_time: DateTime<Utc>,
}

impl FixedTimeProvider {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self { current_time: time }
    }

    /// Parse an RFC 3339 timestamp such as `2024-02-01T00:00:00Z`
    pub fn parse(timestamp: &str) -> Result<Self, chrono::ParseError> {
        let time = DateTime::parse_from_rfc3339(timestamp)?.with_timezone(&Utc);
        Ok(Self::new(time))
    }

    pub fn set_time(&mut self, time: DateTime<Utc>) {
        self.current_time = time;
    }

    pub fn advance(&mut self, duration: chrono::Duration) {
        self.current_time += duration;
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.current_time
    }
}

/// Render a timestamp the way the page stores it
///
/// UTC, millisecond precision, `Z` suffix: `2024-02-01T00:00:00.000Z`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_system_time_provider() {
        let provider = SystemTimeProvider;
        let now1 = provider.now();
        let now2 = Utc::now();

        // Should be very close (within 1 second)
        assert!((now2 - now1).num_milliseconds().abs() < 1000);
    }

    #[test]
    fn test_fixed_time_provider_set_and_advance() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut provider = FixedTimeProvider::new(start);
        assert_eq!(provider.now(), start);

        provider.advance(Duration::minutes(30));
        assert_eq!(provider.now() - start, Duration::minutes(30));

        provider.set_time(start);
        assert_eq!(provider.now(), start);
    }

    #[test]
    fn test_fixed_time_provider_parse() {
        let provider = FixedTimeProvider::parse("2024-02-01T00:00:00Z").unwrap();
        assert_eq!(
            provider.now(),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
        );
        assert!(FixedTimeProvider::parse("yesterday").is_err());
    }

    #[test]
    fn test_format_timestamp_matches_page_format() {
        let time = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 5).unwrap();
        assert_eq!(format_timestamp(time), "2024-02-01T08:30:05.000Z");
    }
}
