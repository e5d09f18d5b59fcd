// Interval token parsing and bucket-start alignment
//
// Bucket boundaries follow human-readable clock and calendar edges rather
// than arbitrary epoch-relative slots: hourly buckets start at :00:00,
// 6-hour buckets at 00/06/12/18 UTC, daily buckets at 00:00:00 UTC, and
// weekly buckets at the most recent Sunday 00:00:00 UTC.
use crate::error::AnalyticsError;
use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

/// Supported bucketing widths. `Raw` is identity bucketing: one sample per
/// bucket, timestamp unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Raw,
    Hour,
    SixHours,
    Day,
    Week,
    /// Arbitrary positive width, floored to multiples since the Unix epoch.
    Custom(Duration),
}

impl Interval {
    /// Parse a caller-supplied interval token (`raw|1h|6h|1d|1w`).
    pub fn parse(token: &str) -> Result<Self, AnalyticsError> {
        match token {
            "raw" => Ok(Interval::Raw),
            "1h" => Ok(Interval::Hour),
            "6h" => Ok(Interval::SixHours),
            "1d" => Ok(Interval::Day),
            "1w" => Ok(Interval::Week),
            other => Err(AnalyticsError::InvalidArgument(format!(
                "unknown interval token: {}",
                other
            ))),
        }
    }

    /// Build an interval from an arbitrary width. A negative width is an
    /// error; a zero (or sub-millisecond) width is treated as raw
    /// passthrough.
    pub fn custom(width: Duration) -> Result<Self, AnalyticsError> {
        if width < Duration::zero() {
            return Err(AnalyticsError::InvalidArgument(format!(
                "interval width must not be negative: {}",
                width
            )));
        }
        if width.num_milliseconds() == 0 {
            return Ok(Interval::Raw);
        }
        Ok(Interval::Custom(width))
    }

    /// Canonical bucket-start timestamp for a sample timestamp.
    pub fn bucket_start(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Interval::Raw => ts,
            Interval::Hour => truncate_to_hour(ts),
            Interval::SixHours => {
                let hour = ts.hour() - ts.hour() % 6;
                truncate_to_hour(ts)
                    .with_hour(hour)
                    .unwrap_or_else(|| truncate_to_hour(ts))
            }
            Interval::Day => truncate_to_day(ts),
            Interval::Week => {
                let days_since_sunday = ts.weekday().num_days_from_sunday() as i64;
                truncate_to_day(ts) - Duration::days(days_since_sunday)
            }
            Interval::Custom(width) => {
                let width_ms = width.num_milliseconds();
                // A directly-constructed zero or sub-millisecond width keeps
                // raw passthrough semantics instead of dividing by zero.
                if width_ms <= 0 {
                    return ts;
                }
                let ts_ms = ts.timestamp_millis();
                let floored = ts_ms - ts_ms.rem_euclid(width_ms);
                DateTime::from_timestamp_millis(floored).unwrap_or(ts)
            }
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::Raw => write!(f, "raw"),
            Interval::Hour => write!(f, "1h"),
            Interval::SixHours => write!(f, "6h"),
            Interval::Day => write!(f, "1d"),
            Interval::Week => write!(f, "1w"),
            Interval::Custom(width) => {
                let ms = width.num_milliseconds();
                if ms % 1_000 == 0 {
                    write!(f, "{}s", ms / 1_000)
                } else {
                    write!(f, "{}ms", ms)
                }
            }
        }
    }
}

fn truncate_to_hour(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

fn truncate_to_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    truncate_to_hour(ts).with_hour(0).unwrap_or(ts)
}
