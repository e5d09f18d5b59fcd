// Trend classification over a bucketed series
use crate::domain::telemetry::Bucket;
use crate::domain::trend::TrendDirection;

/// Buckets compared on each side of the recent/older split.
const TREND_WINDOW: usize = 5;
/// Percent change inside which a series is treated as flat.
const DEADBAND_PERCENT: f64 = 5.0;

/// Classify a bucketed series (ascending time order) by comparing the mean
/// of the last `min(5, n)` bucket values against the mean of the first
/// `min(5, n - 5)` values. Series too short to form both windows, and series
/// whose older mean is zero, classify as `Stable`.
pub fn classify_trend(buckets: &[Bucket]) -> TrendDirection {
    let n = buckets.len();
    if n < 2 {
        return TrendDirection::Stable;
    }

    let recent_len = TREND_WINDOW.min(n);
    let older_len = TREND_WINDOW.min(n.saturating_sub(TREND_WINDOW));
    if older_len == 0 {
        return TrendDirection::Stable;
    }

    let recent = mean(&buckets[n - recent_len..]);
    let older = mean(&buckets[..older_len]);
    if older == 0.0 {
        return TrendDirection::Stable;
    }

    let percent_change = (recent - older) / older * 100.0;
    if percent_change > DEADBAND_PERCENT {
        TrendDirection::Improving
    } else if percent_change < -DEADBAND_PERCENT {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

fn mean(buckets: &[Bucket]) -> f64 {
    buckets.iter().map(|b| b.mean).sum::<f64>() / buckets.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn buckets(values: &[f64]) -> Vec<Bucket> {
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bucket::new(base + Duration::hours(i as i64), v, 1))
            .collect()
    }

    #[test]
    fn test_improving_trend() {
        let b = buckets(&[50.0, 50.0, 50.0, 50.0, 50.0, 70.0, 70.0, 70.0, 70.0, 70.0]);
        assert_eq!(classify_trend(&b), TrendDirection::Improving);
    }

    #[test]
    fn test_declining_trend() {
        let b = buckets(&[70.0, 70.0, 70.0, 70.0, 70.0, 50.0, 50.0, 50.0, 50.0, 50.0]);
        assert_eq!(classify_trend(&b), TrendDirection::Declining);
    }

    #[test]
    fn test_flat_series_is_stable() {
        let b = buckets(&[60.0; 12]);
        assert_eq!(classify_trend(&b), TrendDirection::Stable);
    }

    #[test]
    fn test_change_inside_deadband_is_stable() {
        // +4% stays inside the ±5% deadband.
        let b = buckets(&[100.0, 100.0, 100.0, 100.0, 100.0, 104.0, 104.0, 104.0, 104.0, 104.0]);
        assert_eq!(classify_trend(&b), TrendDirection::Stable);
    }

    #[test]
    fn test_short_series_is_stable() {
        assert_eq!(classify_trend(&buckets(&[])), TrendDirection::Stable);
        assert_eq!(classify_trend(&buckets(&[42.0])), TrendDirection::Stable);
        // Five or fewer buckets leave the older window empty.
        assert_eq!(
            classify_trend(&buckets(&[10.0, 20.0, 30.0, 40.0, 50.0])),
            TrendDirection::Stable
        );
    }

    #[test]
    fn test_zero_older_mean_is_stable() {
        let b = buckets(&[0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 10.0]);
        assert_eq!(classify_trend(&b), TrendDirection::Stable);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let b = buckets(&[50.0, 55.0, 52.0, 58.0, 61.0, 64.0, 66.0, 70.0]);
        assert_eq!(classify_trend(&b), classify_trend(&b));
    }

    #[test]
    fn test_windows_do_not_overlap_on_short_series() {
        // Seven buckets: older window is the first two, recent is the last five.
        // older mean 10, recent mean 30 -> improving.
        let b = buckets(&[10.0, 10.0, 30.0, 30.0, 30.0, 30.0, 30.0]);
        assert_eq!(classify_trend(&b), TrendDirection::Improving);
    }
}
