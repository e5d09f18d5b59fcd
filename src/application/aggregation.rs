// Interval aggregation - buckets a metric series into fixed time windows
use crate::application::interval::Interval;
use crate::domain::telemetry::{Bucket, MetricSeries};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Bucket a series into fixed-width windows and reduce each window to a mean
/// and a sample count. Output is ascending by bucket start; windows with no
/// samples are never emitted. An empty series produces an empty output.
///
/// Invalid widths are rejected when the `Interval` is constructed, so this
/// function itself cannot fail.
pub fn aggregate(series: &MetricSeries, interval: Interval) -> Vec<Bucket> {
    // Raw passthrough keeps duplicate timestamps as separate buckets.
    if interval == Interval::Raw {
        return series
            .samples
            .iter()
            .map(|s| Bucket::new(s.timestamp, s.value, 1))
            .collect();
    }

    let mut keyed: BTreeMap<DateTime<Utc>, (f64, u32)> = BTreeMap::new();
    for sample in &series.samples {
        let entry = keyed
            .entry(interval.bucket_start(sample.timestamp))
            .or_insert((0.0, 0));
        entry.0 += sample.value;
        entry.1 += 1;
    }

    keyed
        .into_iter()
        .map(|(bucket_start, (sum, count))| Bucket::new(bucket_start, sum / count as f64, count))
        .collect()
}
