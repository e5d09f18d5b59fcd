// Telemetry data domain models
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One timestamped measurement for a metric. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// An ascending-time-ordered sequence of samples for exactly one named metric.
/// Built fresh per request from the record store; never mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSeries {
    pub metric: String,
    pub samples: Vec<Sample>,
}

impl MetricSeries {
    pub fn new(metric: String, samples: Vec<Sample>) -> Self {
        Self { metric, samples }
    }

    /// Build a series from sparse records, dropping null and non-finite
    /// values. Telemetry rows may carry no reading for a metric; those rows
    /// must never reach bucketing as zeros or NaNs.
    pub fn from_sparse(metric: String, records: Vec<(DateTime<Utc>, Option<f64>)>) -> Self {
        let samples = records
            .into_iter()
            .filter_map(|(timestamp, value)| match value {
                Some(v) if v.is_finite() => Some(Sample::new(timestamp, v)),
                _ => None,
            })
            .collect();
        Self { metric, samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A fixed time-window aggregate of one or more samples. Buckets with zero
/// contributing samples are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    pub bucket_start: DateTime<Utc>,
    pub mean: f64,
    pub count: u32,
}

impl Bucket {
    pub fn new(bucket_start: DateTime<Utc>, mean: f64, count: u32) -> Self {
        Self {
            bucket_start,
            mean,
            count,
        }
    }
}
