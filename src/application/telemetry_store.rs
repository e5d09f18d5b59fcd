// Repository trait for telemetry record access
use crate::domain::insight::{TelemetrySample, TripSummary};
use crate::domain::telemetry::MetricSeries;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Scope of one metric history request. Range bounds are absolute instants,
/// already resolved by the caller.
#[derive(Debug, Clone)]
pub struct MetricQuery {
    pub owner_id: String,
    /// Opaque metric key (e.g. `engineRPM`, `ecoScore`); used for display,
    /// never interpreted.
    pub metric: String,
    pub range_start: DateTime<Utc>,
    pub range_end: DateTime<Utc>,
    /// Restrict to a single trip when present.
    pub trip_id: Option<String>,
}

#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Samples for one metric, ascending by timestamp, with null readings
    /// already excluded.
    async fn metric_series(&self, query: &MetricQuery) -> anyhow::Result<MetricSeries>;

    /// Most recent trips for an owner, bounded by `limit`.
    async fn recent_trips(&self, owner_id: &str, limit: usize) -> anyhow::Result<Vec<TripSummary>>;

    /// Most recent telemetry rows for an owner, bounded by `limit`.
    async fn recent_telemetry(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<TelemetrySample>>;
}
