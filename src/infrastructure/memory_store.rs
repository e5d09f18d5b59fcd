// In-memory record store implementation
//
// Backs tests and embedded use. Performs the filtering the storage layer is
// responsible for: owner, metric, time range, optional trip scope, and null
// exclusion, so the analytics core only ever sees fully-resolved series.
use crate::application::telemetry_store::{MetricQuery, TelemetryStore};
use crate::domain::insight::{TelemetrySample, TripSummary};
use crate::domain::telemetry::MetricSeries;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
struct MetricRecord {
    owner_id: String,
    metric: String,
    trip_id: Option<String>,
    timestamp: DateTime<Utc>,
    value: Option<f64>,
}

#[derive(Debug, Clone)]
struct TripRecord {
    owner_id: String,
    ended_at: DateTime<Utc>,
    summary: TripSummary,
}

#[derive(Debug, Clone)]
struct TelemetryRecord {
    owner_id: String,
    sample: TelemetrySample,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    metrics: Vec<MetricRecord>,
    trips: Vec<TripRecord>,
    telemetry: Vec<TelemetryRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_metric(
        &mut self,
        owner_id: &str,
        metric: &str,
        trip_id: Option<&str>,
        timestamp: DateTime<Utc>,
        value: Option<f64>,
    ) {
        self.metrics.push(MetricRecord {
            owner_id: owner_id.to_string(),
            metric: metric.to_string(),
            trip_id: trip_id.map(|t| t.to_string()),
            timestamp,
            value,
        });
    }

    pub fn push_trip(&mut self, owner_id: &str, ended_at: DateTime<Utc>, summary: TripSummary) {
        self.trips.push(TripRecord {
            owner_id: owner_id.to_string(),
            ended_at,
            summary,
        });
    }

    pub fn push_telemetry(&mut self, owner_id: &str, sample: TelemetrySample) {
        self.telemetry.push(TelemetryRecord {
            owner_id: owner_id.to_string(),
            sample,
        });
    }
}

#[async_trait]
impl TelemetryStore for InMemoryStore {
    async fn metric_series(&self, query: &MetricQuery) -> anyhow::Result<MetricSeries> {
        let mut records: Vec<(DateTime<Utc>, Option<f64>)> = self
            .metrics
            .iter()
            .filter(|r| r.owner_id == query.owner_id && r.metric == query.metric)
            .filter(|r| r.timestamp >= query.range_start && r.timestamp <= query.range_end)
            .filter(|r| match &query.trip_id {
                Some(trip_id) => r.trip_id.as_deref() == Some(trip_id.as_str()),
                None => true,
            })
            .map(|r| (r.timestamp, r.value))
            .collect();
        records.sort_by_key(|(timestamp, _)| *timestamp);

        tracing::debug!(
            "Resolved {} records for metric {} (owner {})",
            records.len(),
            query.metric,
            query.owner_id
        );

        Ok(MetricSeries::from_sparse(query.metric.clone(), records))
    }

    async fn recent_trips(&self, owner_id: &str, limit: usize) -> anyhow::Result<Vec<TripSummary>> {
        let mut trips: Vec<&TripRecord> = self
            .trips
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .collect();
        trips.sort_by_key(|r| std::cmp::Reverse(r.ended_at));

        Ok(trips
            .into_iter()
            .take(limit)
            .map(|r| r.summary.clone())
            .collect())
    }

    async fn recent_telemetry(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<TelemetrySample>> {
        let mut rows: Vec<&TelemetryRecord> = self
            .telemetry
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .collect();
        rows.sort_by_key(|r| std::cmp::Reverse(r.sample.timestamp));

        Ok(rows
            .into_iter()
            .take(limit)
            .map(|r| r.sample.clone())
            .collect())
    }
}
