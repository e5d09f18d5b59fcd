// Analytics service - Use case tying the record store to the pure pipeline
use crate::application::aggregation::aggregate;
use crate::application::insights::generate_insights;
use crate::application::interval::Interval;
use crate::application::telemetry_store::{MetricQuery, TelemetryStore};
use crate::application::trend::classify_trend;
use crate::domain::insight::Insight;
use crate::domain::telemetry::Bucket;
use crate::domain::trend::TrendDirection;
use crate::infrastructure::config::AnalyticsPolicy;
use serde::Serialize;
use std::sync::Arc;

/// Bucketed history plus trend for one metric, ready for serialization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    pub metric: String,
    pub interval: String,
    pub buckets: Vec<Bucket>,
    pub trend: TrendDirection,
}

#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn TelemetryStore>,
    policy: AnalyticsPolicy,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn TelemetryStore>, policy: AnalyticsPolicy) -> Self {
        Self { store, policy }
    }

    /// Fetch one metric's samples, bucket them by the requested interval
    /// token, and classify the trend.
    pub async fn metric_report(
        &self,
        query: &MetricQuery,
        interval_token: &str,
    ) -> anyhow::Result<MetricReport> {
        let interval = Interval::parse(interval_token)?;
        let series = self.store.metric_series(query).await?;

        tracing::debug!(
            "Fetched {} samples for metric {} (owner {})",
            series.len(),
            series.metric,
            query.owner_id
        );

        let buckets = aggregate(&series, interval);
        let trend = classify_trend(&buckets);

        Ok(MetricReport {
            metric: series.metric,
            interval: interval.to_string(),
            buckets,
            trend,
        })
    }

    /// Evaluate the coaching rule set over the owner's recent trips and
    /// telemetry, bounded by the configured fetch policy.
    pub async fn driving_insights(&self, owner_id: &str) -> anyhow::Result<Vec<Insight>> {
        let trips = self
            .store
            .recent_trips(owner_id, self.policy.recent_trips)
            .await?;
        let telemetry = self
            .store
            .recent_telemetry(owner_id, self.policy.recent_telemetry)
            .await?;

        tracing::debug!(
            "Generating insights for owner {} from {} trips and {} telemetry rows",
            owner_id,
            trips.len(),
            telemetry.len()
        );

        Ok(generate_insights(&trips, &telemetry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight::{TelemetrySample, TripSummary};
    use crate::error::AnalyticsError;
    use crate::infrastructure::memory_store::InMemoryStore;
    use chrono::{Duration, TimeZone, Utc};

    fn store_with_eco_scores() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
        // Ten hourly readings: five at 50, then five at 70.
        for i in 0..10 {
            let value = if i < 5 { 50.0 } else { 70.0 };
            store.push_metric(
                "driver-1",
                "ecoScore",
                None,
                base + Duration::hours(i),
                Some(value),
            );
        }
        store
    }

    #[tokio::test]
    async fn test_metric_report_buckets_and_classifies() {
        let service = AnalyticsService::new(
            Arc::new(store_with_eco_scores()),
            AnalyticsPolicy::default(),
        );
        let query = MetricQuery {
            owner_id: "driver-1".to_string(),
            metric: "ecoScore".to_string(),
            range_start: Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
            range_end: Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap(),
            trip_id: None,
        };

        let report = service.metric_report(&query, "1h").await.unwrap();
        assert_eq!(report.metric, "ecoScore");
        assert_eq!(report.interval, "1h");
        assert_eq!(report.buckets.len(), 10);
        assert_eq!(report.trend, TrendDirection::Improving);
    }

    #[tokio::test]
    async fn test_metric_report_rejects_unknown_interval() {
        let service = AnalyticsService::new(
            Arc::new(store_with_eco_scores()),
            AnalyticsPolicy::default(),
        );
        let query = MetricQuery {
            owner_id: "driver-1".to_string(),
            metric: "ecoScore".to_string(),
            range_start: Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
            range_end: Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap(),
            trip_id: None,
        };

        let err = service.metric_report(&query, "30d").await.unwrap_err();
        assert!(err.downcast_ref::<AnalyticsError>().is_some());
    }

    #[tokio::test]
    async fn test_driving_insights_fallback_on_empty_store() {
        let service =
            AnalyticsService::new(Arc::new(InMemoryStore::new()), AnalyticsPolicy::default());
        let insights = service.driving_insights("driver-1").await.unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Good Progress");
    }

    #[tokio::test]
    async fn test_driving_insights_respects_policy_bounds() {
        let mut store = InMemoryStore::new();
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
        // Oldest trip is terrible, the two newest are excellent; a policy
        // bounded to two trips must only see the excellent ones.
        store.push_trip(
            "driver-1",
            base,
            TripSummary::new("trip-old".to_string(), Some(10.0), None),
        );
        store.push_trip(
            "driver-1",
            base + Duration::hours(1),
            TripSummary::new("trip-a".to_string(), Some(85.0), None),
        );
        store.push_trip(
            "driver-1",
            base + Duration::hours(2),
            TripSummary::new("trip-b".to_string(), Some(90.0), None),
        );

        let policy = AnalyticsPolicy {
            recent_trips: 2,
            recent_telemetry: 100,
        };
        let service = AnalyticsService::new(Arc::new(store), policy);
        let insights = service.driving_insights("driver-1").await.unwrap();
        assert_eq!(insights[0].title, "Excellent Driving");
    }

    #[tokio::test]
    async fn test_report_serializes_for_response_layer() {
        let service = AnalyticsService::new(
            Arc::new(store_with_eco_scores()),
            AnalyticsPolicy::default(),
        );
        let query = MetricQuery {
            owner_id: "driver-1".to_string(),
            metric: "ecoScore".to_string(),
            range_start: Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
            range_end: Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap(),
            trip_id: None,
        };

        let report = service.metric_report(&query, "6h").await.unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["metric"], "ecoScore");
        assert_eq!(json["interval"], "6h");
        assert_eq!(json["trend"], "stable");
        assert!(json["buckets"].as_array().unwrap().len() <= 4);
    }

    #[tokio::test]
    async fn test_insights_use_recent_telemetry() {
        let mut store = InMemoryStore::new();
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
        for i in 0..10 {
            let rpm = if i < 4 { 3500.0 } else { 1500.0 };
            store.push_telemetry(
                "driver-1",
                TelemetrySample::new(base + Duration::seconds(i), Some(rpm), Some(20.0)),
            );
        }

        let service = AnalyticsService::new(Arc::new(store), AnalyticsPolicy::default());
        let insights = service.driving_insights("driver-1").await.unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "High RPM Driving");
    }
}
