// Telemetry analytics core - bucketing, trend classification, coaching insights
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::aggregation::aggregate;
pub use application::analytics_service::{AnalyticsService, MetricReport};
pub use application::insights::generate_insights;
pub use application::interval::Interval;
pub use application::telemetry_store::{MetricQuery, TelemetryStore};
pub use application::trend::classify_trend;
pub use domain::insight::{Insight, InsightKind, InsightPriority, TelemetrySample, TripSummary};
pub use domain::telemetry::{Bucket, MetricSeries, Sample};
pub use domain::trend::TrendDirection;
pub use error::AnalyticsError;
