// Application layer - Use cases and the pure analytics pipeline
pub mod aggregation;
pub mod analytics_service;
pub mod insights;
pub mod interval;
pub mod telemetry_store;
pub mod trend;
