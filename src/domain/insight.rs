// Insight domain models - coaching observations and their inputs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-trip aggregates consumed by insight rules. Fields are optional because
/// a trip may finish before upstream scoring has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip_id: String,
    /// Synthetic 0-100 efficiency rating computed upstream; opaque here.
    pub eco_score: Option<f64>,
    /// Fuel consumption in liters per 100 km.
    pub efficiency: Option<f64>,
}

impl TripSummary {
    pub fn new(trip_id: String, eco_score: Option<f64>, efficiency: Option<f64>) -> Self {
        Self {
            trip_id,
            eco_score,
            efficiency,
        }
    }
}

/// One raw telemetry row consumed by insight rules. OBD readings are sparse;
/// either field may be absent on any given row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub timestamp: DateTime<Utc>,
    pub engine_rpm: Option<f64>,
    /// Throttle position, 0-100.
    pub throttle_position: Option<f64>,
}

impl TelemetrySample {
    pub fn new(
        timestamp: DateTime<Utc>,
        engine_rpm: Option<f64>,
        throttle_position: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            engine_rpm,
            throttle_position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightKind {
    Warning,
    Success,
    Tip,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightPriority {
    Low,
    Medium,
    High,
}

/// A rule-derived, human-readable coaching observation.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub priority: InsightPriority,
}

impl Insight {
    pub fn new(kind: InsightKind, title: String, message: String, priority: InsightPriority) -> Self {
        Self {
            kind,
            title,
            message,
            priority,
        }
    }
}
