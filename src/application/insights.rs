// Rule-based coaching insights over recent trips and telemetry
use crate::domain::insight::{Insight, InsightKind, InsightPriority, TelemetrySample, TripSummary};

// Rule thresholds are behavior-compatible contract values.
const ECO_SCORE_LOW: f64 = 60.0;
const ECO_SCORE_EXCELLENT: f64 = 80.0;
const EFFICIENCY_HIGH: f64 = 10.0;
const HIGH_RPM: f64 = 3000.0;
const HIGH_RPM_RATIO: f64 = 0.30;
const AGGRESSIVE_THROTTLE: f64 = 80.0;
const AGGRESSIVE_THROTTLE_RATIO: f64 = 0.20;

/// Evaluate the fixed rule set over recent trip aggregates and raw telemetry.
/// Rules are independent and evaluated in a fixed order, so identical inputs
/// always produce identical output. Empty inputs are not errors; if no rule
/// fires, a single fallback insight is emitted.
pub fn generate_insights(trips: &[TripSummary], telemetry: &[TelemetrySample]) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Rule 1: mean eco score across trips that have one.
    if let Some(mean_eco) = mean_of(trips.iter().filter_map(|t| t.eco_score)) {
        if mean_eco < ECO_SCORE_LOW {
            insights.push(Insight::new(
                InsightKind::Warning,
                "Low Eco Score".to_string(),
                format!(
                    "Your average eco score is {:.0}. Smoother acceleration and earlier braking will raise it.",
                    mean_eco
                ),
                InsightPriority::High,
            ));
        } else if mean_eco > ECO_SCORE_EXCELLENT {
            insights.push(Insight::new(
                InsightKind::Success,
                "Excellent Driving".to_string(),
                format!(
                    "Your average eco score is {:.0}. Keep up the smooth driving.",
                    mean_eco
                ),
                InsightPriority::Low,
            ));
        }
    }

    // Rule 2: mean fuel consumption (liters per 100 km).
    if let Some(mean_efficiency) = mean_of(trips.iter().filter_map(|t| t.efficiency)) {
        if mean_efficiency > EFFICIENCY_HIGH {
            insights.push(Insight::new(
                InsightKind::Warning,
                "High Fuel Consumption".to_string(),
                format!(
                    "You are averaging {:.1} L/100km. Steadier speeds and gentler starts cut fuel use.",
                    mean_efficiency
                ),
                InsightPriority::Medium,
            ));
        }
    }

    // Rule 3: share of telemetry rows with the engine above 3000 RPM.
    if let Some(high_rpm_ratio) = ratio_of(telemetry.iter().filter_map(|s| s.engine_rpm), HIGH_RPM)
    {
        if high_rpm_ratio > HIGH_RPM_RATIO {
            insights.push(Insight::new(
                InsightKind::Tip,
                "High RPM Driving".to_string(),
                format!(
                    "The engine ran above {:.0} RPM in {:.0}% of recent readings. Shifting up earlier saves fuel.",
                    HIGH_RPM,
                    high_rpm_ratio * 100.0
                ),
                InsightPriority::Medium,
            ));
        }
    }

    // Rule 4: share of telemetry rows with throttle position above 80.
    if let Some(throttle_ratio) = ratio_of(
        telemetry.iter().filter_map(|s| s.throttle_position),
        AGGRESSIVE_THROTTLE,
    ) {
        if throttle_ratio > AGGRESSIVE_THROTTLE_RATIO {
            insights.push(Insight::new(
                InsightKind::Tip,
                "Aggressive Acceleration".to_string(),
                format!(
                    "Heavy throttle in {:.0}% of recent readings. Easing into the pedal improves efficiency.",
                    throttle_ratio * 100.0
                ),
                InsightPriority::Medium,
            ));
        }
    }

    // Rule 5: fallback when nothing fired.
    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::Info,
            "Good Progress".to_string(),
            "No issues detected in your recent driving. Keep it up.".to_string(),
            InsightPriority::Low,
        ));
    }

    insights
}

/// Mean over present values; `None` when no value is present.
fn mean_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 { None } else { Some(sum / count as f64) }
}

/// Fraction of present values above `threshold`; `None` when no value is
/// present.
fn ratio_of(values: impl Iterator<Item = f64>, threshold: f64) -> Option<f64> {
    let mut above = 0u32;
    let mut count = 0u32;
    for v in values {
        if v > threshold {
            above += 1;
        }
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(above as f64 / count as f64)
    }
}
