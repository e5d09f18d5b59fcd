use serde::Deserialize;

/// Fetch bounds for insight generation. The bounds are a caller policy, not
/// a core invariant; defaults match the upstream service.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsPolicy {
    #[serde(default = "default_recent_trips")]
    pub recent_trips: usize,
    #[serde(default = "default_recent_telemetry")]
    pub recent_telemetry: usize,
}

fn default_recent_trips() -> usize {
    20
}

fn default_recent_telemetry() -> usize {
    100
}

impl Default for AnalyticsPolicy {
    fn default() -> Self {
        Self {
            recent_trips: default_recent_trips(),
            recent_telemetry: default_recent_telemetry(),
        }
    }
}

/// Load the policy from `config/analytics.{toml,yaml,...}`, falling back to
/// defaults when no file is present.
pub fn load_analytics_policy() -> anyhow::Result<AnalyticsPolicy> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/analytics").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
