// Error taxonomy for the analytics core
use thiserror::Error;

/// Errors surfaced synchronously to the caller. Empty inputs are not errors;
/// they produce empty or fallback outputs.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Negative interval width or an unknown interval token. Retrying with
    /// the same argument cannot succeed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
