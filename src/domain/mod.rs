// Domain layer - Value records shared across the analytics core
pub mod insight;
pub mod telemetry;
pub mod trend;
