//! In-process observability.
//!
//! Metrics are stored as atomics in an injected registry and rendered in
//! Prometheus text format by the `/metrics` handler. Log subscriber setup
//! lives in `logging`.

pub mod logging;
pub mod metrics;

pub use metrics::{CounterVec, ReporterMetrics};
