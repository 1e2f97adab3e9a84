//! Shared application state for the reporter.
//!
//! Holds the validated config and the metrics registry. Handlers receive it
//! through axum `State`, so tests can build an isolated registry per router.

use std::sync::Arc;

use crate::config::ReporterConfig;
use crate::obs::ReporterMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ReporterMetrics>,
}

struct AppStateInner {
    cfg: ReporterConfig,
}

impl AppState {
    /// Build state with a fresh registry named after `cfg.metrics.namespace`.
    pub fn new(cfg: ReporterConfig) -> Self {
        let metrics = Arc::new(ReporterMetrics::new(cfg.metrics.namespace.clone()));
        Self::with_metrics(cfg, metrics)
    }

    /// Build state around an externally owned registry.
    pub fn with_metrics(cfg: ReporterConfig, metrics: Arc<ReporterMetrics>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics,
        }
    }

    pub fn cfg(&self) -> &ReporterConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<ReporterMetrics> {
        Arc::clone(&self.metrics)
    }
}
