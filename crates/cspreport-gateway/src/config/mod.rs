//! Reporter config loader (strict parsing).

pub mod schema;

use std::fs;

use cspreport_core::error::{CspReportError, Result};

pub use schema::{LogFormat, LogSection, MetricsSection, ReporterConfig, ReporterSection};

pub fn load_from_file(path: &str) -> Result<ReporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CspReportError::InvalidConfig(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ReporterConfig> {
    let cfg: ReporterConfig = serde_yaml::from_str(s)
        .map_err(|e| CspReportError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
