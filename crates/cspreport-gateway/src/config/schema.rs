use std::net::SocketAddr;

use serde::Deserialize;
use cspreport_core::error::{CspReportError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterConfig {
    pub version: u32,

    #[serde(default)]
    pub reporter: ReporterSection,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            reporter: ReporterSection::default(),
            metrics: MetricsSection::default(),
            log: LogSection::default(),
        }
    }
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CspReportError::InvalidConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.reporter.validate()?;
        self.metrics.validate()?;

        if self.reporter.listen == self.metrics.listen {
            return Err(CspReportError::InvalidConfig(
                "reporter.listen and metrics.listen must differ".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Extra route the report handler is mounted on (besides `/`).
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ReporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            path: default_path(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ReporterSection {
    pub fn validate(&self) -> Result<()> {
        parse_listen("reporter.listen", &self.listen)?;
        if !is_static_route(&self.path) {
            return Err(CspReportError::InvalidConfig(format!(
                "reporter.path {:?} must start with '/' and contain only non-empty literal segments",
                self.path
            )));
        }
        if !(1024..=1_048_576).contains(&self.max_body_bytes) {
            return Err(CspReportError::InvalidConfig(
                "reporter.max_body_bytes must be between 1024 and 1048576".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        parse_listen("reporter.listen", &self.listen)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_metrics_listen")]
    pub listen: String,

    /// Prefix prepended (with `_`) to every exported metric name.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            listen: default_metrics_listen(),
            namespace: default_namespace(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        parse_listen("metrics.listen", &self.listen)?;
        if !is_metric_prefix(&self.namespace) {
            return Err(CspReportError::InvalidConfig(format!(
                "metrics.namespace {:?} must match [a-zA-Z_][a-zA-Z0-9_]*",
                self.namespace
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        parse_listen("metrics.listen", &self.listen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    #[serde(default)]
    pub format: LogFormat,
}

fn parse_listen(field: &str, s: &str) -> Result<SocketAddr> {
    s.parse()
        .map_err(|e| CspReportError::InvalidConfig(format!("{field} {s:?} is not a socket address: {e}")))
}

/// `/` or `/a/b`: no empty segments and no axum capture/wildcard syntax.
fn is_static_route(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    match path.strip_prefix('/') {
        Some(rest) => rest.split('/').all(|seg| {
            !seg.is_empty() && !seg.starts_with(':') && !seg.starts_with('*')
        }),
        None => false,
    }
}

fn is_metric_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_path() -> String {
    "/csp".into()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}
fn default_metrics_listen() -> String {
    "0.0.0.0:9200".into()
}
fn default_namespace() -> String {
    "csr".into()
}
