//! Command-line arguments for the reporter binary.
//!
//! Flags override the matching config file values, so a container can run
//! with no config file at all.

use clap::Parser;

use cspreport_core::error::Result;

use crate::config::{self, ReporterConfig};

/// CSP violation reporter: counts `report-uri` submissions per directive.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "cspreport-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YAML config file. Built-in defaults apply when omitted.
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Reporter address to listen on (overrides reporter.listen).
    #[arg(long)]
    pub address: Option<String>,

    /// Prometheus address to listen on (overrides metrics.listen).
    #[arg(long = "metrics-address", alias = "prometheus-address")]
    pub metrics_address: Option<String>,
}

impl Cli {
    /// Load the config file (if any), apply flag overrides, validate.
    pub fn resolve_config(&self) -> Result<ReporterConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => ReporterConfig::default(),
        };
        if let Some(addr) = &self.address {
            cfg.reporter.listen = addr.clone();
        }
        if let Some(addr) = &self.metrics_address {
            cfg.metrics.listen = addr.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cspreport-gateway").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_flags_gives_defaults() {
        let cfg = parse(&[]).resolve_config().unwrap();
        assert_eq!(cfg.reporter.listen, "0.0.0.0:8080");
        assert_eq!(cfg.metrics.listen, "0.0.0.0:9200");
    }

    #[test]
    fn address_flags_override() {
        let cli = parse(&["--address", "127.0.0.1:18080", "--prometheus-address", "127.0.0.1:19200"]);
        let cfg = cli.resolve_config().unwrap();
        assert_eq!(cfg.reporter.listen, "127.0.0.1:18080");
        assert_eq!(cfg.metrics.listen, "127.0.0.1:19200");
    }

    #[test]
    fn bad_override_is_rejected() {
        let err = parse(&["--address", ":80"]).resolve_config().unwrap_err();
        assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
    }

    #[test]
    fn same_address_for_both_listeners_is_rejected() {
        let cli = parse(&["--address", "127.0.0.1:9000", "--metrics-address", "127.0.0.1:9000"]);
        assert!(cli.resolve_config().is_err());
    }
}
