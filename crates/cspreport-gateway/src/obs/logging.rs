//! tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the reporter logs at `info`.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;

const DEFAULT_FILTER: &str = "info";

pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt().with_env_filter(filter).with_target(false);
    let installed = match format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    // Tests and embedders may own the global subscriber already; keep theirs.
    if let Err(e) = installed {
        tracing::debug!(error = %e, "tracing subscriber already installed, keeping it");
    }
}
