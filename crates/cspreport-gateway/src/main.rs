//! cspreport gateway
//!
//! - Report endpoint: POST / (and reporter.path) with `application/csp-report`
//! - Metrics endpoint: GET /metrics, GET /healthz on a separate listener
//! - Both listeners share one injected metrics registry

use clap::Parser;

use cspreport_core::error::{CspReportError, Result};
use cspreport_gateway::{app_state::AppState, cli::Cli, obs, router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;

    obs::logging::init(cfg.log.format);

    let listen = cfg.reporter.listen_addr()?;
    let metrics_listen = cfg.metrics.listen_addr()?;

    let state = AppState::new(cfg);
    let report_app = router::build_report_router(state.clone());
    let metrics_app = router::build_metrics_router(state);

    let report_listener = bind(listen).await?;
    let metrics_listener = bind(metrics_listen).await?;

    tracing::info!(%listen, %metrics_listen, "cspreport-gateway starting");

    let served = tokio::try_join!(
        async {
            axum::serve(report_listener, report_app)
                .await
                .map_err(|e| CspReportError::Internal(format!("report server failed: {e}")))
        },
        async {
            axum::serve(metrics_listener, metrics_app)
                .await
                .map_err(|e| CspReportError::Internal(format!("metrics server failed: {e}")))
        },
    );

    if let Err(e) = &served {
        tracing::error!(error = %e, "server stopped");
    }
    served.map(|_| ())
}

async fn bind(addr: std::net::SocketAddr) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| CspReportError::Internal(format!("failed to bind {addr}: {e}")))
}
