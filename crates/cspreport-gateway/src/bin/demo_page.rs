//! Serves the CSP demo page so a browser sends reports to a local reporter.

use clap::Parser;

use cspreport_core::error::{CspReportError, Result};
use cspreport_gateway::{config::LogFormat, demo, obs};

#[derive(Parser, Debug)]
#[command(name = "csp-demo-page", about = "Serve a page that violates its own CSP")]
struct Args {
    /// Address to serve the page on.
    #[arg(long, default_value = "127.0.0.1:8888")]
    listen: std::net::SocketAddr,

    /// Reporter URL placed in the policy's report-uri.
    #[arg(long, default_value = "http://localhost:8080")]
    report_uri: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    obs::logging::init(LogFormat::Pretty);

    let app = demo::build_demo_router(&args.report_uri);
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .map_err(|e| CspReportError::Internal(format!("failed to bind {}: {e}", args.listen)))?;

    tracing::info!(listen = %args.listen, report_uri = %args.report_uri, "please open http://{}", args.listen);

    axum::serve(listener, app)
        .await
        .map_err(|e| CspReportError::Internal(format!("demo server failed: {e}")))
}
