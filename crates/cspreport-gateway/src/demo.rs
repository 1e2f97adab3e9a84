//! Demo page that makes a browser emit violation reports.
//!
//! Serves a static page under a strict `default-src 'self'` policy whose
//! `report-uri` points at a running reporter.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

const INDEX: &str = include_str!("../assets/index.html");

#[derive(Clone)]
struct DemoState {
    csp: String,
    report_to: String,
}

/// Policy header value for the given reporter URL.
pub fn policy_header(report_uri: &str) -> String {
    format!("default-src 'self'; report-uri {report_uri}; report-to default")
}

/// Legacy `Report-To` group named `default`.
pub fn report_to_header(report_uri: &str) -> String {
    serde_json::json!({
        "group": "default",
        "max_age": 10_886_400,
        "endpoints": [{ "url": report_uri }],
    })
    .to_string()
}

pub fn build_demo_router(report_uri: &str) -> Router {
    let state = DemoState {
        csp: policy_header(report_uri),
        report_to: report_to_header(report_uri),
    };
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(s): State<DemoState>) -> impl IntoResponse {
    tracing::info!("demo page served");
    (
        [
            (header::CONTENT_SECURITY_POLICY, s.csp),
            (header::HeaderName::from_static("report-to"), s.report_to),
        ],
        Html(INDEX),
    )
}
