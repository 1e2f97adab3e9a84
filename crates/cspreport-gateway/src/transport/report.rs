//! `report-uri` endpoint.
//!
//! Responsibilities:
//! - Decode the `application/csp-report` body once
//! - Classify directive/disposition into bounded labels and count them
//! - Emit one structured log record per accepted report
//! - Answer 204 (accepted), 400 (undecodable), 413 (too large)

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use cspreport_core::error::{CspReportError, Result};
use cspreport_core::report::{decode, ContentSecurityPolicyReport};

use crate::app_state::AppState;

const GREETING: &str = "hello from CSP reporter";
const BAD_REQUEST_BODY: &str = r#"{"message":"bad request data"}"#;

/// HTTP-facing wrapper so handlers can return `Result<_, Rejection>`.
#[derive(Debug)]
pub struct Rejection(pub CspReportError);

impl From<CspReportError> for Rejection {
    fn from(e: CspReportError) -> Self {
        Self(e)
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self.0 {
            CspReportError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                BAD_REQUEST_BODY,
            )
                .into_response(),
            CspReportError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE.into_response(),
            CspReportError::InvalidConfig(msg) | CspReportError::Internal(msg) => {
                tracing::error!(error = %msg, "report handler failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `GET`: liveness hint for humans poking the endpoint.
pub async fn hello() -> &'static str {
    GREETING
}

/// `POST`: accept one violation report.
pub async fn submit(
    State(app): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<StatusCode, Rejection> {
    let metrics = app.metrics();

    let cspr = match read_body(body).and_then(|b| decode(&b)) {
        Ok(cspr) => cspr,
        Err(e) => {
            tracing::warn!(error = %e, code = e.client_code().as_str(), "could not deserialize request");
            metrics.record_decode_error();
            return Err(e.into());
        }
    };

    let directive = cspr.report.directive();
    let disposition = cspr.report.disposition();
    metrics.record_report(directive, disposition);

    log_report(&cspr);

    Ok(StatusCode::NO_CONTENT)
}

fn read_body(body: std::result::Result<Bytes, BytesRejection>) -> Result<Bytes> {
    body.map_err(|rej| {
        if rej.status() == StatusCode::PAYLOAD_TOO_LARGE {
            CspReportError::PayloadTooLarge
        } else {
            CspReportError::BadRequest(rej.body_text())
        }
    })
}

fn log_report(cspr: &ContentSecurityPolicyReport) {
    let r = &cspr.report;
    tracing::info!(
        directive = %r.directive(),
        disposition = %r.disposition(),
        document_uri = %r.document_uri,
        referrer = %r.referrer,
        violated_directive = %r.violated_directive,
        effective_directive = %r.effective_directive,
        original_policy = %r.original_policy,
        blocked_uri = %r.blocked_uri,
        script_sample = %r.script_sample,
        status_code = r.status_code,
        "content security policy report submitted"
    );
}
