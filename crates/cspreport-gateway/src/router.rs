//! Axum router wiring.
//!
//! Two routers, one per listener: the public report endpoint and the
//! operational metrics/health endpoint.

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{app_state::AppState, ops, transport};

pub fn build_report_router(state: AppState) -> Router {
    let handler = get(transport::report::hello).post(transport::report::submit);

    let mut router = Router::new().route("/", handler.clone());
    let path = state.cfg().reporter.path.as_str();
    if path != "/" {
        router = router.route(path, handler);
    }

    let limit = state.cfg().reporter.max_body_bytes;
    router
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .layer(catch_panic_layer())
        .with_state(state)
}

pub fn build_metrics_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Turns a handler panic into a logged 500.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown error"
    };
    tracing::error!(error = %detail, "panic occurred in http handler");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
