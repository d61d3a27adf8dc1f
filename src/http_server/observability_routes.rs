//! Observability HTTP Routes
//!
//! Health check and counters, plus the request-logging middleware applied to
//! every route.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::observability::{Logger, MetricsSnapshot};
use crate::student::{StudentError, StudentService};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub students: usize,
}

/// Create observability routes (`/health`, `/metrics`)
pub fn observability_routes(service: Arc<StudentService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(service)
}

async fn health_handler(
    State(service): State<Arc<StudentService>>,
) -> Result<impl IntoResponse, StudentError> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        students: service.count()?,
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn metrics_handler(State(service): State<Arc<StudentService>>) -> Json<MetricsSnapshot> {
    Json(service.metrics().snapshot())
}

/// Log one line per request and count it
pub async fn log_requests(
    State(service): State<Arc<StudentService>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    service.metrics().increment_requests();
    Logger::info(
        "HTTP_REQUEST",
        &[
            ("method", &method),
            ("path", &path),
            ("status", response.status().as_str()),
        ],
    );
    response
}
