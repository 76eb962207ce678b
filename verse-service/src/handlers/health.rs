//! Liveness and readiness probes.

use crate::startup::AppState;
use axum::{extract::State, http::StatusCode};
use service_core::error::AppError;

/// Liveness probe.
///
/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// Readiness probe: verifies the upstream provider is reachable.
///
/// GET /ready
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    match state.text_provider.health_check().await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            Err(AppError::ServiceUnavailable)
        }
    }
}
