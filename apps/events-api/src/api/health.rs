//! Application-specific readiness handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

use crate::state::AppState;

/// Readiness check. Pings PostgreSQL when events are stored there; the
/// in-memory store is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(db) = &state.db {
        let check: HealthCheckFuture<'_> =
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) });
        checks.push(("database", check));
    }

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
