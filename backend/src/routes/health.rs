//! Liveness and readiness endpoints
//!
//! `/health` and `/health/live` answer without touching anything;
//! `/health/ready` pings the database and returns 503 while it is
//! unreachable.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
}

impl HealthReport {
    fn bare(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

/// Reachability of the database, as seen by the readiness endpoint
#[derive(Serialize)]
pub struct DatabaseStatus {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn health_check() -> Json<HealthReport> {
    Json(HealthReport::bare("ok"))
}

pub async fn liveness_check() -> Json<HealthReport> {
    Json(HealthReport::bare("alive"))
}

/// Readiness: 200 once the database answers, 503 until then
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthReport>, (StatusCode, Json<HealthReport>)> {
    match db::health_check(state.db()).await {
        Ok(()) => Ok(Json(HealthReport {
            database: Some(DatabaseStatus {
                reachable: true,
                error: None,
            }),
            ..HealthReport::bare("ready")
        })),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthReport {
                database: Some(DatabaseStatus {
                    reachable: false,
                    error: Some(e.to_string()),
                }),
                ..HealthReport::bare("not_ready")
            }),
        )),
    }
}
