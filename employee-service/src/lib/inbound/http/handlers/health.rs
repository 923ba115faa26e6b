use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::health::HealthCheckPort;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Liveness report. Always 200; a lost database degrades the status.
pub async fn health(State(state): State<AppState>) -> ApiSuccess<HealthResponseData> {
    let connected = state.health_check.database_connected().await;

    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: if connected { "OK" } else { "DEGRADED" },
            timestamp: Utc::now(),
            database: DatabaseStatus {
                postgres: if connected {
                    "connected"
                } else {
                    "disconnected"
                },
            },
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: DatabaseStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseStatus {
    pub postgres: &'static str,
}
