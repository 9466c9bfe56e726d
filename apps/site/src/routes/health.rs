//! Liveness check.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
}

/// Reports "OK" while the content store answers queries.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.health_check().await;
    Json(HealthResponse {
        status: if database { "OK" } else { "DEGRADED" },
        database,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::test_state;

    #[tokio::test]
    async fn test_health() {
        let state = test_state().await;
        let Json(response) = health(State(state.clone())).await;
        assert_eq!(response.status, "OK");
        assert!(response.database);

        state.db.close().await;
        let Json(response) = health(State(state)).await;
        assert_eq!(response.status, "DEGRADED");
    }
}
