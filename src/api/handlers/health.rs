/*
 * Responsibility
 * - GET /health (監視用の疎通確認)
 * - I/O なし。常に 200
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::api::dto::HealthStatus;
use crate::state::AppState;

/// Health check endpoint for service monitoring
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthStatus)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthStatus::healthy(&state.config.service)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::to_bytes;

    use crate::config::Config;

    async fn call() -> (StatusCode, String) {
        let state = AppState::new(Arc::new(Config::default()));
        let response = health(State(state)).await.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn returns_healthy_payload() {
        let (status, body) = call().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"status":"healthy","service":"compliance-ai-services","version":"1.0.0"}"#
        );
    }

    #[tokio::test]
    async fn always_succeeds_with_identical_body() {
        let (_, first) = call().await;
        for _ in 0..10 {
            let (status, body) = call().await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, first);
        }
    }
}
