/*
 * Responsibility
 * - GET / (サービス名・バージョン・docs / health へのリンク)
 * - I/O なし。常に 200
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::api::doc::DOCS_PATH;
use crate::api::dto::ServiceInfo;
use crate::api::routes::HEALTH_PATH;
use crate::state::AppState;

/// Root endpoint with service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name, version and useful links", body = ServiceInfo)
    ),
    tag = "Service"
)]
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfo::new(
            &state.config.service,
            DOCS_PATH,
            HEALTH_PATH,
        )),
    )
}
