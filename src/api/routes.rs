/*
 * Responsibility
 * - URL 構造を定義 (/, /health)
 * - ドキュメント (/docs, /redoc, /openapi.json) は doc.rs 側で merge
 * - 未知の path は JSON の 404 を返す
 */
use axum::{Router, routing::get};

use crate::api::doc;
use crate::api::handlers::{health::health, not_found, root::root};
use crate::config::ServiceMeta;
use crate::state::AppState;

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";

pub fn routes(meta: &ServiceMeta) -> Router<AppState> {
    Router::new()
        .route(ROOT_PATH, get(root))
        .route(HEALTH_PATH, get(health))
        .merge(doc::routes(meta))
        .fallback(not_found)
}
