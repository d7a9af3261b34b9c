/*
 * Responsibility
 * - GET / のレスポンス DTO (ServiceInfo)
 * - フィールド順 = JSON のキー順
 */
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::ServiceMeta;

/// Returned by `GET /`: who this service is and where to look next.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "Compliance AI Services")]
    pub message: &'static str,
    #[schema(example = "1.0.0")]
    pub version: &'static str,
    #[schema(example = "/docs")]
    pub docs: &'static str,
    #[schema(example = "/health")]
    pub health: &'static str,
}

impl ServiceInfo {
    pub fn new(meta: &ServiceMeta, docs: &'static str, health: &'static str) -> Self {
        Self {
            message: meta.title,
            version: meta.version,
            docs,
            health,
        }
    }
}
