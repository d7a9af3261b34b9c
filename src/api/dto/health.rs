/*
 * Responsibility
 * - GET /health のレスポンス DTO (HealthStatus)
 * - フィールド順 = JSON のキー順
 */
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::ServiceMeta;

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: &'static str,
    #[schema(example = "compliance-ai-services")]
    pub service: &'static str,
    #[schema(example = "1.0.0")]
    pub version: &'static str,
}

impl HealthStatus {
    pub fn healthy(meta: &ServiceMeta) -> Self {
        Self {
            status: "healthy",
            service: meta.name,
            version: meta.version,
        }
    }
}
