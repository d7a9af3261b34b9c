/*
 * Responsibility
 * - レスポンス DTO の re-export
 */
mod health;
mod service_info;

pub use health::HealthStatus;
pub use service_info::ServiceInfo;
