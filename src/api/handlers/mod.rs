/*
 * Responsibility
 * - handler の公開 (health, root)
 * - 未知の path 用 fallback (JSON の 404)
 */
pub mod health;
pub mod root;

use crate::error::AppError;

/// Router fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
