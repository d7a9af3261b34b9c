/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 各 module は `apply(router, config) -> Router` を公開する
 * - 適用順は app.rs が決める (trusted_host → cors の順に評価される)
 */
pub mod cors;
pub mod http;
pub mod trusted_host;
