//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. Native apps and server-to-server calls are not
//!   restricted by CORS.
//! - This middleware is applied at the Router level (not inside handlers).
//!
//! Policy:
//! - Allowlist origins from Config (exact match), WITH credentials.
//! - Every method and header is allowed. Wildcards cannot be combined with
//!   credentials, so the requested method/headers are mirrored back instead.
//! - A non-allowed origin gets no `Access-Control-Allow-Origin` header.

use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 10);

/// Apply CORS policy to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    // Config::from_env already rejects values that are not valid header values.
    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .max_age(PREFLIGHT_MAX_AGE)
}
