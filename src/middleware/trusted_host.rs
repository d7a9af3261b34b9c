//! Host header allow-list.
//!
//! Requests whose `Host` is not in the configured allow-list are rejected with
//! `400 Invalid host header` before CORS handling or any handler runs.
//!
//! Pattern syntax (one entry per `ALLOWED_HOSTS` item):
//! - `localhost`, `127.0.0.1`: exact match, ASCII case-insensitive.
//! - `*.example.com`: any subdomain of `example.com`, but not `example.com` itself.
//! - `*`: every host.
//!
//! Any other use of `*` is rejected by `Config` at startup.
//!
//! The port is ignored (`localhost:8001` matches `localhost`). For HTTP/2 requests
//! without a `Host` header the URI authority is used instead.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostPattern {
    Exact(String),
    // Stored with the leading dot: ".example.com"
    Subdomain(String),
}

#[derive(Debug, Clone)]
pub struct HostPolicy {
    allow_any: bool,
    patterns: Vec<HostPattern>,
}

impl HostPolicy {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allow_any = false;
        let mut patterns = Vec::new();

        for host in hosts {
            let host = host.as_ref().trim().to_ascii_lowercase();
            if host == "*" {
                allow_any = true;
            } else if host.contains('*') {
                // Only "*" and "*.domain" are patterns; Config rejects anything else.
                if let Some(domain) = subdomain_suffix(&host) {
                    patterns.push(HostPattern::Subdomain(format!(".{domain}")));
                }
            } else if !host.is_empty() {
                patterns.push(HostPattern::Exact(host));
            }
        }

        Self {
            allow_any,
            patterns,
        }
    }

    /// `host` may carry a port; it is stripped before matching.
    pub fn is_allowed(&self, host: &str) -> bool {
        if self.allow_any {
            return true;
        }

        let host = strip_port(host.trim()).to_ascii_lowercase();
        if host.is_empty() {
            return false;
        }

        self.patterns.iter().any(|pattern| match pattern {
            HostPattern::Exact(exact) => *exact == host,
            HostPattern::Subdomain(suffix) => host.ends_with(suffix.as_str()),
        })
    }
}

/// `"*.example.com"` -> `Some("example.com")`; any other use of `*` is `None`.
pub fn subdomain_suffix(pattern: &str) -> Option<&str> {
    pattern
        .strip_prefix("*.")
        .filter(|domain| !domain.is_empty() && !domain.contains('*'))
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literal: "[::1]:8001" -> "[::1]"
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    host.split_once(':').map_or(host, |(name, _port)| name)
}

/// The `Host` header when present (unreadable bytes yield `None`); the URI
/// authority only when the header is absent.
fn request_host(req: &Request<Body>) -> Option<&str> {
    match req.headers().get(header::HOST) {
        Some(value) => value.to_str().ok(),
        None => req.uri().authority().map(|a| a.as_str()),
    }
}

/// Apply the host allow-list to every route of the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    let policy = Arc::new(HostPolicy::new(&config.allowed_hosts));
    router.layer(middleware::from_fn_with_state(policy, trusted_host_middleware))
}

async fn trusted_host_middleware(
    State(policy): State<Arc<HostPolicy>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let allowed = request_host(&req).is_some_and(|host| policy.is_allowed(host));

    if !allowed {
        tracing::warn!(
            host = request_host(&req).unwrap_or("<missing>"),
            method = %req.method(),
            path = req.uri().path(),
            "rejected request with untrusted host"
        );
        return Err(AppError::InvalidHost);
    }

    Ok(next.run(req).await)
}
