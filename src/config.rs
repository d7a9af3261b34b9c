/*
 * Responsibility
 * - 環境変数 (.env を含む) から起動時に一度だけ設定を読み込む
 * - 設定値のバリデーション (不正なら起動失敗)
 * - 読み込み後は不変。Arc<Config> として router / middleware に渡す
 */
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::middleware::trusted_host::subdomain_suffix;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_ALLOWED_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0"];
const DEFAULT_CORS_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_REQUEST_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Identity of the running service, as published by `/`, `/health` and the
/// OpenAPI document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMeta {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

impl ServiceMeta {
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            title: "Compliance AI Services",
            description: env!("CARGO_PKG_DESCRIPTION"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub service: ServiceMeta,

    // Host header patterns; see middleware::trusted_host
    pub allowed_hosts: Vec<String>,
    pub cors_allowed_origins: Vec<String>,

    pub request_timeout: Duration,
    pub request_body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            app_env: AppEnv::Development,
            service: ServiceMeta::current(),
            allowed_hosts: to_strings(DEFAULT_ALLOWED_HOSTS),
            cors_allowed_origins: to_strings(DEFAULT_CORS_ALLOWED_ORIGINS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            request_body_limit: DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; the process environment still applies.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = lookup("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid("HOST"))?;

        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let allowed_hosts =
            split_list(lookup("ALLOWED_HOSTS")).unwrap_or_else(|| to_strings(DEFAULT_ALLOWED_HOSTS));

        if allowed_hosts
            .iter()
            .any(|h| h.contains('*') && h != "*" && subdomain_suffix(h).is_none())
        {
            return Err(ConfigError::Invalid("ALLOWED_HOSTS"));
        }

        let cors_allowed_origins = split_list(lookup("CORS_ALLOWED_ORIGINS"))
            .unwrap_or_else(|| to_strings(DEFAULT_CORS_ALLOWED_ORIGINS));

        // Credentialed CORS cannot use a wildcard origin, and every entry must be
        // usable as a header value.
        if cors_allowed_origins
            .iter()
            .any(|o| o == "*" || HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::Invalid("CORS_ALLOWED_ORIGINS"));
        }

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        let request_body_limit = match lookup("REQUEST_BODY_LIMIT_BYTES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"))?,
            None => DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            app_env,
            service: ServiceMeta::current(),
            allowed_hosts,
            cors_allowed_origins,
            request_timeout: Duration::from_secs(request_timeout_seconds),
            request_body_limit,
        })
    }
}

/// Comma-separated list; `None` when unset or empty after trimming.
fn split_list(raw: Option<String>) -> Option<Vec<String>> {
    let items = raw?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    (!items.is_empty()).then_some(items)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
