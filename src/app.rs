/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → Router 組み立て
 * - Middleware の適用順: http (最外) → trusted_host → cors → handler
 * - axum::serve() で起動、シグナルで graceful shutdown
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, shutdown, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise log at info.
    // Ex:
    // RUST_LOG=info,compliance_ai_services=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so it is noticed immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();

    let config = Arc::new(Config::from_env().context("failed to load configuration")?);
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        service = config.service.name,
        version = config.service.version,
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );
    tracing::info!(
        allowed_hosts = ?config.allowed_hosts,
        cors_allowed_origins = ?config.cors_allowed_origins,
        "request policies loaded"
    );
    if !config.app_env.is_production() {
        tracing::info!("auto-reload is external: run `cargo watch -x run` while developing");
    }

    let app = build_router(config.clone());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

pub fn build_router(config: Arc<Config>) -> Router {
    let state = AppState::new(config.clone());

    let router = api::routes(&config.service).with_state(state);

    // Later layers wrap earlier ones: trusted_host runs before cors.
    let router = middleware::cors::apply(router, &config);
    let router = middleware::trusted_host::apply(router, &config);
    middleware::http::apply(router, &config)
}
