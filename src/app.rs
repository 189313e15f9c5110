/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (trace / timeout / body limit)
 * - axum::serve() で起動 (graceful shutdown 付き)
 */
use std::{any::Any, panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api::{self, handlers::system::SystemHandler},
    config::Config,
    error, middleware, shutdown,
    state::AppState,
};

const DEFAULT_LOG_DIRECTIVES: &str = "info,system_health=info,tower_http=info";

/// `RUST_LOG` wins when it is set and non-empty.
fn log_directives(rust_log: Option<String>) -> String {
    rust_log
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVES.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::new(log_directives(std::env::var("RUST_LOG").ok()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(
            payload = panic_message(info.payload()),
            %location,
            "handler panicked"
        );

        // Development aborts; production falls through to the default hook and keeps serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new(SystemHandler::new());
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .merge(api::routes())
        .fallback(error::not_found)
        .with_state(state);

    middleware::http::apply(router, config)
}
