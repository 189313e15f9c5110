/*
 * Responsibility
 * - URL 構造を定義
 * - /health (liveness probe 用)
 */
use axum::{Router, routing::get};

use crate::api::handlers::system::health;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
