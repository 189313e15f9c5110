//! System endpoints used by infrastructure rather than API clients.
//!
//! Responsibility:
//! - GET /health (liveness probe)
//! - The request is never inspected; the response is always `200 OK` with an empty body.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Stateless handler for process-level endpoints.
///
/// Built once at startup and shared through `AppState`; holds nothing, so any
/// number of concurrent requests can use the same instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemHandler;

impl SystemHandler {
    pub fn new() -> Self {
        Self
    }

    /// Liveness check. Cannot fail and has no side effects.
    pub fn health(&self) -> StatusCode {
        StatusCode::OK
    }
}

pub async fn health(State(state): State<AppState>) -> StatusCode {
    state.system.health()
}
