/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: system: SystemHandler
 * - Clone 前提で持つ (中身は stateless)
 */
use crate::api::handlers::system::SystemHandler;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub system: SystemHandler,
}

impl AppState {
    pub fn new(system: SystemHandler) -> Self {
        Self { system }
    }
}
