/*
 * Responsibility
 * - API 層の公開ポイント (routes() の re-export など)
 */
pub mod handlers;
mod routes;

pub use routes::routes;
