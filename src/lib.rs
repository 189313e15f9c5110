/*
 * Responsibility
 * - モジュール構成の公開 (main.rs と tests/ から共有)
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod shutdown;
pub mod state;
