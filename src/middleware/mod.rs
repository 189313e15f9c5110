/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - pub fn http::apply(...)
 */
pub mod http;
