//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Warn when the static site directory is missing; returns whether it exists.
pub async fn ensure_env(static_dir: &str) -> bool {
    common::env::ensure_env(static_dir).await
}
