//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the static site directory is missing; the API still serves.
pub async fn ensure_env(static_dir: &str) -> bool {
    let present = tokio::fs::metadata(static_dir).await.map(|m| m.is_dir()).unwrap_or(false);
    if !present {
        warn!(%static_dir, "static assets directory not found; marketing pages will 404");
    }
    present
}
