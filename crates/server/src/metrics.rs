use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter, Encoder, Histogram, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "legal_catalog_http_requests_total",
        "Total HTTP requests handled"
    )
    .expect("register http_requests_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "legal_catalog_request_duration_seconds",
        "Request duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register request_duration")
});

pub static CATEGORY_RENAMES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "legal_catalog_category_renames_total",
        "Successful category renames"
    )
    .expect("register category_renames_total")
});

pub static CATEGORY_DELETES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "legal_catalog_category_deletes_total",
        "Successful category deletions"
    )
    .expect("register category_deletes_total")
});

pub static CATEGORY_CONFLICTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "legal_catalog_category_conflicts_total",
        "Category renames or deletes rejected with 409 Conflict"
    )
    .expect("register category_conflicts_total")
});

/// Count and time every request.
pub async fn track(req: Request, next: Next) -> Response {
    HTTP_REQUESTS_TOTAL.inc();
    let timer = REQUEST_DURATION.start_timer();
    let res = next.run(req).await;
    timer.observe_duration();
    res
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    encode_metrics()
}
