use std::time::Instant;

use axum::{extract::MatchedPath, extract::Request, middleware::Next, response::Response};
use error_stack::ResultExt;
use lazy_static::lazy_static;
use prometheus::{
    self, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

// Define latency buckets for histograms
const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

lazy_static! {
    pub static ref HTTP_SERVER_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "HTTP_SERVER_REQUESTS_TOTAL",
        "Total number of HTTP requests received",
        &["method", "path", "status"]
    )
    .unwrap();
    pub static ref HTTP_SERVER_REQUEST_LATENCY: HistogramVec = register_histogram_vec!(
        "HTTP_SERVER_REQUEST_LATENCY",
        "Request latency in seconds",
        &["method", "path"],
        LATENCY_BUCKETS.to_vec()
    )
    .unwrap();
    pub static ref TRANSACTION_REQUESTS_BUILT: IntCounterVec = register_int_counter_vec!(
        "TRANSACTION_REQUESTS_BUILT",
        "Total number of transaction requests handed out for dispatch",
        &["payment_method", "transaction_type"]
    )
    .unwrap();
    pub static ref PAYMENT_VALIDATION_FAILURES: IntCounterVec = register_int_counter_vec!(
        "PAYMENT_VALIDATION_FAILURES",
        "Total number of rejected payment method submissions",
        &["payment_method"]
    )
    .unwrap();
}

/// Counts requests and records their latency, labelled by route template.
pub async fn track_http_metrics(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_owned(), |path| path.as_str().to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    HTTP_SERVER_REQUEST_LATENCY
        .with_label_values(&[method.as_str(), path.as_str()])
        .observe(start.elapsed().as_secs_f64());
    HTTP_SERVER_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), path.as_str(), response.status().as_str()])
        .inc();

    response
}

pub async fn metrics_handler() -> error_stack::Result<String, MetricsError> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .change_context(MetricsError::EncodingError)?;
    String::from_utf8(buffer).change_context(MetricsError::Utf8Error)
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Error encoding metrics")]
    EncodingError,
    #[error("Error converting metrics to utf8")]
    Utf8Error,
}
