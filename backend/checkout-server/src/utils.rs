use common_utils::consts::{X_REQUEST_ID, X_STORE_ID};
use http::request::Request;

/// Record the header's fields in request's trace
pub fn record_fields_from_header<B: hyper::body::Body>(request: &Request<B>) -> tracing::Span {
    let url_path = request.uri().path();

    let span = tracing::debug_span!(
        "request",
        method = %request.method(),
        uri = %url_path,
        version = ?request.version(),
        store_id = tracing::field::Empty,
        request_id = tracing::field::Empty,
    );
    request
        .headers()
        .get(X_STORE_ID)
        .and_then(|value| value.to_str().ok())
        .map(|store_id| span.record("store_id", store_id));

    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(|request_id| span.record("request_id", request_id));

    span
}
