use axum::{routing::get, Router};

use crate::consts::HEALTH_RESPONSE;

pub fn health_service_handler() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> &'static str {
    tracing::debug!("health_check request");
    HEALTH_RESPONSE
}
