use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use domain_types::{checkout_config::CheckoutConfig, types::StoreId};
use interfaces::config_provider::ProviderContext;
use payment_methods::types::get_checkout_config;

use crate::logger;

#[derive(Clone, Debug)]
pub struct Checkout {
    pub provider_context: ProviderContext,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct CheckoutConfigQuery {
    pub store: Option<StoreId>,
}

pub fn checkout_service_handler(service: Checkout) -> Router {
    Router::new()
        .route("/checkout/config", get(checkout_config))
        .with_state(service)
}

#[logger::instrument(skip_all)]
async fn checkout_config(
    State(service): State<Checkout>,
    Query(query): Query<CheckoutConfigQuery>,
) -> Json<CheckoutConfig> {
    let config = get_checkout_config(&service.provider_context, query.store.as_ref());
    logger::debug!(store = ?query.store, empty = config.is_empty(), "checkout config rendered");
    Json(config)
}
