use std::sync::Arc;

use domain_types::{order::Order, payment_address::BillingAddress};
use hyperswitch_masking::Secret;
use interfaces::{api::MethodContext, config_provider::ProviderContext};
use rust_decimal::Decimal;

use crate::helpers::{
    DefaultTransactionBuilderFactory, InMemoryPaymentGroups, InMemoryScopeConfig,
    ScopeConfigFeeLabel, StaticAllowedCurrencies, StaticAssetRepository,
};

pub const ASSET_BASE_URL: &str = "https://shop.example/static";

pub fn provider_context(scope_config: InMemoryScopeConfig) -> ProviderContext {
    let scope_config = Arc::new(scope_config);
    ProviderContext {
        payment_fee_helper: Arc::new(ScopeConfigFeeLabel::new(scope_config.clone())),
        scope_config,
        asset_repository: Arc::new(StaticAssetRepository::new(ASSET_BASE_URL)),
        allowed_currencies: Arc::new(StaticAllowedCurrencies(vec![
            "EUR".to_string(),
            "USD".to_string(),
            "PLN".to_string(),
        ])),
    }
}

pub fn method_context(payment_groups: InMemoryPaymentGroups) -> MethodContext {
    MethodContext {
        transaction_builder_factory: Arc::new(DefaultTransactionBuilderFactory),
        payment_group_transaction: Arc::new(payment_groups),
    }
}

pub fn order(increment_id: &str, grand_total: Decimal, currency: &str) -> Order {
    Order {
        increment_id: increment_id.to_string(),
        grand_total,
        currency: currency.to_string(),
        billing_address: None,
    }
}

pub fn billing_address(country_id: &str) -> BillingAddress {
    BillingAddress {
        email: "jan.kowalski@example.pl".parse().ok(),
        firstname: Some(Secret::new("Jan".to_string())),
        lastname: Some(Secret::new("Kowalski".to_string())),
        country_id: Some(country_id.to_string()),
    }
}
