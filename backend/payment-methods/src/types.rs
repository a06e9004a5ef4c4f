use std::str::FromStr;

use domain_types::{
    checkout_config::CheckoutConfig,
    types::{PaymentMethodEnum, StoreId},
    utils::Error,
};
use interfaces::{
    api::{BoxedPaymentMethod, MethodContext},
    config_provider::{CheckoutConfigProvider, ProviderContext},
};
use strum::IntoEnumIterator;

use crate::{
    config_providers::{IdealProcessingConfig, P24Config},
    methods::{IdealProcessing, P24},
};

pub type BoxedConfigProvider = Box<dyn CheckoutConfigProvider>;

/// A payment method wired to the host services of the current request.
pub struct MethodData {
    pub method: BoxedPaymentMethod,
    pub method_name: PaymentMethodEnum,
}

impl std::fmt::Debug for MethodData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodData")
            .field("method_name", &self.method_name)
            .finish_non_exhaustive()
    }
}

impl MethodData {
    pub fn get_method_by_name(
        method_name: &PaymentMethodEnum,
        context: MethodContext,
        provider_context: ProviderContext,
    ) -> Self {
        Self {
            method: Self::convert_method(*method_name, context, provider_context),
            method_name: *method_name,
        }
    }

    /// Accepts the short gateway code as well as the full method code.
    pub fn get_method_by_code(
        code: &str,
        context: MethodContext,
        provider_context: ProviderContext,
    ) -> Result<Self, Error> {
        let method_name = PaymentMethodEnum::from_str(code)?;
        Ok(Self::get_method_by_name(&method_name, context, provider_context))
    }

    fn convert_method(
        method_name: PaymentMethodEnum,
        context: MethodContext,
        provider_context: ProviderContext,
    ) -> BoxedPaymentMethod {
        match method_name {
            PaymentMethodEnum::IdealProcessing => {
                Box::new(IdealProcessing::new(context, provider_context))
            }
            PaymentMethodEnum::P24 => Box::new(P24::new(context, provider_context)),
        }
    }
}

pub fn get_config_provider_by_name(
    method_name: PaymentMethodEnum,
    provider_context: ProviderContext,
) -> BoxedConfigProvider {
    match method_name {
        PaymentMethodEnum::IdealProcessing => {
            Box::new(IdealProcessingConfig::new(provider_context))
        }
        PaymentMethodEnum::P24 => Box::new(P24Config::new(provider_context)),
    }
}

/// Checkout configuration of every active method.
pub fn get_checkout_config(
    provider_context: &ProviderContext,
    store: Option<&StoreId>,
) -> CheckoutConfig {
    PaymentMethodEnum::iter()
        .map(|method_name| get_config_provider_by_name(method_name, provider_context.clone()))
        .fold(CheckoutConfig::default(), |mut config, provider| {
            config.merge(provider.get_config(store));
            config
        })
}

#[cfg(test)]
mod tests {
    use domain_types::errors::PaymentMethodError;

    use super::*;
    use crate::{
        helpers::{InMemoryPaymentGroups, InMemoryScopeConfig},
        test_utils::{method_context, provider_context},
    };

    #[test]
    fn methods_resolve_by_short_and_full_code() {
        let context = provider_context(InMemoryScopeConfig::default());
        for code in ["p24", "buckaroo_magento2_p24"] {
            let method = MethodData::get_method_by_code(
                code,
                method_context(InMemoryPaymentGroups::default()),
                context.clone(),
            );
            assert_eq!(
                method.map(|data| data.method.code()).ok().as_deref(),
                Some("buckaroo_magento2_p24")
            );
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let error = MethodData::get_method_by_code(
            "klarna",
            method_context(InMemoryPaymentGroups::default()),
            provider_context(InMemoryScopeConfig::default()),
        )
        .err()
        .map(|report| report.current_context().clone());
        assert_eq!(
            error,
            Some(PaymentMethodError::UnknownPaymentMethod("klarna".to_string()))
        );
    }

    #[test]
    fn checkout_config_merges_active_methods() {
        let context = provider_context(
            InMemoryScopeConfig::default()
                .with_default("payment/buckaroo_magento2_idealprocessing/active", "1")
                .with_default("payment/buckaroo_magento2_p24/active", "0"),
        );
        let config = get_checkout_config(&context, None);
        assert!(config.get_method("idealprocessing").is_some());
        assert!(config.get_method("p24").is_none());

        let store = StoreId::from("pl");
        let context = provider_context(
            InMemoryScopeConfig::default()
                .with_default("payment/buckaroo_magento2_idealprocessing/active", "1")
                .with_store_value(store.clone(), "payment/buckaroo_magento2_p24/active", "1"),
        );
        let config = get_checkout_config(&context, Some(&store));
        assert!(config.get_method("idealprocessing").is_some());
        assert!(config.get_method("p24").is_some());
    }
}
