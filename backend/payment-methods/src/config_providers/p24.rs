use domain_types::{
    checkout_config::{CheckoutConfig, MethodCheckoutConfig},
    types::{PaymentMethodEnum, StoreId},
};
use interfaces::config_provider::{CheckoutConfigProvider, MethodConfigProvider, ProviderContext};

#[derive(Clone, Debug)]
pub struct P24Config {
    context: ProviderContext,
}

impl P24Config {
    pub fn new(context: ProviderContext) -> Self {
        Self { context }
    }
}

impl MethodConfigProvider for P24Config {
    fn method(&self) -> PaymentMethodEnum {
        PaymentMethodEnum::P24
    }

    fn context(&self) -> &ProviderContext {
        &self.context
    }

    /// Przelewy24 only settles in zloty.
    fn default_allowed_currencies(&self) -> Option<&'static [&'static str]> {
        Some(&["PLN"])
    }
}

impl CheckoutConfigProvider for P24Config {
    fn get_config(&self, store: Option<&StoreId>) -> CheckoutConfig {
        if !self.is_active(store) {
            return CheckoutConfig::default();
        }

        CheckoutConfig::for_method(
            self.method().to_string(),
            MethodCheckoutConfig {
                payment_fee_label: self.get_payment_fee_label(store),
                allowed_currencies: self.get_allowed_currencies(store),
                ..Default::default()
            },
        )
    }
}
