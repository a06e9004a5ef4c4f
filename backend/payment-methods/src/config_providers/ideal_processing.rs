use common_enums::ConfigField;
use domain_types::{
    checkout_config::{CheckoutConfig, MethodCheckoutConfig},
    issuers::{Issuer, IDEAL_ISSUERS},
    types::{PaymentMethodEnum, StoreId},
};
use interfaces::config_provider::{CheckoutConfigProvider, MethodConfigProvider, ProviderContext};

#[derive(Clone, Debug)]
pub struct IdealProcessingConfig {
    context: ProviderContext,
}

impl IdealProcessingConfig {
    pub fn new(context: ProviderContext) -> Self {
        Self { context }
    }
}

impl MethodConfigProvider for IdealProcessingConfig {
    fn method(&self) -> PaymentMethodEnum {
        PaymentMethodEnum::IdealProcessing
    }

    fn context(&self) -> &ProviderContext {
        &self.context
    }

    fn default_allowed_currencies(&self) -> Option<&'static [&'static str]> {
        Some(&["EUR"])
    }

    fn get_issuers(&self) -> &'static [Issuer] {
        IDEAL_ISSUERS
    }
}

impl CheckoutConfigProvider for IdealProcessingConfig {
    fn get_config(&self, store: Option<&StoreId>) -> CheckoutConfig {
        if !self.is_active(store) {
            return CheckoutConfig::default();
        }

        CheckoutConfig::for_method(
            self.method().to_string(),
            MethodCheckoutConfig {
                payment_fee_label: self.get_payment_fee_label(store),
                allowed_currencies: self.get_allowed_currencies(store),
                banks: Some(self.format_issuers()),
                selection_type: self.get_config_from_xpath(ConfigField::SelectionType, store),
            },
        )
    }
}
