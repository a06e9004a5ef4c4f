use std::sync::Arc;

use common_enums::ConfigField;
use common_utils::{
    consts::{ASSET_MODULE, PAYMENT_CONFIG_SECTION},
    ext_traits::ConfigValueExt,
};
use domain_types::{
    checkout_config::CheckoutConfig,
    issuers::{FormattedIssuer, Issuer},
    types::{PaymentMethodEnum, StoreId},
};
use rust_decimal::Decimal;

use crate::host::{AllowedCurrencies, AssetRepository, PaymentFeeHelper, ScopeConfig};

/// Host services every config provider reads from.
#[derive(Clone)]
pub struct ProviderContext {
    pub scope_config: Arc<dyn ScopeConfig>,
    pub asset_repository: Arc<dyn AssetRepository>,
    pub payment_fee_helper: Arc<dyn PaymentFeeHelper>,
    pub allowed_currencies: Arc<dyn AllowedCurrencies>,
}

impl std::fmt::Debug for ProviderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderContext").finish_non_exhaustive()
    }
}

/// Exposes the configuration of one payment method.
///
/// Implementors pick the method and, optionally, its issuer catalog and default currencies; the
/// configuration paths and all readers are shared.
pub trait MethodConfigProvider: Send + Sync {
    fn method(&self) -> PaymentMethodEnum;

    fn context(&self) -> &ProviderContext;

    /// Currencies the method is limited to when nothing is configured.
    fn default_allowed_currencies(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Issuer catalog of the method, empty when the customer picks no bank.
    fn get_issuers(&self) -> &'static [Issuer] {
        &[]
    }

    fn xpath(&self, field: ConfigField) -> String {
        format!(
            "{PAYMENT_CONFIG_SECTION}/{}/{}",
            self.method().method_code(),
            field.as_ref()
        )
    }

    fn get_config_from_xpath(&self, field: ConfigField, store: Option<&StoreId>) -> Option<String> {
        let path = self.xpath(field);
        let value = self.context().scope_config.get_value(&path, store);
        tracing::debug!(path = %path, ?store, found = value.is_some(), "read scoped config");
        value
    }

    fn is_active(&self, store: Option<&StoreId>) -> bool {
        self.get_config_from_xpath(ConfigField::Active, store)
            .is_some_and(|active| active.is_truthy_flag())
    }

    fn get_allowed_currencies(&self, store: Option<&StoreId>) -> Vec<String> {
        let configured = self
            .get_config_from_xpath(ConfigField::AllowedCurrencies, store)
            .map(|currencies| currencies.split_list())
            .unwrap_or_default();

        if configured.is_empty() {
            self.get_base_allowed_currencies()
        } else {
            configured
        }
    }

    fn get_base_allowed_currencies(&self) -> Vec<String> {
        match self.default_allowed_currencies() {
            Some(currencies) => currencies.iter().map(|currency| (*currency).to_owned()).collect(),
            None => self.context().allowed_currencies.get_allowed_currencies(),
        }
    }

    /// No method restricts countries by default.
    fn get_base_allowed_countries(&self) -> Option<Vec<String>> {
        None
    }

    fn get_specific_country(&self, store: Option<&StoreId>) -> Vec<String> {
        self.get_config_from_xpath(ConfigField::SpecificCountry, store)
            .map(|countries| countries.split_list())
            .unwrap_or_default()
    }

    fn get_allow_specific(&self, store: Option<&StoreId>) -> Option<String> {
        self.get_config_from_xpath(ConfigField::AllowSpecific, store)
    }

    fn get_specific_customer_group(&self, store: Option<&StoreId>) -> Option<String> {
        self.get_config_from_xpath(ConfigField::SpecificCustomerGroup, store)
    }

    fn get_specific_customer_group_b2b(&self, store: Option<&StoreId>) -> Option<String> {
        self.get_config_from_xpath(ConfigField::SpecificCustomerGroupB2b, store)
    }

    fn format_issuers(&self) -> Vec<FormattedIssuer> {
        self.get_issuers()
            .iter()
            .map(|issuer| FormattedIssuer {
                name: issuer.name.to_owned(),
                code: issuer.code.to_owned(),
                img: self.get_image_url(&issuer.image_name()),
            })
            .collect()
    }

    fn get_image_url(&self, image_name: &str) -> String {
        self.context()
            .asset_repository
            .get_url(&format!("{ASSET_MODULE}::images/{image_name}.png"))
    }

    /// Configured fee, `None` when absent, unparsable or zero.
    fn get_payment_fee(&self, store: Option<&StoreId>) -> Option<Decimal> {
        let raw = self.get_config_from_xpath(ConfigField::PaymentFee, store)?;
        match raw.parse_decimal() {
            Ok(fee) if !fee.is_zero() => Some(fee),
            Ok(_) => None,
            Err(error) => {
                tracing::warn!(method = %self.method(), ?error, "ignoring unparsable payment fee");
                None
            }
        }
    }

    fn get_payment_fee_label(&self, store: Option<&StoreId>) -> String {
        self.context()
            .payment_fee_helper
            .get_payment_fee_label(&self.method().method_code(), store)
    }
}

/// Contributes a method's section to the storefront checkout configuration.
pub trait CheckoutConfigProvider: MethodConfigProvider {
    fn get_config(&self, store: Option<&StoreId>) -> CheckoutConfig;
}
