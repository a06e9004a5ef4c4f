//! Ready-made implementations of the host services, for hosts that keep their configuration in
//! memory and for tests.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use common_enums::{ConfigField, TransactionType};
use common_utils::consts::{DEFAULT_PAYMENT_FEE_LABEL, PAYMENT_CONFIG_SECTION};
use domain_types::{transaction::TransactionBuilder, types::StoreId};
use interfaces::host::{
    AllowedCurrencies, AssetRepository, PaymentFeeHelper, PaymentGroupTransaction, ScopeConfig,
    TransactionBuilderFactory,
};
use rust_decimal::Decimal;

/// Configuration of the default scope with per-store overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct InMemoryScopeConfig {
    #[serde(default)]
    pub default: BTreeMap<String, String>,
    #[serde(default)]
    pub stores: BTreeMap<StoreId, BTreeMap<String, String>>,
}

impl InMemoryScopeConfig {
    pub fn with_default(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.default.insert(path.into(), value.into());
        self
    }

    pub fn with_store_value(
        mut self,
        store: StoreId,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.stores
            .entry(store)
            .or_default()
            .insert(path.into(), value.into());
        self
    }
}

impl ScopeConfig for InMemoryScopeConfig {
    fn get_value(&self, path: &str, store: Option<&StoreId>) -> Option<String> {
        store
            .and_then(|store| self.stores.get(store))
            .and_then(|values| values.get(path))
            .or_else(|| self.default.get(path))
            .cloned()
    }
}

/// Serves assets from `<base_url>/<Module>/<path>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticAssetRepository {
    base_url: String,
}

impl StaticAssetRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl AssetRepository for StaticAssetRepository {
    fn get_url(&self, asset_id: &str) -> String {
        match asset_id.split_once("::") {
            Some((module, path)) => format!("{}/{module}/{path}", self.base_url),
            None => format!("{}/{asset_id}", self.base_url),
        }
    }
}

/// Reads `payment/<method>/payment_fee_label`, then the store wide label, then a fixed default.
#[derive(Clone)]
pub struct ScopeConfigFeeLabel {
    scope_config: Arc<dyn ScopeConfig>,
    default_label: String,
}

/// Store wide fee label path
pub const GENERAL_PAYMENT_FEE_LABEL_PATH: &str = "buckaroo_magento2/account/payment_fee_label";

impl ScopeConfigFeeLabel {
    pub fn new(scope_config: Arc<dyn ScopeConfig>) -> Self {
        Self {
            scope_config,
            default_label: DEFAULT_PAYMENT_FEE_LABEL.to_owned(),
        }
    }

    pub fn with_default_label(mut self, default_label: impl Into<String>) -> Self {
        self.default_label = default_label.into();
        self
    }
}

impl PaymentFeeHelper for ScopeConfigFeeLabel {
    fn get_payment_fee_label(&self, method_code: &str, store: Option<&StoreId>) -> String {
        let method_path = format!(
            "{PAYMENT_CONFIG_SECTION}/{method_code}/{}",
            ConfigField::PaymentFeeLabel.as_ref()
        );
        [method_path.as_str(), GENERAL_PAYMENT_FEE_LABEL_PATH]
            .into_iter()
            .filter_map(|path| self.scope_config.get_value(path, store))
            .map(|label| label.trim().to_owned())
            .find(|label| !label.is_empty())
            .unwrap_or_else(|| self.default_label.clone())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticAllowedCurrencies(pub Vec<String>);

impl AllowedCurrencies for StaticAllowedCurrencies {
    fn get_allowed_currencies(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Known partial payments, keyed by order increment id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryPaymentGroups {
    groups: HashMap<String, PaymentGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PaymentGroup {
    already_paid: Decimal,
    original_transaction_key: Option<String>,
}

impl InMemoryPaymentGroups {
    pub fn with_group(
        mut self,
        order_id: impl Into<String>,
        already_paid: Decimal,
        original_transaction_key: Option<String>,
    ) -> Self {
        self.groups.insert(
            order_id.into(),
            PaymentGroup {
                already_paid,
                original_transaction_key,
            },
        );
        self
    }
}

impl PaymentGroupTransaction for InMemoryPaymentGroups {
    fn get_already_paid(&self, order_id: &str) -> Decimal {
        self.groups
            .get(order_id)
            .map_or(Decimal::ZERO, |group| group.already_paid)
    }

    fn get_group_transaction_original_transaction_key(&self, order_id: &str) -> Option<String> {
        self.groups
            .get(order_id)
            .and_then(|group| group.original_transaction_key.clone())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTransactionBuilderFactory;

impl TransactionBuilderFactory for DefaultTransactionBuilderFactory {
    fn get(&self, transaction_type: TransactionType) -> TransactionBuilder {
        TransactionBuilder::new(transaction_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_values_override_default_scope() {
        let store = StoreId::from("nl");
        let config = InMemoryScopeConfig::default()
            .with_default("payment/buckaroo_magento2_p24/active", "1")
            .with_store_value(store.clone(), "payment/buckaroo_magento2_p24/active", "0");

        assert_eq!(
            config.get_value("payment/buckaroo_magento2_p24/active", None).as_deref(),
            Some("1")
        );
        assert_eq!(
            config
                .get_value("payment/buckaroo_magento2_p24/active", Some(&store))
                .as_deref(),
            Some("0")
        );
        assert_eq!(
            config
                .get_value("payment/buckaroo_magento2_p24/active", Some(&StoreId::from("pl")))
                .as_deref(),
            Some("1")
        );
    }

    #[test]
    fn asset_ids_resolve_under_module_directory() {
        let assets = StaticAssetRepository::new("https://shop.example/static/");
        assert_eq!(
            assets.get_url("Buckaroo_Magento2::images/ico-INGBNL2A.png"),
            "https://shop.example/static/Buckaroo_Magento2/images/ico-INGBNL2A.png"
        );
    }

    #[test]
    fn fee_label_falls_back_through_scopes() {
        let config = Arc::new(
            InMemoryScopeConfig::default()
                .with_default("payment/buckaroo_magento2_p24/payment_fee_label", " ")
                .with_default(GENERAL_PAYMENT_FEE_LABEL_PATH, "Transaction costs"),
        );
        let helper = ScopeConfigFeeLabel::new(config);
        assert_eq!(
            helper.get_payment_fee_label("buckaroo_magento2_p24", None),
            "Transaction costs"
        );

        let helper = ScopeConfigFeeLabel::new(Arc::new(InMemoryScopeConfig::default()))
            .with_default_label("Toeslag");
        assert_eq!(
            helper.get_payment_fee_label("buckaroo_magento2_idealprocessing", None),
            "Toeslag"
        );
    }

    #[test]
    fn unknown_orders_have_nothing_paid() {
        let groups = InMemoryPaymentGroups::default().with_group(
            "100000001",
            Decimal::new(1000, 2),
            Some("KEY123".to_string()),
        );
        assert_eq!(groups.get_already_paid("100000002"), Decimal::ZERO);
        assert_eq!(groups.get_already_paid("100000001"), Decimal::new(1000, 2));
        assert_eq!(
            groups
                .get_group_transaction_original_transaction_key("100000001")
                .as_deref(),
            Some("KEY123")
        );
    }
}
