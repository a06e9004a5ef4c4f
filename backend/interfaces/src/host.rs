//! Services supplied by the host platform.

use common_enums::TransactionType;
use domain_types::{transaction::TransactionBuilder, types::StoreId};
use rust_decimal::Decimal;

/// Read-only scoped configuration, keyed by path.
pub trait ScopeConfig: Send + Sync {
    /// Value of `path` for `store`, falling back to the default scope.
    fn get_value(&self, path: &str, store: Option<&StoreId>) -> Option<String>;
}

/// Resolves static asset ids (`Module::path/file.png`) to public URLs.
pub trait AssetRepository: Send + Sync {
    fn get_url(&self, asset_id: &str) -> String;
}

pub trait PaymentFeeHelper: Send + Sync {
    /// Label shown next to the payment fee of `method_code`.
    fn get_payment_fee_label(&self, method_code: &str, store: Option<&StoreId>) -> String;
}

/// Currencies the gateway accepts when a method restricts nothing itself.
pub trait AllowedCurrencies: Send + Sync {
    fn get_allowed_currencies(&self) -> Vec<String>;
}

/// Earlier partial payments of an order (gift cards, vouchers).
pub trait PaymentGroupTransaction: Send + Sync {
    fn get_already_paid(&self, order_id: &str) -> Decimal;

    fn get_group_transaction_original_transaction_key(&self, order_id: &str) -> Option<String>;
}

pub trait TransactionBuilderFactory: Send + Sync {
    fn get(&self, transaction_type: TransactionType) -> TransactionBuilder;
}
