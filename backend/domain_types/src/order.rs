use rust_decimal::Decimal;

use crate::payment_address::BillingAddress;

/// The part of a host order the payment methods read.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Order {
    /// Merchant facing order number, sent to the gateway as the invoice number
    pub increment_id: String,
    pub grand_total: Decimal,
    /// ISO 4217 currency code of `grand_total`
    pub currency: String,
    #[serde(default)]
    pub billing_address: Option<BillingAddress>,
}
