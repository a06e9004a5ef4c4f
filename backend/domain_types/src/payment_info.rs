use std::collections::BTreeMap;

use common_utils::ext_traits::ValueExt;
use serde_json::Value;

use crate::{
    order::Order,
    payment_address::BillingAddress,
    utils::{missing_field_err, Error},
};

/// Key/value store attached to a payment instance.
pub type AdditionalInformation = BTreeMap<String, Value>;

/// Payment instance of a quote or an order.
///
/// `assign_data` writes into the additional information, validation and request building read
/// from it. Request building may write flags back for the push handler.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PaymentInfo {
    pub method: String,
    #[serde(default)]
    additional_information: AdditionalInformation,
    /// Present once the quote has been converted into an order
    #[serde(default)]
    pub order: Option<Order>,
    /// Billing address of the quote, used before an order exists
    #[serde(default)]
    pub billing_address: Option<BillingAddress>,
}

impl PaymentInfo {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_billing_address(mut self, billing_address: BillingAddress) -> Self {
        self.billing_address = Some(billing_address);
        self
    }

    pub fn get_additional_information(&self, key: &str) -> Option<&Value> {
        self.additional_information.get(key)
    }

    pub fn set_additional_information(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.additional_information.insert(key.into(), value.into());
    }

    pub fn additional_information(&self) -> &AdditionalInformation {
        &self.additional_information
    }

    /// Stored value as a string, for scalar entries only.
    pub fn get_additional_string(&self, key: &str) -> Option<String> {
        self.get_additional_information(key)
            .and_then(ValueExt::as_plain_string)
    }

    pub fn is_flag_set(&self, key: &str) -> bool {
        self.get_additional_information(key)
            .is_some_and(ValueExt::is_truthy)
    }

    pub fn get_order(&self) -> Result<&Order, Error> {
        self.order.as_ref().ok_or_else(missing_field_err("order"))
    }

    /// Billing address of the order, falling back to the quote's.
    pub fn get_optional_billing_address(&self) -> Option<&BillingAddress> {
        self.order
            .as_ref()
            .and_then(|order| order.billing_address.as_ref())
            .or(self.billing_address.as_ref())
    }
}

/// Data the storefront submits together with the selected payment method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SubmittedPaymentData {
    #[serde(default)]
    pub additional_data: serde_json::Map<String, Value>,
}

impl SubmittedPaymentData {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.additional_data.get(key)
    }
}

impl From<serde_json::Map<String, Value>> for SubmittedPaymentData {
    fn from(additional_data: serde_json::Map<String, Value>) -> Self {
        Self { additional_data }
    }
}
