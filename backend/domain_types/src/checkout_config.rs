//! Configuration object rendered into the storefront checkout.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::issuers::FormattedIssuer;

/// Settings of one payment method as the checkout front end reads them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCheckoutConfig {
    pub payment_fee_label: String,
    pub allowed_currencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banks: Option<Vec<FormattedIssuer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaymentSection {
    pub buckaroo: BTreeMap<String, MethodCheckoutConfig>,
}

/// `{ payment: { buckaroo: { <method>: {...} } } }`; empty for inactive methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CheckoutConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentSection>,
}

impl CheckoutConfig {
    pub fn for_method(gateway_code: impl Into<String>, config: MethodCheckoutConfig) -> Self {
        Self {
            payment: Some(PaymentSection {
                buckaroo: BTreeMap::from([(gateway_code.into(), config)]),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.payment
            .as_ref()
            .map_or(true, |section| section.buckaroo.is_empty())
    }

    pub fn get_method(&self, gateway_code: &str) -> Option<&MethodCheckoutConfig> {
        self.payment
            .as_ref()
            .and_then(|section| section.buckaroo.get(gateway_code))
    }

    /// Merges the methods of `other` into `self`; later providers win on duplicate codes.
    pub fn merge(&mut self, other: Self) {
        let Some(other_section) = other.payment else {
            return;
        };
        self.payment
            .get_or_insert_with(PaymentSection::default)
            .buckaroo
            .extend(other_section.buckaroo);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_config_serializes_to_empty_object() {
        let config = CheckoutConfig::default();
        assert!(config.is_empty());
        assert_eq!(serde_json::to_value(&config).ok(), Some(json!({})));
    }

    #[test]
    fn merge_collects_methods() {
        let mut config = CheckoutConfig::default();
        config.merge(CheckoutConfig::for_method(
            "p24",
            MethodCheckoutConfig {
                payment_fee_label: "Fee".to_string(),
                allowed_currencies: vec!["PLN".to_string()],
                ..Default::default()
            },
        ));
        config.merge(CheckoutConfig::default());

        assert!(!config.is_empty());
        assert_eq!(
            serde_json::to_value(&config).ok(),
            Some(json!({
                "payment": {
                    "buckaroo": {
                        "p24": { "paymentFeeLabel": "Fee", "allowedCurrencies": ["PLN"] }
                    }
                }
            }))
        );
    }
}
