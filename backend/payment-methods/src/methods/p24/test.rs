#[cfg(test)]
mod tests {
    use common_enums::{TransactionMethod, TransactionType};
    use domain_types::{
        errors::PaymentMethodError,
        payment_address::BillingAddress,
        payment_info::{PaymentInfo, SubmittedPaymentData},
        transaction::{BuilderOutcome, TransactionBuilder},
        types::StoreId,
    };
    use interfaces::{
        api::PaymentMethod,
        config_provider::{CheckoutConfigProvider, MethodConfigProvider},
    };
    use rust_decimal::Decimal;
    use serde_json::json;

    use crate::{
        config_providers::P24Config,
        helpers::{InMemoryPaymentGroups, InMemoryScopeConfig},
        methods::P24,
        test_utils::{billing_address, method_context, order, provider_context},
    };

    const METHOD_PATH: &str = "payment/buckaroo_magento2_p24";

    fn p24() -> P24 {
        P24::new(
            method_context(InMemoryPaymentGroups::default()),
            provider_context(InMemoryScopeConfig::default()),
        )
    }

    fn payment_with_address(address: BillingAddress) -> PaymentInfo {
        let mut order = order("200000001", Decimal::new(12999, 2), "PLN");
        order.billing_address = Some(address);
        PaymentInfo::new("buckaroo_magento2_p24").with_order(order)
    }

    fn ready_builder(outcome: BuilderOutcome) -> TransactionBuilder {
        match outcome {
            BuilderOutcome::Ready(builder) => *builder,
            other => panic!("expected a ready builder, got {other:?}"),
        }
    }

    #[test]
    fn test_method_identity() {
        let method = p24();
        assert_eq!(method.code(), "buckaroo_magento2_p24");
        assert_eq!(method.gateway_code(), "p24");
        assert_eq!(
            method.payment_method_name(&PaymentInfo::default()),
            "Przelewy24"
        );
        assert!(method.can_refund());
    }

    #[test]
    fn test_assign_data_stores_nothing() {
        let method = p24();
        let mut payment = PaymentInfo::new("buckaroo_magento2_p24");
        let data: SubmittedPaymentData = match json!({ "issuer": "INGBNL2A" }) {
            serde_json::Value::Object(map) => map.into(),
            _ => SubmittedPaymentData::default(),
        };

        assert!(method.assign_data(&mut payment, &data).is_ok());
        assert!(payment.additional_information().is_empty());
        assert!(method.validate(&payment, None).is_ok());
    }

    #[test]
    fn test_order_transaction_builder() {
        let method = p24();
        let mut payment = payment_with_address(billing_address("PL"));

        let builder = match method.get_order_transaction_builder(&mut payment) {
            Ok(outcome) => ready_builder(outcome),
            Err(error) => panic!("order builder failed: {error:?}"),
        };

        assert_eq!(builder.transaction_type(), TransactionType::Order);
        assert_eq!(builder.method(), TransactionMethod::TransactionRequest);
        assert_eq!(
            serde_json::to_value(builder.services()).ok(),
            Some(json!({
                "Name": "Przelewy24",
                "Action": "Pay",
                "Version": 1,
                "RequestParameter": [
                    { "_": "jan.kowalski@example.pl", "Name": "CustomerEmail" },
                    { "_": "Jan", "Name": "CustomerFirstName" },
                    { "_": "Kowalski", "Name": "CustomerLastName" }
                ]
            }))
        );
        assert_eq!(
            payment.get_additional_information("skip_push"),
            Some(&json!(1))
        );
    }

    #[test]
    fn test_order_requires_billing_details() {
        let method = p24();
        let mut payment = payment_with_address(BillingAddress {
            email: None,
            ..billing_address("PL")
        });

        let error = method
            .get_order_transaction_builder(&mut payment)
            .err()
            .map(|report| report.current_context().clone());
        assert_eq!(
            error,
            Some(PaymentMethodError::MissingRequiredField {
                field_name: "billing_address.email"
            })
        );
        assert!(payment.get_additional_information("skip_push").is_none());
    }

    #[test]
    fn test_order_requires_billing_address() {
        let method = p24();
        let mut payment = PaymentInfo::new("buckaroo_magento2_p24").with_order(order(
            "200000002",
            Decimal::new(5000, 2),
            "PLN",
        ));

        let error = method
            .get_order_transaction_builder(&mut payment)
            .err()
            .map(|report| report.current_context().clone());
        assert_eq!(
            error,
            Some(PaymentMethodError::MissingRequiredField {
                field_name: "billing_address"
            })
        );
    }

    #[test]
    fn test_secondary_operations() {
        let method = p24();
        let mut payment = payment_with_address(billing_address("PL"));

        assert_eq!(
            method.get_capture_transaction_builder(&mut payment).ok(),
            Some(BuilderOutcome::Unsupported)
        );
        assert_eq!(
            method.get_authorize_transaction_builder(&mut payment).ok(),
            Some(BuilderOutcome::Unsupported)
        );
        assert_eq!(
            method.get_void_transaction_builder(&mut payment).ok(),
            Some(BuilderOutcome::Completed)
        );
        assert!(payment.get_additional_information("skip_push").is_none());
    }

    #[test]
    fn test_default_currency_is_zloty() {
        let provider = P24Config::new(provider_context(InMemoryScopeConfig::default()));
        assert_eq!(provider.get_allowed_currencies(None), vec!["PLN".to_string()]);
        assert!(provider.get_issuers().is_empty());
    }

    #[test]
    fn test_checkout_config() {
        let provider = P24Config::new(provider_context(
            InMemoryScopeConfig::default().with_default(format!("{METHOD_PATH}/active"), "1"),
        ));

        assert_eq!(
            serde_json::to_value(provider.get_config(None)).ok(),
            Some(json!({
                "payment": {
                    "buckaroo": {
                        "p24": { "paymentFeeLabel": "Fee", "allowedCurrencies": ["PLN"] }
                    }
                }
            }))
        );
    }

    #[test]
    fn test_customer_group_restrictions() {
        let store = StoreId::from("pl");
        let config = InMemoryScopeConfig::default()
            .with_default(format!("{METHOD_PATH}/specificcustomergroup"), "0,1")
            .with_store_value(
                store.clone(),
                format!("{METHOD_PATH}/specificcustomergroupb2b"),
                "2",
            );
        let provider = P24Config::new(provider_context(config));

        assert_eq!(
            provider.get_specific_customer_group(None).as_deref(),
            Some("0,1")
        );
        assert_eq!(provider.get_specific_customer_group_b2b(None), None);
        assert_eq!(
            provider.get_specific_customer_group(Some(&store)).as_deref(),
            Some("0,1")
        );
        assert_eq!(
            provider.get_specific_customer_group_b2b(Some(&store)).as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_country_restrictions() {
        let store = StoreId::from("pl");
        let config = InMemoryScopeConfig::default()
            .with_store_value(store.clone(), format!("{METHOD_PATH}/allowspecific"), "1")
            .with_store_value(store.clone(), format!("{METHOD_PATH}/specificcountry"), "PL,CZ");
        let provider = P24Config::new(provider_context(config));

        assert_eq!(provider.get_allow_specific(None), None);
        assert!(provider.get_specific_country(None).is_empty());
        assert_eq!(provider.get_allow_specific(Some(&store)).as_deref(), Some("1"));
        assert_eq!(provider.get_specific_country(Some(&store)), vec!["PL", "CZ"]);
        assert_eq!(provider.get_base_allowed_countries(), None);
    }
}
