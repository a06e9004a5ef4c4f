//! The "services" payload sent to the gateway and the builder that carries it to the transport.

use common_enums::{PaymentAction, TransactionMethod, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    errors::PaymentMethodError,
    order::Order,
    utils::{missing_field_err, Error},
};

/// One named parameter of a gateway service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceParameter {
    #[serde(rename = "_")]
    pub value: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl ServiceParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// What the gateway should do for one payment service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Services {
    pub name: String,
    pub action: PaymentAction,
    pub version: u8,
    #[serde(rename = "RequestParameter")]
    pub request_parameters: Vec<ServiceParameter>,
}

/// Request handed to the gateway transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionRequest {
    pub method: TransactionMethod,
    #[serde(rename = "Type")]
    pub transaction_type: TransactionType,
    pub invoice: String,
    pub currency: String,
    pub amount_debit: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_transaction_key: Option<String>,
    pub services: Services,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OrderReference {
    invoice: String,
    currency: String,
    grand_total: Decimal,
}

/// Populated by a payment method, dispatched by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionBuilder {
    transaction_type: TransactionType,
    order: Option<OrderReference>,
    amount: Option<Decimal>,
    services: Option<Services>,
    method: TransactionMethod,
    original_transaction_key: Option<String>,
}

impl TransactionBuilder {
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            order: None,
            amount: None,
            services: None,
            method: TransactionMethod::default(),
            original_transaction_key: None,
        }
    }

    pub fn set_order(&mut self, order: &Order) -> &mut Self {
        self.order = Some(OrderReference {
            invoice: order.increment_id.clone(),
            currency: order.currency.clone(),
            grand_total: order.grand_total,
        });
        self
    }

    /// Overrides the order total, e.g. with the remainder of a partially paid order.
    pub fn set_amount(&mut self, amount: Decimal) -> &mut Self {
        self.amount = Some(amount);
        self
    }

    pub fn set_services(&mut self, services: Services) -> &mut Self {
        self.services = Some(services);
        self
    }

    pub fn set_method(&mut self, method: TransactionMethod) -> &mut Self {
        self.method = method;
        self
    }

    pub fn set_original_transaction_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.original_transaction_key = Some(key.into());
        self
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn services(&self) -> Option<&Services> {
        self.services.as_ref()
    }

    pub fn method(&self) -> TransactionMethod {
        self.method
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.amount
            .or_else(|| self.order.as_ref().map(|order| order.grand_total))
    }

    pub fn original_transaction_key(&self) -> Option<&str> {
        self.original_transaction_key.as_deref()
    }

    /// Fails when the order or the services (and with them the action) were never set, or when
    /// nothing is left to debit.
    pub fn build(&self) -> Result<TransactionRequest, Error> {
        let order = self.order.as_ref().ok_or_else(missing_field_err("order"))?;
        let services = self.services.clone().ok_or_else(|| {
            error_stack::report!(PaymentMethodError::RequestBuildFailed)
                .attach_printable("services were never set on the builder")
        })?;
        let amount_debit = self.amount.unwrap_or(order.grand_total);

        if amount_debit <= Decimal::ZERO {
            return Err(error_stack::report!(PaymentMethodError::NothingLeftToPay)
                .attach_printable(format!("amount to debit is {amount_debit}")));
        }

        Ok(TransactionRequest {
            method: self.method,
            transaction_type: self.transaction_type,
            invoice: order.invoice.clone(),
            currency: order.currency.clone(),
            amount_debit,
            original_transaction_key: self.original_transaction_key.clone(),
            services,
        })
    }
}

/// Result of asking a payment method for a transaction builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuilderOutcome {
    /// A populated builder the host must dispatch
    Ready(Box<TransactionBuilder>),
    /// The method does not support this operation
    Unsupported,
    /// Nothing has to be sent, the operation succeeds as is
    Completed,
}

impl BuilderOutcome {
    pub fn ready(builder: TransactionBuilder) -> Self {
        Self::Ready(Box::new(builder))
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn order() -> Order {
        Order {
            increment_id: "100000123".to_string(),
            grand_total: Decimal::new(2500, 2),
            currency: "EUR".to_string(),
            billing_address: None,
        }
    }

    fn services() -> Services {
        Services {
            name: "idealprocessing".to_string(),
            action: PaymentAction::Pay,
            version: 2,
            request_parameters: vec![ServiceParameter::new("issuer", "INGBNL2A")],
        }
    }

    #[test]
    fn services_serialize_with_gateway_field_names() {
        assert_eq!(
            serde_json::to_value(services()).ok(),
            Some(json!({
                "Name": "idealprocessing",
                "Action": "Pay",
                "Version": 2,
                "RequestParameter": [{ "_": "INGBNL2A", "Name": "issuer" }]
            }))
        );
    }

    #[test]
    fn build_requires_services() {
        let mut builder = TransactionBuilder::new(TransactionType::Order);
        builder.set_order(&order());

        let error = builder.build().err().map(|report| report.current_context().clone());
        assert_eq!(error, Some(PaymentMethodError::RequestBuildFailed));
    }

    #[test]
    fn build_uses_order_total_unless_overridden() {
        let mut builder = TransactionBuilder::new(TransactionType::Order);
        builder.set_order(&order()).set_services(services());
        assert_eq!(
            builder.build().ok().map(|request| request.amount_debit),
            Some(Decimal::new(2500, 2))
        );

        builder
            .set_amount(Decimal::new(500, 2))
            .set_original_transaction_key("ABCDEF0123");
        let request = builder.build().ok();
        assert_eq!(
            request.as_ref().map(|request| request.amount_debit),
            Some(Decimal::new(500, 2))
        );
        assert_eq!(
            request.and_then(|request| request.original_transaction_key),
            Some("ABCDEF0123".to_string())
        );
    }

    #[test]
    fn build_rejects_non_positive_amounts() {
        let mut builder = TransactionBuilder::new(TransactionType::Order);
        builder
            .set_order(&order())
            .set_services(services())
            .set_amount(Decimal::ZERO);
        assert!(builder.build().is_err());
    }

    #[test]
    fn unsupported_outcome() {
        assert!(!BuilderOutcome::Unsupported.is_supported());
        assert!(BuilderOutcome::Completed.is_supported());
    }
}
