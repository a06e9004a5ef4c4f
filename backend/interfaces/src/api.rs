use std::sync::Arc;

use common_enums::{PaymentAction, TransactionType};
use common_utils::{errors::CustomResult, ext_traits::ConfigValueExt};
use domain_types::{
    errors::PaymentMethodError,
    payment_address::BillingAddress,
    payment_info::{PaymentInfo, SubmittedPaymentData},
    transaction::{BuilderOutcome, TransactionBuilder},
    types::{PaymentMethodEnum, StoreId},
};
use error_stack::report;
use rust_decimal::Decimal;

use crate::{
    config_provider::MethodConfigProvider,
    host::{PaymentGroupTransaction, TransactionBuilderFactory},
};

/// Host services shared by all payment methods.
#[derive(Clone)]
pub struct MethodContext {
    pub transaction_builder_factory: Arc<dyn TransactionBuilderFactory>,
    pub payment_group_transaction: Arc<dyn PaymentGroupTransaction>,
}

impl std::fmt::Debug for MethodContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodContext").finish_non_exhaustive()
    }
}

pub type BoxedPaymentMethod = Box<dyn PaymentMethod>;

/// A payment method as the host checkout and order management drive it.
pub trait PaymentMethod: Send + Sync {
    fn method(&self) -> PaymentMethodEnum;

    fn context(&self) -> &MethodContext;

    fn config_provider(&self) -> &dyn MethodConfigProvider;

    /// Code of the method as registered with the host.
    fn code(&self) -> String {
        self.method().method_code()
    }

    /// Code the gateway and the checkout know the method by.
    fn gateway_code(&self) -> &'static str;

    fn payment_method_name(&self, payment: &PaymentInfo) -> &'static str;

    fn can_refund(&self) -> bool {
        true
    }

    /// Copies the submitted fields the method understands onto the payment.
    fn assign_data(
        &self,
        _payment: &mut PaymentInfo,
        _data: &SubmittedPaymentData,
    ) -> CustomResult<(), PaymentMethodError> {
        Ok(())
    }

    fn validate(
        &self,
        payment: &PaymentInfo,
        store: Option<&StoreId>,
    ) -> CustomResult<(), PaymentMethodError> {
        self.validate_billing_country(payment, store)
    }

    /// Rejects billing countries outside `specificcountry` when `allowspecific` is set.
    fn validate_billing_country(
        &self,
        payment: &PaymentInfo,
        store: Option<&StoreId>,
    ) -> CustomResult<(), PaymentMethodError> {
        let config = self.config_provider();
        let restricted = config
            .get_allow_specific(store)
            .is_some_and(|allow_specific| allow_specific.is_truthy_flag());
        if !restricted {
            return Ok(());
        }

        let Some(country) = payment
            .get_optional_billing_address()
            .and_then(BillingAddress::get_optional_country)
        else {
            return Ok(());
        };

        if config
            .get_specific_country(store)
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(country))
        {
            Ok(())
        } else {
            tracing::warn!(method = %self.method(), country, "billing country not allowed");
            Err(report!(PaymentMethodError::CountryNotAllowed {
                country: country.to_owned(),
            }))
        }
    }

    fn get_order_transaction_builder(
        &self,
        payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError>;

    fn get_capture_transaction_builder(
        &self,
        payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError>;

    fn get_authorize_transaction_builder(
        &self,
        payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError>;

    fn get_void_transaction_builder(
        &self,
        payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError>;

    /// Refunds are not part of these integrations.
    fn get_refund_transaction_builder(
        &self,
        _payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError> {
        Ok(BuilderOutcome::Unsupported)
    }

    fn get_transaction_builder(
        &self,
        transaction_type: TransactionType,
        payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError> {
        match transaction_type {
            TransactionType::Order => self.get_order_transaction_builder(payment),
            TransactionType::Capture => self.get_capture_transaction_builder(payment),
            TransactionType::Authorize => self.get_authorize_transaction_builder(payment),
            TransactionType::Void => self.get_void_transaction_builder(payment),
            TransactionType::Refund => self.get_refund_transaction_builder(payment),
        }
    }

    /// `PayRemainder` when part of the order is already paid through its payment group, in which
    /// case the builder is limited to the remaining amount and linked to the group.
    fn get_pay_remainder(
        &self,
        payment: &PaymentInfo,
        builder: &mut TransactionBuilder,
    ) -> CustomResult<PaymentAction, PaymentMethodError> {
        let order = payment.get_order()?;
        let group = &self.context().payment_group_transaction;
        let already_paid = group.get_already_paid(&order.increment_id);

        if already_paid <= Decimal::ZERO {
            return Ok(PaymentAction::Pay);
        }

        let remainder = order.grand_total - already_paid;
        if remainder <= Decimal::ZERO {
            return Err(report!(PaymentMethodError::NothingLeftToPay).attach_printable(format!(
                "order {} already paid {already_paid} of {}",
                order.increment_id, order.grand_total
            )));
        }

        builder.set_amount(remainder);
        if let Some(key) = group.get_group_transaction_original_transaction_key(&order.increment_id)
        {
            builder.set_original_transaction_key(key);
        }
        tracing::debug!(
            order_id = %order.increment_id,
            %already_paid,
            %remainder,
            "paying remainder of partially paid order"
        );

        Ok(PaymentAction::PayRemainder)
    }
}
