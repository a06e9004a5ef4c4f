pub mod transformers;

use common_enums::{TransactionMethod, TransactionType};
use common_utils::{
    consts::{ISSUER_KEY, SKIP_VALIDATION_KEY},
    errors::CustomResult,
};
use domain_types::{
    errors::PaymentMethodError,
    issuers::find_issuer,
    payment_info::{PaymentInfo, SubmittedPaymentData},
    transaction::BuilderOutcome,
    types::{PaymentMethodEnum, StoreId},
};
use error_stack::report;
use interfaces::{
    api::{MethodContext, PaymentMethod},
    config_provider::{MethodConfigProvider, ProviderContext},
};

use self::transformers::IdealProcessingServices;
use crate::config_providers::IdealProcessingConfig;

pub const GATEWAY_CODE: &str = "idealprocessing";

#[derive(Clone, Debug)]
pub struct IdealProcessing {
    context: MethodContext,
    config: IdealProcessingConfig,
}

impl IdealProcessing {
    pub fn new(context: MethodContext, provider_context: ProviderContext) -> Self {
        Self {
            context,
            config: IdealProcessingConfig::new(provider_context),
        }
    }
}

impl PaymentMethod for IdealProcessing {
    fn method(&self) -> PaymentMethodEnum {
        PaymentMethodEnum::IdealProcessing
    }

    fn context(&self) -> &MethodContext {
        &self.context
    }

    fn config_provider(&self) -> &dyn MethodConfigProvider {
        &self.config
    }

    fn gateway_code(&self) -> &'static str {
        GATEWAY_CODE
    }

    fn payment_method_name(&self, _payment: &PaymentInfo) -> &'static str {
        GATEWAY_CODE
    }

    fn can_refund(&self) -> bool {
        false
    }

    fn assign_data(
        &self,
        payment: &mut PaymentInfo,
        data: &SubmittedPaymentData,
    ) -> CustomResult<(), PaymentMethodError> {
        for key in [ISSUER_KEY, SKIP_VALIDATION_KEY] {
            if let Some(value) = data.get(key).filter(|value| !value.is_null()) {
                payment.set_additional_information(key, value.clone());
            }
        }
        Ok(())
    }

    fn validate(
        &self,
        payment: &PaymentInfo,
        store: Option<&StoreId>,
    ) -> CustomResult<(), PaymentMethodError> {
        self.validate_billing_country(payment, store)?;

        if payment.is_flag_set(SKIP_VALIDATION_KEY) {
            tracing::debug!(method = %self.method(), "issuer validation skipped");
            return Ok(());
        }

        let issuer = payment.get_additional_string(ISSUER_KEY);
        match issuer
            .as_deref()
            .and_then(|code| find_issuer(self.config.get_issuers(), code))
        {
            Some(_) => Ok(()),
            None => {
                tracing::warn!(method = %self.method(), ?issuer, "issuer not in catalog");
                Err(report!(PaymentMethodError::IssuerNotInCatalog))
            }
        }
    }

    fn get_order_transaction_builder(
        &self,
        payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError> {
        let mut builder = self
            .context
            .transaction_builder_factory
            .get(TransactionType::Order);
        let action = self.get_pay_remainder(payment, &mut builder)?;
        let services = IdealProcessingServices::try_from((&*payment, action))?;
        let order = payment.get_order()?;

        builder
            .set_order(order)
            .set_services(services.into())
            .set_method(TransactionMethod::TransactionRequest);

        tracing::info!(
            method = %self.method(),
            order_id = %order.increment_id,
            %action,
            "order transaction prepared"
        );
        Ok(BuilderOutcome::ready(builder))
    }

    fn get_capture_transaction_builder(
        &self,
        _payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError> {
        Ok(BuilderOutcome::Unsupported)
    }

    fn get_authorize_transaction_builder(
        &self,
        _payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError> {
        Ok(BuilderOutcome::Unsupported)
    }

    /// Nothing is reserved at the gateway, so there is nothing to release.
    fn get_void_transaction_builder(
        &self,
        _payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError> {
        Ok(BuilderOutcome::Completed)
    }
}
