pub mod test;
pub mod transformers;

use common_enums::{TransactionMethod, TransactionType};
use common_utils::{consts::SKIP_PUSH_KEY, errors::CustomResult};
use domain_types::{
    errors::PaymentMethodError, payment_info::PaymentInfo, transaction::BuilderOutcome,
    types::PaymentMethodEnum,
};
use interfaces::{
    api::{MethodContext, PaymentMethod},
    config_provider::{MethodConfigProvider, ProviderContext},
};

use self::transformers::P24Services;
use crate::config_providers::P24Config;

pub const GATEWAY_CODE: &str = "p24";

#[derive(Clone, Debug)]
pub struct P24 {
    context: MethodContext,
    config: P24Config,
}

impl P24 {
    pub fn new(context: MethodContext, provider_context: ProviderContext) -> Self {
        Self {
            context,
            config: P24Config::new(provider_context),
        }
    }
}

impl PaymentMethod for P24 {
    fn method(&self) -> PaymentMethodEnum {
        PaymentMethodEnum::P24
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
        transformers::SERVICE_NAME
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
        let services = P24Services::try_from((&*payment, action))?;

        // The first push arrives before the transaction response and must not be processed.
        payment.set_additional_information(SKIP_PUSH_KEY, 1);

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

    fn get_void_transaction_builder(
        &self,
        _payment: &mut PaymentInfo,
    ) -> CustomResult<BuilderOutcome, PaymentMethodError> {
        Ok(BuilderOutcome::Completed)
    }
}
