use common_enums::PaymentAction;
use common_utils::consts::ISSUER_KEY;
use domain_types::{
    payment_info::PaymentInfo,
    transaction::{ServiceParameter, Services},
    utils::{missing_field_err, Error},
};

use super::GATEWAY_CODE;

pub const SERVICE_VERSION: u8 = 2;

/// Order request of the `idealprocessing` gateway service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdealProcessingServices {
    pub action: PaymentAction,
    pub issuer: String,
}

impl TryFrom<(&PaymentInfo, PaymentAction)> for IdealProcessingServices {
    type Error = Error;

    fn try_from((payment, action): (&PaymentInfo, PaymentAction)) -> Result<Self, Self::Error> {
        let issuer = payment
            .get_additional_string(ISSUER_KEY)
            .ok_or_else(missing_field_err(ISSUER_KEY))?;
        Ok(Self { action, issuer })
    }
}

impl From<IdealProcessingServices> for Services {
    fn from(item: IdealProcessingServices) -> Self {
        Self {
            name: GATEWAY_CODE.to_owned(),
            action: item.action,
            version: SERVICE_VERSION,
            request_parameters: vec![ServiceParameter::new(ISSUER_KEY, item.issuer)],
        }
    }
}
