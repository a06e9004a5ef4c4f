use common_enums::PaymentAction;
use domain_types::{
    payment_info::PaymentInfo,
    transaction::{ServiceParameter, Services},
    utils::{missing_field_err, Error},
};
use hyperswitch_masking::{PeekInterface, Secret};

pub const SERVICE_NAME: &str = "Przelewy24";
pub const SERVICE_VERSION: u8 = 1;

/// Order request of the `Przelewy24` gateway service, filled from the order's billing address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P24Services {
    pub action: PaymentAction,
    pub customer_email: Secret<String>,
    pub customer_first_name: Secret<String>,
    pub customer_last_name: Secret<String>,
}

impl TryFrom<(&PaymentInfo, PaymentAction)> for P24Services {
    type Error = Error;

    fn try_from((payment, action): (&PaymentInfo, PaymentAction)) -> Result<Self, Self::Error> {
        let address = payment
            .get_optional_billing_address()
            .ok_or_else(missing_field_err("billing_address"))?;
        Ok(Self {
            action,
            customer_email: Secret::new(address.get_email()?.peek().clone()),
            customer_first_name: address.get_first_name()?.clone(),
            customer_last_name: address.get_last_name()?.clone(),
        })
    }
}

impl From<P24Services> for Services {
    fn from(item: P24Services) -> Self {
        Self {
            name: SERVICE_NAME.to_owned(),
            action: item.action,
            version: SERVICE_VERSION,
            request_parameters: vec![
                ServiceParameter::new("CustomerEmail", item.customer_email.peek()),
                ServiceParameter::new("CustomerFirstName", item.customer_first_name.peek()),
                ServiceParameter::new("CustomerLastName", item.customer_last_name.peek()),
            ],
        }
    }
}
