use common_utils::Email;
use hyperswitch_masking::{PeekInterface, Secret};

use crate::utils::{missing_field_err, Error};

#[derive(Default, Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BillingAddress {
    pub email: Option<Email>,
    pub firstname: Option<Secret<String>>,
    pub lastname: Option<Secret<String>>,
    /// ISO 3166-1 alpha-2 country code
    pub country_id: Option<String>,
}

impl BillingAddress {
    pub fn get_email(&self) -> Result<&Email, Error> {
        self.email.as_ref().ok_or_else(missing_field_err("billing_address.email"))
    }

    pub fn get_first_name(&self) -> Result<&Secret<String>, Error> {
        self.firstname
            .as_ref()
            .filter(|name| !name.peek().trim().is_empty())
            .ok_or_else(missing_field_err("billing_address.firstname"))
    }

    pub fn get_last_name(&self) -> Result<&Secret<String>, Error> {
        self.lastname
            .as_ref()
            .filter(|name| !name.peek().trim().is_empty())
            .ok_or_else(missing_field_err("billing_address.lastname"))
    }

    pub fn get_optional_country(&self) -> Option<&str> {
        self.country_id
            .as_deref()
            .map(str::trim)
            .filter(|country| !country.is_empty())
    }
}
