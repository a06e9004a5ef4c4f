use std::{fmt, str::FromStr};

use common_utils::consts::METHOD_CODE_PREFIX;

use crate::{errors::PaymentMethodError, utils::Error};

/// Store view whose configuration scope applies; `None` means the default scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Payment methods this workspace integrates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMethodEnum {
    IdealProcessing,
    P24,
}

impl PaymentMethodEnum {
    /// Code of the method as registered with the host, e.g. `buckaroo_magento2_p24`.
    pub fn method_code(self) -> String {
        format!("{METHOD_CODE_PREFIX}{self}")
    }
}

impl FromStr for PaymentMethodEnum {
    type Err = Error;

    /// Accepts both the short code and the host method code.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let short_code = code.strip_prefix(METHOD_CODE_PREFIX).unwrap_or(code);
        match short_code {
            "idealprocessing" => Ok(Self::IdealProcessing),
            "p24" => Ok(Self::P24),
            _ => Err(PaymentMethodError::UnknownPaymentMethod(code.to_owned()).into()),
        }
    }
}
