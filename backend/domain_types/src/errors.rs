use strum::Display;

use crate::utils::ForeignFrom;

/// Failures raised while validating payment data or building a transaction request.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PaymentMethodError {
    #[error("Please select a issuer from the list")]
    IssuerNotInCatalog,
    #[error("You can't use the payment type you selected to make payments to the billing country {country}.")]
    CountryNotAllowed { country: String },
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("The order has no amount left to pay")]
    NothingLeftToPay,
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
    #[error("Failed to build the transaction request")]
    RequestBuildFailed,
}

impl PaymentMethodError {
    /// Errors whose message is meant to be shown to the customer at checkout.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::IssuerNotInCatalog | Self::CountryNotAllowed { .. }
        )
    }

    pub fn sub_code(&self) -> &'static str {
        match self {
            Self::IssuerNotInCatalog => "INVALID_ISSUER",
            Self::CountryNotAllowed { .. } => "COUNTRY_NOT_ALLOWED",
            Self::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            Self::NothingLeftToPay => "NOTHING_LEFT_TO_PAY",
            Self::UnknownPaymentMethod(_) => "UNKNOWN_PAYMENT_METHOD",
            Self::RequestBuildFailed => "REQUEST_BUILD_FAILED",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, Display)]
pub enum ApplicationErrorResponse {
    NotFound(ApiError),
    BadRequest(ApiError),
    Unprocessable(ApiError),
    InternalServerError(ApiError),
}

impl ApplicationErrorResponse {
    pub fn api_error(&self) -> &ApiError {
        match self {
            Self::NotFound(error)
            | Self::BadRequest(error)
            | Self::Unprocessable(error)
            | Self::InternalServerError(error) => error,
        }
    }
}

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub sub_code: String,
    pub error_identifier: u16,
    pub error_message: String,
    pub error_object: Option<serde_json::Value>,
}

impl ForeignFrom<&PaymentMethodError> for ApplicationErrorResponse {
    fn foreign_from(error: &PaymentMethodError) -> Self {
        let api_error = |error_identifier| ApiError {
            sub_code: error.sub_code().to_owned(),
            error_identifier,
            error_message: error.to_string(),
            error_object: None,
        };

        match error {
            PaymentMethodError::IssuerNotInCatalog
            | PaymentMethodError::CountryNotAllowed { .. }
            | PaymentMethodError::NothingLeftToPay => Self::Unprocessable(api_error(422)),
            PaymentMethodError::MissingRequiredField { .. } => Self::BadRequest(api_error(400)),
            PaymentMethodError::UnknownPaymentMethod(_) => Self::NotFound(api_error(404)),
            PaymentMethodError::RequestBuildFailed => Self::InternalServerError(api_error(500)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuer_error_keeps_storefront_message() {
        let error = PaymentMethodError::IssuerNotInCatalog;
        assert_eq!(error.to_string(), "Please select a issuer from the list");
        assert!(error.is_user_facing());
    }

    #[test]
    fn errors_map_to_api_responses() {
        let response =
            ApplicationErrorResponse::foreign_from(&PaymentMethodError::IssuerNotInCatalog);
        assert!(matches!(response, ApplicationErrorResponse::Unprocessable(_)));
        assert_eq!(response.api_error().sub_code, "INVALID_ISSUER");

        let response = ApplicationErrorResponse::foreign_from(
            &PaymentMethodError::UnknownPaymentMethod("sofort".to_string()),
        );
        assert!(matches!(response, ApplicationErrorResponse::NotFound(_)));
        assert_eq!(response.api_error().error_identifier, 404);
    }
}
