use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_types::{
    errors::{ApiError, ApplicationErrorResponse, PaymentMethodError},
    utils::ForeignFrom,
};
use error_stack::Report;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid host for socket: {0}")]
    AddressError(#[from] std::net::AddrParseError),
    #[error("Failed to initialize the logger: {0}")]
    LoggerError(#[from] tracing_subscriber::util::TryInitError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// API error rendered as `{ "error": { "code", "message" } }` with the matching status.
#[derive(Debug)]
pub struct HttpError(pub ApplicationErrorResponse);

#[derive(Debug, serde::Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetails<'a>,
}

#[derive(Debug, serde::Serialize)]
struct ErrorDetails<'a> {
    code: &'a str,
    message: &'a str,
}

impl HttpError {
    pub fn not_found(sub_code: &str, error_message: String) -> Self {
        Self(ApplicationErrorResponse::NotFound(ApiError {
            sub_code: sub_code.to_owned(),
            error_identifier: 404,
            error_message,
            error_object: None,
        }))
    }

    pub fn bad_request(sub_code: &str, error_message: String) -> Self {
        Self(ApplicationErrorResponse::BadRequest(ApiError {
            sub_code: sub_code.to_owned(),
            error_identifier: 400,
            error_message,
            error_object: None,
        }))
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.api_error().error_identifier)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<Report<PaymentMethodError>> for HttpError {
    fn from(report: Report<PaymentMethodError>) -> Self {
        let error = report.current_context();
        if error.is_user_facing() {
            tracing::info!(%error, "request rejected");
        } else {
            tracing::error!(error = ?report, "request failed");
        }
        Self(ApplicationErrorResponse::foreign_from(error))
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::info!(error = %rejection, "malformed request body");
        Self::bad_request("INVALID_REQUEST", rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let api_error = self.0.api_error();
        let body = ErrorBody {
            error: ErrorDetails {
                code: &api_error.sub_code,
                message: &api_error.error_message,
            },
        };
        (status, Json(body)).into_response()
    }
}
