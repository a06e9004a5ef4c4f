use std::{str::FromStr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::post,
    Json, Router,
};
use common_enums::TransactionType;
use domain_types::{
    order::Order,
    payment_address::BillingAddress,
    payment_info::{AdditionalInformation, PaymentInfo, SubmittedPaymentData},
    transaction::{BuilderOutcome, TransactionRequest},
    types::StoreId,
};
use interfaces::{
    api::{MethodContext, PaymentMethod},
    config_provider::ProviderContext,
};
use payment_methods::{
    helpers::{DefaultTransactionBuilderFactory, InMemoryPaymentGroups},
    types::MethodData,
};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::{error::HttpError, logger, metrics};

#[derive(Clone, Debug)]
pub struct Payments {
    pub provider_context: ProviderContext,
}

impl Payments {
    fn get_method(
        &self,
        code: &str,
        payment_groups: InMemoryPaymentGroups,
    ) -> Result<MethodData, HttpError> {
        let context = MethodContext {
            transaction_builder_factory: Arc::new(DefaultTransactionBuilderFactory),
            payment_group_transaction: Arc::new(payment_groups),
        };
        Ok(MethodData::get_method_by_code(
            code,
            context,
            self.provider_context.clone(),
        )?)
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct ValidatePaymentRequest {
    #[serde(default)]
    pub additional_data: Map<String, Value>,
    #[serde(default)]
    pub billing_address: Option<BillingAddress>,
    #[serde(default)]
    pub store: Option<StoreId>,
}

#[derive(Debug, serde::Serialize)]
pub struct ValidatePaymentResponse {
    pub additional_information: AdditionalInformation,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct TransactionPayload {
    #[serde(default)]
    pub additional_data: Map<String, Value>,
    #[serde(default)]
    pub order: Option<Order>,
    /// Amount already paid through the order's payment group
    #[serde(default)]
    pub already_paid: Option<Decimal>,
    #[serde(default)]
    pub original_transaction_key: Option<String>,
    #[serde(default)]
    pub store: Option<StoreId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Ready,
    Unsupported,
    Completed,
}

#[derive(Debug, serde::Serialize)]
pub struct TransactionResponse {
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<TransactionRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<AdditionalInformation>,
}

impl TransactionResponse {
    fn without_request(status: TransactionStatus) -> Self {
        Self {
            status,
            request: None,
            additional_information: None,
        }
    }
}

pub fn payment_service_handler(service: Payments) -> Router {
    Router::new()
        .route("/payments/{method}/validate", post(validate_payment))
        .route(
            "/payments/{method}/transactions/{transaction_type}",
            post(transaction),
        )
        .with_state(service)
}

/// Runs the method's validation, counting rejections per method.
fn validate(
    payment_method: &dyn PaymentMethod,
    payment: &PaymentInfo,
    store: Option<&StoreId>,
) -> Result<(), HttpError> {
    payment_method.validate(payment, store).map_err(|report| {
        metrics::PAYMENT_VALIDATION_FAILURES
            .with_label_values(&[payment_method.gateway_code()])
            .inc();
        report.into()
    })
}

#[logger::instrument(skip_all)]
async fn validate_payment(
    State(service): State<Payments>,
    Path(method): Path<String>,
    request: Result<Json<ValidatePaymentRequest>, JsonRejection>,
) -> Result<Json<ValidatePaymentResponse>, HttpError> {
    let Json(request) = request?;
    let method_data = service.get_method(&method, InMemoryPaymentGroups::default())?;
    let payment_method = &method_data.method;

    let mut payment = PaymentInfo::new(payment_method.code());
    payment.billing_address = request.billing_address;
    let submitted = SubmittedPaymentData::from(request.additional_data);
    payment_method.assign_data(&mut payment, &submitted)?;
    validate(&**payment_method, &payment, request.store.as_ref())?;

    logger::debug!(payment_method = %method_data.method_name, "payment data accepted");
    Ok(Json(ValidatePaymentResponse {
        additional_information: payment.additional_information().clone(),
    }))
}

#[logger::instrument(skip_all)]
async fn transaction(
    State(service): State<Payments>,
    Path((method, transaction_type)): Path<(String, String)>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<TransactionResponse>, HttpError> {
    let unknown_type = || {
        HttpError::not_found(
            "UNKNOWN_TRANSACTION_TYPE",
            format!("Unknown transaction type: {transaction_type}"),
        )
    };
    let transaction_type = match TransactionType::from_str(&transaction_type) {
        Ok(TransactionType::Refund) | Err(_) => return Err(unknown_type()),
        Ok(transaction_type) => transaction_type,
    };
    let Json(payload) = payload?;

    let payment_groups = match (&payload.order, payload.already_paid) {
        (Some(order), Some(already_paid)) => InMemoryPaymentGroups::default().with_group(
            order.increment_id.clone(),
            already_paid,
            payload.original_transaction_key.clone(),
        ),
        _ => InMemoryPaymentGroups::default(),
    };
    let method_data = service.get_method(&method, payment_groups)?;
    let payment_method = &method_data.method;

    let mut payment = PaymentInfo::new(payment_method.code());
    payment.order = payload.order;
    let submitted = SubmittedPaymentData::from(payload.additional_data);
    payment_method.assign_data(&mut payment, &submitted)?;
    if transaction_type == TransactionType::Order {
        validate(&**payment_method, &payment, payload.store.as_ref())?;
    }

    let response = match payment_method.get_transaction_builder(transaction_type, &mut payment)? {
        BuilderOutcome::Ready(builder) => {
            let request = builder.build()?;
            metrics::TRANSACTION_REQUESTS_BUILT
                .with_label_values(&[
                    payment_method.gateway_code(),
                    transaction_type.to_string().as_str(),
                ])
                .inc();
            logger::info!(
                payment_method = %method_data.method_name,
                %transaction_type,
                invoice = %request.invoice,
                "transaction request built"
            );
            TransactionResponse {
                status: TransactionStatus::Ready,
                request: Some(request),
                additional_information: Some(payment.additional_information().clone()),
            }
        }
        BuilderOutcome::Unsupported => {
            TransactionResponse::without_request(TransactionStatus::Unsupported)
        }
        BuilderOutcome::Completed => {
            TransactionResponse::without_request(TransactionStatus::Completed)
        }
    };

    Ok(Json(response))
}
