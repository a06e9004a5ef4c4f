use std::{future::Future, sync::Arc};

use axum::http;
use common_utils::consts;
use interfaces::config_provider::ProviderContext;
use payment_methods::helpers::{
    ScopeConfigFeeLabel, StaticAllowedCurrencies, StaticAssetRepository,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::oneshot,
};
use tower_http::{request_id::MakeRequestUuid, trace as tower_trace};

use crate::{
    configs,
    error::ConfigurationError,
    logger, metrics,
    server::{
        checkout::{checkout_service_handler, Checkout},
        health_check::health_service_handler,
        payments::{payment_service_handler, Payments},
    },
    utils,
};

/// # Panics
///
/// Will panic if signal handling fails
pub async fn server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let server_config = config.server.clone();

    // Signal handler
    let (tx, rx) = oneshot::channel();

    #[allow(clippy::expect_used)]
    tokio::spawn(async move {
        let mut sig_int =
            signal(SignalKind::interrupt()).expect("Failed to initialize SIGINT signal handler");
        let mut sig_term =
            signal(SignalKind::terminate()).expect("Failed to initialize SIGTERM signal handler");
        let mut sig_quit =
            signal(SignalKind::quit()).expect("Failed to initialize QUIT signal handler");
        let mut sig_hup =
            signal(SignalKind::hangup()).expect("Failed to initialize SIGHUP signal handler");

        let received = tokio::select! {
            _ = sig_int.recv() => "SIGINT",
            _ = sig_term.recv() => "SIGTERM",
            _ = sig_quit.recv() => "QUIT",
            _ = sig_hup.recv() => "SIGHUP",
        };
        logger::info!(signal = received, "Received shutdown signal");
        tx.send(()).expect("Failed to forward shutdown signal");
    });

    #[allow(clippy::expect_used)]
    let shutdown_signal = async {
        rx.await.expect("Failed to receive shutdown signal");
        logger::info!("Shutdown signal received");
    };

    let service = Service::new(Arc::new(config));

    logger::info!(
        host = %server_config.host,
        port = %server_config.port,
        "starting checkout service"
    );

    let listener = server_config.tcp_listener().await?;
    service.http_server(listener, shutdown_signal).await
}

/// Host services backed by the static configuration file.
pub fn provider_context(config: &configs::Config) -> ProviderContext {
    let scope_config = Arc::new(config.store_config.clone());
    ProviderContext {
        payment_fee_helper: Arc::new(
            ScopeConfigFeeLabel::new(scope_config.clone())
                .with_default_label(config.payment_fee.default_label.clone()),
        ),
        scope_config,
        asset_repository: Arc::new(StaticAssetRepository::new(config.assets.base_url.clone())),
        allowed_currencies: Arc::new(StaticAllowedCurrencies(config.currencies.allowed.clone())),
    }
}

pub struct Service {
    pub checkout_service: Checkout,
    pub payments_service: Payments,
}

impl Service {
    pub fn new(config: Arc<configs::Config>) -> Self {
        let provider_context = provider_context(&config);
        Self {
            checkout_service: Checkout {
                provider_context: provider_context.clone(),
            },
            payments_service: Payments { provider_context },
        }
    }

    /// All API routes with request tracing, request ids and HTTP metrics.
    pub fn router(self) -> axum::Router {
        let logging_layer = tower_trace::TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                utils::record_fields_from_header(request)
            })
            .on_request(tower_trace::DefaultOnRequest::new().level(tracing::Level::INFO))
            .on_response(
                tower_trace::DefaultOnResponse::new()
                    .level(tracing::Level::INFO)
                    .latency_unit(tower_http::LatencyUnit::Micros),
            )
            .on_failure(
                tower_trace::DefaultOnFailure::new()
                    .latency_unit(tower_http::LatencyUnit::Micros)
                    .level(tracing::Level::ERROR),
            );

        let request_id_layer = tower_http::request_id::SetRequestIdLayer::new(
            http::HeaderName::from_static(consts::X_REQUEST_ID),
            MakeRequestUuid,
        );

        let propagate_request_id_layer = tower_http::request_id::PropagateRequestIdLayer::new(
            http::HeaderName::from_static(consts::X_REQUEST_ID),
        );

        // Layers apply bottom-up: the request id is set before the trace span reads it.
        axum::Router::new()
            .merge(health_service_handler())
            .merge(checkout_service_handler(self.checkout_service))
            .merge(payment_service_handler(self.payments_service))
            .layer(axum::middleware::from_fn(metrics::track_http_metrics))
            .layer(logging_layer)
            .layer(propagate_request_id_layer)
            .layer(request_id_layer)
    }

    pub async fn http_server(
        self,
        listener: tokio::net::TcpListener,
        shutdown_signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ConfigurationError> {
        axum::serve(listener, self.router().into_make_service())
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

pub async fn metrics_server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let listener = config.metrics.tcp_listener().await?;

    let router = axum::Router::new().route(
        "/metrics",
        axum::routing::get(|| async {
            let output = metrics::metrics_handler().await;
            match output {
                Ok(metrics) => Ok(metrics),
                Err(error) => {
                    tracing::error!(?error, "Error fetching metrics");

                    Err((
                        http::StatusCode::INTERNAL_SERVER_ERROR,
                        "Error fetching metrics".to_string(),
                    ))
                }
            }
        }),
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async {
            let output = tokio::signal::ctrl_c().await;
            tracing::error!(?output, "shutting down");
        })
        .await?;

    Ok(())
}
