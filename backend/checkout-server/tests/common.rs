#![allow(dead_code, clippy::expect_used)]

use std::{io::Write, path::PathBuf, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use checkout_server::{app, configs};
use tempfile::NamedTempFile;
use tower::ServiceExt;

pub const TEST_CONFIG: &str = r#"
[common]
environment = "development"

[server]
host = "127.0.0.1"
port = 0

[metrics]
host = "127.0.0.1"
port = 0

[log.console]
enabled = false
level = "DEBUG"

[assets]
base_url = "https://shop.example/static"

[currencies]
allowed = ["EUR", "USD", "PLN"]

[store_config.default]
"payment/buckaroo_magento2_idealprocessing/active" = "1"
"payment/buckaroo_magento2_idealprocessing/selectiontype" = "2"
"payment/buckaroo_magento2_p24/active" = "1"
"payment/buckaroo_magento2_p24/payment_fee_label" = "Opłata"

[store_config.stores.de]
"payment/buckaroo_magento2_p24/active" = "0"
"payment/buckaroo_magento2_idealprocessing/allowspecific" = "1"
"payment/buckaroo_magento2_idealprocessing/specificcountry" = "NL,BE"
"#;

/// Writes `contents` to a temporary `.toml` file, kept alive by the returned handle.
pub fn write_config(contents: &str) -> (NamedTempFile, PathBuf) {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config file");
    let path = file.path().to_path_buf();
    (file, path)
}

pub fn test_config() -> configs::Config {
    let (_file, path) = write_config(TEST_CONFIG);
    configs::Config::new_with_config_path(Some(path)).expect("Failed while parsing config")
}

pub fn test_router() -> Router {
    app::Service::new(Arc::new(test_config())).router()
}

pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .oneshot(request.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to call router");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
