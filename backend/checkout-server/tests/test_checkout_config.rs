use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;

#[tokio::test]
async fn test_checkout_config_default_scope() {
    let (status, body) =
        common::send(common::test_router(), Method::GET, "/checkout/config", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["payment"]["buckaroo"]["p24"],
        json!({ "paymentFeeLabel": "Opłata", "allowedCurrencies": ["PLN"] })
    );

    let ideal = &body["payment"]["buckaroo"]["idealprocessing"];
    assert_eq!(ideal["paymentFeeLabel"], json!("Fee"));
    assert_eq!(ideal["allowedCurrencies"], json!(["EUR"]));
    assert_eq!(ideal["selectionType"], json!("2"));
    assert_eq!(ideal["banks"].as_array().map(Vec::len), Some(12));
    assert_eq!(
        ideal["banks"][3],
        json!({
            "name": "ING",
            "code": "INGBNL2A",
            "img": "https://shop.example/static/Buckaroo_Magento2/images/ico-INGBNL2A.png"
        })
    );
}

#[tokio::test]
async fn test_checkout_config_store_scope() {
    let (status, body) = common::send(
        common::test_router(),
        Method::GET,
        "/checkout/config?store=de",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["payment"]["buckaroo"]["idealprocessing"].is_object());
    assert!(body["payment"]["buckaroo"]["p24"].is_null());
}
