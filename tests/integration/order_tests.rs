use crate::common::{TEST_TOKEN, spawn_app};
use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_market_buy_is_forwarded_with_idempotency_key() {
    let mut app = spawn_app().await;
    app.mock_token(1).await;
    let order = app
        .remote
        .mock("POST", "/api/dostk/ordr")
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .match_header("api-id", "kt10000")
        .match_header("x-idempotency-key", "idem-42")
        .match_body(Matcher::Json(json!({
            "CANO": "81234567",
            "ACNT_PRDT_CD": "01",
            "pdno": "005930",
            "ord_dvsn": "01",
            "ord_qty": "10",
            "ord_prc": "0"
        })))
        .with_status(200)
        .with_header("x-remote-trace", "t-1")
        .with_body(r#"{"ord_no":"0000123","return_code":0}"#)
        .expect(1)
        .create_async()
        .await;

    let response = app
        .http
        .post(app.url("/api/orders/stock/buy"))
        .header("X-Idempotency-Key", "idem-42")
        .json(&json!({ "code": "005930", "qty": 10, "market": true, "price": 70000 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["response"]["ord_no"], "0000123");
    assert_eq!(body["headers"]["x-remote-trace"], "t-1");
    order.assert_async().await;
}

#[tokio::test]
async fn test_limit_sell_without_key_sends_no_header() {
    let mut app = spawn_app().await;
    app.mock_token(1).await;
    let order = app
        .remote
        .mock("POST", "/api/dostk/ordr")
        .match_header("api-id", "kt10001")
        .match_header("x-idempotency-key", Matcher::Missing)
        .match_body(Matcher::PartialJson(json!({
            "ord_dvsn": "00",
            "ord_qty": "1",
            "ord_prc": "65000"
        })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let response = app
        .http
        .post(app.url("/api/orders/stock/sell"))
        .json(&json!({ "code": "005930", "qty": 1, "market": false, "price": 65000 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    order.assert_async().await;
}

#[tokio::test]
async fn test_remote_rejection_is_relayed_not_retried() {
    let mut app = spawn_app().await;
    app.mock_token(1).await;
    let order = app
        .remote
        .mock("POST", "/api/dostk/ordr")
        .with_status(500)
        .with_body("upstream exploded")
        .expect(1)
        .create_async()
        .await;

    let response = app
        .http
        .post(app.url("/api/orders/stock/buy"))
        .json(&json!({ "code": "005930", "qty": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status_code"], 500);
    assert_eq!(body["response"], json!({ "text": "upstream exploded" }));
    order.assert_async().await;
}

#[tokio::test]
async fn test_invalid_orders_are_rejected_locally() {
    let mut app = spawn_app().await;
    let never = app
        .remote
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let cases = [
        json!({ "code": "5930", "qty": 1 }),
        json!({ "code": "005930", "qty": 0 }),
        json!({ "code": "005930", "qty": -3 }),
        json!({ "code": "005930", "qty": 1, "market": false }),
        json!({ "code": "005930", "qty": 1, "market": false, "price": 0 }),
        json!({ "qty": 1 }),
    ];
    for case in cases {
        let response = app
            .http
            .post(app.url("/api/orders/stock/buy"))
            .json(&case)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "case {case}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "INVALID_ORDER", "case {case}");
    }

    never.assert_async().await;
}

#[tokio::test]
async fn test_order_without_token_is_bad_gateway() {
    let mut app = spawn_app().await;
    app.remote
        .mock("POST", "/oauth2/token")
        .with_status(429)
        .expect(3)
        .create_async()
        .await;

    let response = app
        .http
        .post(app.url("/api/orders/stock/buy"))
        .json(&json!({ "code": "005930", "qty": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_unreadable_idempotency_key_is_rejected() {
    let mut app = spawn_app().await;
    let never = app
        .remote
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let key = reqwest::header::HeaderValue::from_bytes("주문-1".as_bytes()).unwrap();
    let response = app
        .http
        .post(app.url("/api/orders/stock/buy"))
        .header("X-Idempotency-Key", key)
        .json(&json!({ "code": "005930", "qty": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "INVALID_ORDER");
    assert!(body["hint"].as_str().unwrap().contains("x-idempotency-key"));
    never.assert_async().await;
}
