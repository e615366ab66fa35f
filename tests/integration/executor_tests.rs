use mockito::Matcher;
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use suyatrade::model::http::{HttpExecutor, RemoteExecutor, RemoteRequest};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_refused_connection_becomes_transport_failure() {
    // Bind and release a port so nothing is listening on it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .send(RemoteRequest::post_json(
            format!("http://{addr}/oauth2/token"),
            json!({ "grant_type": "client_credentials" }),
            Duration::from_secs(2),
        ))
        .await;

    assert_eq!(response.status, -1);
    assert!(!response.is_ok());
    assert_eq!(response.body.get("error"), Some(&json!("REQUEST_FAILED")));
    assert!(response.body.get("detail").is_some());
    assert!(response.headers.is_empty());
}

#[tokio::test]
async fn test_slow_remote_times_out_as_transport_failure() {
    let mut remote = mockito::Server::new_async().await;
    remote
        .mock("POST", "/api/dsacc/deposit")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(1500));
            w.write_all(br#"{"deposit":"1,000"}"#)
        })
        .create_async()
        .await;

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .send(RemoteRequest::post_json(
            format!("{}/api/dsacc/deposit", remote.url()),
            json!({}),
            Duration::from_millis(200),
        ))
        .await;

    assert_eq!(response.status, -1);
    assert_eq!(response.body.get("error"), Some(&json!("REQUEST_FAILED")));
}

#[tokio::test]
async fn test_get_sends_query_pairs_and_collects_headers() {
    let mut remote = mockito::Server::new_async().await;
    let quote = remote
        .mock("GET", "/api/dostk/quote")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("code".into(), "005930".into()),
            Matcher::UrlEncoded("market".into(), "KRX".into()),
        ]))
        .match_header("api-id", "ka10001")
        .with_status(200)
        .with_header("X-Remote-Trace", "q-7")
        .with_body(r#"{"price":"71,200"}"#)
        .expect(1)
        .create_async()
        .await;

    let http = reqwest::Client::builder().build().unwrap();
    let executor = HttpExecutor::with_client(http);
    let response = executor
        .send(
            RemoteRequest::get(
                format!("{}/api/dostk/quote", remote.url()),
                vec![
                    ("code".to_string(), "005930".to_string()),
                    ("market".to_string(), "KRX".to_string()),
                ],
                Duration::from_secs(2),
            )
            .header("api-id", "ka10001"),
        )
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body.get("price"), Some(&json!("71,200")));
    assert_eq!(response.headers.get("x-remote-trace").map(String::as_str), Some("q-7"));
    quote.assert_async().await;
}

#[tokio::test]
async fn test_non_json_body_is_wrapped_as_text() {
    let mut remote = mockito::Server::new_async().await;
    remote
        .mock("POST", "/api/acc/balance")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .send(RemoteRequest::post_json(
            format!("{}/api/acc/balance", remote.url()),
            json!({}),
            Duration::from_secs(2),
        ))
        .await;

    assert_eq!(response.status, 404);
    assert_eq!(response.body.get("text"), Some(&json!("Not Found")));
}
