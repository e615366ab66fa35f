use crate::common::spawn_app;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_general_settings_round_trip() {
    let app = spawn_app().await;

    let initial: Value = app
        .http
        .get(app.url("/api/settings/general"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        initial,
        json!({
            "status_code": 200,
            "response": { "layout": "layout3", "theme": "dark", "order_default_market": true },
            "headers": {}
        })
    );

    let saved = app
        .http
        .put(app.url("/api/settings/general"))
        .json(&json!({ "theme": "light", "columns": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(saved.status(), StatusCode::OK);
    let saved: Value = saved.json().await.unwrap();
    assert_eq!(saved["response"], json!({ "ok": true }));

    let loaded: Value = app
        .http
        .get(app.url("/api/settings/general"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded["response"]["theme"], "light");
    assert_eq!(loaded["response"]["columns"], 3);
    assert_eq!(loaded["response"]["layout"], "layout3");
}

#[tokio::test]
async fn test_telegram_settings_are_sanitized() {
    let app = spawn_app().await;

    app.http
        .put(app.url("/api/settings/telegram"))
        .json(&json!({ "enabled": 1, "token": "bot:abc", "chat_id": 777, "extra": true }))
        .send()
        .await
        .unwrap();

    let loaded: Value = app
        .http
        .get(app.url("/api/settings/telegram"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        loaded["response"],
        json!({ "enabled": true, "token": "bot:abc", "chat_id": "777" })
    );

    let on_disk = app.dir.path().join("data").join("telegram_settings.json");
    assert!(on_disk.exists());
}

#[tokio::test]
async fn test_settings_save_failure_is_reported() {
    let app = spawn_app().await;
    std::fs::remove_dir_all(app.dir.path().join("data")).unwrap();

    let response = app
        .http
        .put(app.url("/api/settings/general"))
        .json(&json!({ "theme": "light" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "SETTINGS_SAVE_FAILED");

    let response = app
        .http
        .put(app.url("/api/settings/telegram"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "TELEGRAM_SAVE_FAILED");
}
