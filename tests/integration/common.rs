// Common utilities for integration tests

use mockito::{Mock, ServerGuard};
use suyatrade::model::retry::RetryConfig;
use suyatrade::prelude::*;
use suyatrade::server::serve;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const TEST_TOKEN: &str = "integration-token-0123456789abcdef";

/// A running facade wired to a mockito stand-in for the remote service
pub struct TestApp {
    pub base: String,
    pub remote: ServerGuard,
    pub http: reqwest::Client,
    pub dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Mocks a successful token exchange, expected `hits` times
    pub async fn mock_token(&mut self, hits: usize) -> Mock {
        self.remote
            .mock("POST", "/oauth2/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"token":"{TEST_TOKEN}","token_type":"bearer"}}"#))
            .expect(hits)
            .create_async()
            .await
    }
}

/// Starts the facade on a random port
pub async fn spawn_app() -> TestApp {
    setup_logger();

    let remote = mockito::Server::new_async().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let web_dir = dir.path().join("web");
    std::fs::create_dir_all(&web_dir).unwrap();
    std::fs::write(web_dir.join("index.html"), "<h1>suyatrade</h1>").unwrap();

    let mut config = Config::with_credentials(Credentials {
        app_key: "it-app-key".to_string(),
        app_secret: "it-app-secret".to_string(),
        base_url: remote.url(),
        account_no: "81234567".to_string(),
        account_product_code: "01".to_string(),
    });
    config.retry = RetryConfig::with_max_attempts_and_delay(3, 0);
    config.server.web_dir = web_dir.to_string_lossy().to_string();

    let settings = SettingsStore::open(dir.path().join("data")).await.unwrap();
    let client = Client::new(config).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        let _ = serve(listener, AppState::new(client, settings)).await;
    });

    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        base: format!("http://127.0.0.1:{port}"),
        remote,
        http,
        dir,
    }
}
