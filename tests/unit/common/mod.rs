// Shared helpers for the unit tests

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use suyatrade::application::config::{Config, Credentials};
use suyatrade::model::http::{RemoteExecutor, RemoteRequest, RemoteResponse};
use suyatrade::model::retry::RetryConfig;

pub const TEST_BASE_URL: &str = "http://mock.local";

/// Executor that answers from a script and records every request
///
/// Once the script is exhausted every call gets a 404.
pub struct ScriptedExecutor {
    script: Mutex<VecDeque<RemoteResponse>>,
    requests: Mutex<Vec<RemoteRequest>>,
}

impl ScriptedExecutor {
    pub fn new(responses: Vec<RemoteResponse>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.ends_with(path))
            .count()
    }
}

#[async_trait]
impl RemoteExecutor for ScriptedExecutor {
    async fn send(&self, request: RemoteRequest) -> RemoteResponse {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RemoteResponse::new(404, Value::Null))
    }
}

pub fn response(status: i32, body: Value) -> RemoteResponse {
    RemoteResponse::new(status, body)
}

pub fn token_ok(token: &str) -> RemoteResponse {
    response(200, serde_json::json!({ "token": token, "return_code": 0 }))
}

pub fn test_credentials() -> Credentials {
    Credentials {
        app_key: "test-app-key".to_string(),
        app_secret: "test-app-secret".to_string(),
        base_url: TEST_BASE_URL.to_string(),
        account_no: "81234567".to_string(),
        account_product_code: "01".to_string(),
    }
}

/// Configuration with the standard attempt budget but no backoff delay
pub fn test_config() -> Config {
    let mut config = Config::with_credentials(test_credentials());
    config.retry = RetryConfig::with_max_attempts_and_delay(3, 0);
    config
}
