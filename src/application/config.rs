use crate::constants::{
    DEFAULT_ACCOUNT_PRODUCT_CODE, DEFAULT_BASE_URL, DEFAULT_BIND_ADDR, DEFAULT_DATA_DIR,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_TIMEOUT_SECS, DEFAULT_WEB_DIR,
};
use crate::model::endpoint::{EndpointCandidate, balance_candidates, deposit_candidates};
use crate::model::normalize::FieldAliases;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Credentials of the remote brokerage account
///
/// Read once at startup and never mutated. The app secret is never serialized,
/// so printing a configuration does not leak it.
pub struct Credentials {
    /// App key issued by the broker
    pub app_key: String,
    /// App secret issued by the broker
    #[serde(skip_serializing, default)]
    pub app_secret: String,
    /// Base URL of the remote REST API
    pub base_url: String,
    /// Account number (`CANO`)
    pub account_no: String,
    /// Account product code (`ACNT_PRDT_CD`)
    pub account_product_code: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Timeouts of outbound calls
pub struct RestApiConfig {
    /// Timeout in seconds of authenticated calls
    pub timeout: u64,
    /// Timeout in seconds of token requests
    pub token_timeout: u64,
}

impl RestApiConfig {
    /// Timeout of authenticated calls
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Timeout of token requests
    #[must_use]
    pub fn token_request_timeout(&self) -> Duration {
        Duration::from_secs(self.token_timeout)
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            token_timeout: DEFAULT_TOKEN_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// HTTP facade settings
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1:5174`
    pub bind_addr: String,
    /// Directory served under `/web`
    pub web_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            web_dir: DEFAULT_WEB_DIR.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Settings store location
pub struct StorageConfig {
    /// Directory holding the settings documents
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Candidate endpoints of the account queries, tried in the listed order
pub struct EndpointConfig {
    /// Deposit query candidates
    pub deposit: Vec<EndpointCandidate>,
    /// Balance query candidates
    pub balance: Vec<EndpointCandidate>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            deposit: deposit_candidates(),
            balance: balance_candidates(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration
pub struct Config {
    /// Remote account credentials
    pub credentials: Credentials,
    /// Outbound call timeouts
    pub rest_api: RestApiConfig,
    /// Token request budget
    pub retry: RetryConfig,
    /// Candidate endpoints of the account queries
    pub endpoints: EndpointConfig,
    /// Alias lists used to normalize account figures
    pub aliases: FieldAliases,
    /// HTTP facade settings
    pub server: ServerConfig,
    /// Settings store location
    pub storage: StorageConfig,
    /// Verbose diagnostics
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    ///
    /// Missing credentials are logged but do not abort: the token request will
    /// fail with the remote service's own diagnostic instead.
    pub fn new() -> Self {
        match dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        let app_key: String = get_env_or_default("APP_KEY", String::new());
        let app_secret: String = get_env_or_default("APP_SECRET", String::new());
        let account_no: String = get_env_or_default("ACCOUNT_NO", String::new());

        if app_key.is_empty() {
            error!("APP_KEY not found in environment variables or .env file");
        }
        if app_secret.is_empty() {
            error!("APP_SECRET not found in environment variables or .env file");
        }
        if account_no.is_empty() {
            error!("ACCOUNT_NO not found in environment variables or .env file");
        }

        let aliases = match get_env_or_none::<String>("FIELD_ALIASES_FILE") {
            Some(path) => match FieldAliases::from_file(&path) {
                Ok(aliases) => {
                    info!("Loaded field aliases from {}", path);
                    aliases
                }
                Err(e) => {
                    error!("Failed to load field aliases from {}: {}, using defaults", path, e);
                    FieldAliases::default()
                }
            },
            None => FieldAliases::default(),
        };

        Config {
            credentials: Credentials {
                app_key,
                app_secret,
                base_url: get_env_or_default("MOCK_BASE_URL", DEFAULT_BASE_URL.to_string()),
                account_no,
                account_product_code: get_env_or_default(
                    "ACNT_PRDT_CD",
                    DEFAULT_ACCOUNT_PRODUCT_CODE.to_string(),
                ),
            },
            rest_api: RestApiConfig {
                timeout: get_env_or_default("REST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                token_timeout: get_env_or_default("TOKEN_TIMEOUT_SECS", DEFAULT_TOKEN_TIMEOUT_SECS),
            },
            retry: RetryConfig::new(),
            endpoints: EndpointConfig::default(),
            aliases,
            server: ServerConfig {
                bind_addr: get_env_or_default("BIND_ADDR", DEFAULT_BIND_ADDR.to_string()),
                web_dir: get_env_or_default("WEB_DIR", DEFAULT_WEB_DIR.to_string()),
            },
            storage: StorageConfig {
                data_dir: get_env_or_default("DATA_DIR", DEFAULT_DATA_DIR.to_string()),
            },
            debug: get_env_flag("DEBUG"),
        }
    }

    /// Builds a configuration around explicit credentials, without reading the environment
    #[must_use]
    pub fn with_credentials(credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig::default(),
            retry: RetryConfig::standard(),
            endpoints: EndpointConfig::default(),
            aliases: FieldAliases::default(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            debug: false,
        }
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.credentials.base_url.trim_end_matches('/')
    }
}
