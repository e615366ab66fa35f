/// User agent string sent with every outbound request
pub const USER_AGENT: &str = "suyatrade/0.1.0";
/// Default base URL of the Kiwoom mock REST API
pub const DEFAULT_BASE_URL: &str = "https://mockapi.kiwoom.com";
/// Default account product code (`ACNT_PRDT_CD`)
pub const DEFAULT_ACCOUNT_PRODUCT_CODE: &str = "01";

/// Path of the token endpoint, relative to the base URL
pub const TOKEN_PATH: &str = "/oauth2/token";
/// OAuth grant type sent in the token request body
pub const TOKEN_GRANT_TYPE: &str = "client_credentials";
/// Response fields that may carry the token, in priority order
pub const TOKEN_FIELD_NAMES: [&str; 3] = ["access_token", "accessToken", "token"];
/// Lifetime assigned to a freshly acquired token (50 minutes)
pub const TOKEN_LIFETIME_SECS: i64 = 50 * 60;
/// A cached token with less remaining validity than this is refreshed
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;
/// Default number of token request attempts
pub const DEFAULT_TOKEN_MAX_ATTEMPTS: u32 = 3;
/// Default delay between token attempts after a transient failure
pub const DEFAULT_TOKEN_RETRY_DELAY_MS: u64 = 1200;
/// Per-call timeout for token requests
pub const DEFAULT_TOKEN_TIMEOUT_SECS: u64 = 12;
/// Per-call timeout for authenticated requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Number of token characters shown by the debug endpoint
pub const TOKEN_PREFIX_LEN: usize = 24;

/// Synthetic status used when a remote call never produced an HTTP response
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;

/// Path of the cash order endpoint
pub const ORDER_PATH: &str = "/api/dostk/ordr";
/// Operation id of a cash buy
pub const BUY_OPERATION_ID: &str = "kt10000";
/// Operation id of a cash sell
pub const SELL_OPERATION_ID: &str = "kt10001";
/// `ord_dvsn` value of a market order
pub const MARKET_ORDER_DIVISION: &str = "01";
/// `ord_dvsn` value of a limit order
pub const LIMIT_ORDER_DIVISION: &str = "00";
/// Outbound header carrying the caller's idempotency key
pub const IDEMPOTENCY_HEADER: &str = "x-idempotency-key";

/// Operation id of the deposit query
pub const DEPOSIT_OPERATION_ID: &str = "kt00001";
/// Candidate paths of the deposit query, in the order they are tried
pub const DEPOSIT_PATHS: [&str; 3] = [
    "/api/dsacc/deposit",
    "/api/accno/deposit",
    "/api/acc/deposit",
];
/// Operation id of the balance query
pub const BALANCE_OPERATION_ID: &str = "kt00017";
/// Candidate paths of the balance query, in the order they are tried
pub const BALANCE_PATHS: [&str; 3] = [
    "/api/dsacc/balance",
    "/api/accno/balance",
    "/api/acc/balance",
];

/// Default listen address of the HTTP facade
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5174";
/// Default directory holding the dashboard's static files
pub const DEFAULT_WEB_DIR: &str = "web";
/// Default directory holding the settings documents
pub const DEFAULT_DATA_DIR: &str = "data";
/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "suyatrade_web_rest";
