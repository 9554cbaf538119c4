use std::time::Duration;

// Backend endpoint serving the version descriptor, relative to the base URL.
pub const VERSION_ENDPOINT: &str = "api/public/version";

// Delay between poll cycles. Fixed by design; not read from the environment.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

// Per-request timeout for the HTTP client.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// Environment variables honored by `AppConfig::from_env`
pub const ENV_BASE_URL: &str = "VERSIONWATCH_BASE_URL";
pub const ENV_LOG_DIR: &str = "VERSIONWATCH_LOG_DIR";

// Base URL used when the environment provides none.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";
