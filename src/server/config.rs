use std::sync::OnceLock;

use crate::server::error::{config::ConfigError, AppError};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

static DEBUG: OnceLock<bool> = OnceLock::new();

/// Whether debug mode is enabled (`APP_DEBUG=1`/`true`).
///
/// Controls whether internal error details are included in 500 responses.
/// Read lazily so error responses can consult it without threading the
/// config through every `IntoResponse` impl.
pub fn debug_enabled() -> bool {
    *DEBUG.get_or_init(|| {
        std::env::var("APP_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

pub struct Config {
    pub database_url: String,

    /// Public base URL of the site, used for sitemap/robots links.
    pub app_url: String,

    /// Root directory for media binaries (`<storage_dir>/<disk>/<name>`).
    pub storage_dir: String,

    /// Shared secret for the deploy-token middleware. Optional: requests to
    /// guarded routes fail with 500 until it is configured.
    pub deploy_token: Option<String>,

    /// Telegram Bot API base URL; overridable for tests.
    pub telegram_api_url: String,

    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
            storage_dir: std::env::var("STORAGE_DIR").unwrap_or_else(|_| "storage".to_string()),
            deploy_token: std::env::var("DEPLOY_TOKEN").ok(),
            telegram_api_url: std::env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| TELEGRAM_API_URL.to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}
