//! Application state shared across all request handlers.
//!
//! `AppState` holds the shared resources needed by the application. It is
//! initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone:
//! `DatabaseConnection` is a pooled handle and `reqwest::Client` wraps an
//! `Arc` internally.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Telegram Bot API requests.
    ///
    /// Configured with redirects disabled to prevent SSRF through
    /// user-supplied webhook URLs.
    pub http_client: reqwest::Client,

    /// Public base URL of the site, used when generating sitemap and
    /// robots.txt links.
    pub app_url: String,

    /// Root directory for media binaries referenced by catalog entities.
    pub storage_dir: String,

    /// Shared secret checked by the deploy-token middleware.
    pub deploy_token: Option<String>,

    /// Telegram Bot API base URL (overridable for tests).
    pub telegram_api_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        config: &crate::server::config::Config,
    ) -> Self {
        Self {
            db,
            http_client,
            app_url: config.app_url.clone(),
            storage_dir: config.storage_dir.clone(),
            deploy_token: config.deploy_token.clone(),
            telegram_api_url: config.telegram_api_url.clone(),
        }
    }
}
