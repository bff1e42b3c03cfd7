use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the HTTP client used for Telegram Bot API calls.
///
/// Redirects are disabled so a user-supplied webhook URL cannot bounce
/// requests to unexpected hosts.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Seeds the default header menu entries if they are missing.
///
/// Idempotent: each entry is looked up by slug and menu type before being
/// inserted, so repeated startups never duplicate rows.
pub async fn ensure_default_menu(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    use crate::server::data::menu::MenuRepository;

    let repo = MenuRepository::new(db);

    let header_items = [
        ("Products", "/products", 0),
        ("Cases", "/cases", 1),
        ("About", "/about", 2),
        ("Contact", "/contact", 3),
    ];

    for (title, slug, order) in header_items {
        repo.first_or_create(title, slug, "header", order).await?;
    }

    Ok(())
}
