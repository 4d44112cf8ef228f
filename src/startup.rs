use time::Duration;
use tower_sessions::{cookie::Key, service::SignedCookie, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{config::Config, error::AppError};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending migrations so the schema is up to
/// date before the application accesses it. Migrations are idempotent; running
/// them on every startup is safe.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same SQLite database.
///
/// Sessions live in a dedicated table managed by the store; cookies are signed
/// with a key derived from the configured session secret, so a tampered cookie
/// never resolves to a user. Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();

    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Session store migration failed: {}", e)))?;

    let key = Key::derive_from(config.session_secret.as_bytes());

    Ok(SessionManagerLayer::new(session_store)
        .with_signed(key)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for advisory-provider requests.
///
/// The provider call is the one slow external operation in the system; the
/// client carries a hard timeout so a hung upstream cannot stall a request
/// indefinitely. Redirects are disabled.
pub fn setup_http_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    Ok(client)
}
