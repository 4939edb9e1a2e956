use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the database described by the configuration.
///
/// The pool is bounded by `DB_MAX_CONNECTIONS`. Schema setup is a separate step, see
/// [`ensure_schema`].
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError::DbErr)` - Database unreachable or URL rejected
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_connections)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Brings the schema up to date by running pending migrations.
///
/// Applied migrations are recorded in `seaql_migrations`, so running this against an already
/// migrated database is a no-op and leaves existing rows untouched.
///
/// # Returns
/// - `Ok(())` - Schema is current
/// - `Err(AppError::DbErr)` - A migration failed
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    Migrator::up(db, None).await?;

    tracing::info!("Database schema is up to date");

    Ok(())
}
