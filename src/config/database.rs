use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::internal::{DatabaseError, InternalError};

/// Connect to the item store
///
/// Does NOT create tables - call `migrate_database()` separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn connect_database(
    bootstrap_settings: &BootstrapSettings,
) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|source| DatabaseError::Connect { source })?;

    tracing::info!("Connected to database: {}", database_url);

    Ok(db)
}

/// Create the items table and its index if they do not exist yet
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
