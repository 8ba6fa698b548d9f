//! Schema migrations

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Directory holding the SQL migrations shipped with this crate
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply all pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    migrator.run(pool).await?;
    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
