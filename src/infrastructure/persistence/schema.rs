//! Schema setup and verification.
//!
//! The schema lives in `migrations/` and is embedded at compile time. The
//! server calls [`setup`] once before it starts accepting traffic; the admin
//! CLI exposes the same routine as `admin db migrate`.

use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};
use tracing::info;

/// Table holding every short link.
pub const LINKS_TABLE: &str = "urls";

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors raised while preparing the database schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),

    #[error("failed to verify schema: {0}")]
    Query(#[from] sqlx::Error),

    #[error("table `{0}` not found after migration")]
    MissingTable(&'static str),
}

/// Applies pending migrations. Already-applied migrations are skipped.
pub async fn apply(pool: &PgPool) -> Result<(), SchemaError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Checks that the links table exists in the current schema.
pub async fn verify(pool: &PgPool) -> Result<(), SchemaError> {
    let found: Option<String> = sqlx::query_scalar(
        r#"
        SELECT tablename::text
        FROM pg_tables
        WHERE schemaname = current_schema() AND tablename = $1
        "#,
    )
    .bind(LINKS_TABLE)
    .fetch_optional(pool)
    .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(SchemaError::MissingTable(LINKS_TABLE)),
    }
}

/// Applies the schema, then verifies it.
pub async fn setup(pool: &PgPool) -> Result<(), SchemaError> {
    apply(pool).await?;
    verify(pool).await?;
    info!(table = LINKS_TABLE, "Database schema verified");
    Ok(())
}
