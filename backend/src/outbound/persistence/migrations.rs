//! Embedded schema migrations.
//!
//! Migrations are compiled into the binary from `backend/migrations` and
//! applied at startup before the pool is handed to repositories. Diesel's
//! migration harness needs a synchronous connection, so the work runs on the
//! blocking thread pool.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Embedded migrations from the backend/migrations directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying schema migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    /// The blocking migration task panicked or was cancelled.
    #[error("migration task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Apply every pending migration against `database_url`.
///
/// Returns the number of migrations that were applied.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection cannot be established or a
/// migration fails.
pub async fn run_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let database_url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || apply_pending(&database_url)).await??;
    info!(applied, "database migrations complete");
    Ok(applied)
}

fn apply_pending(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|versions| versions.len())
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::migration::MigrationSource;
    use rstest::rstest;

    #[rstest]
    fn embedded_migrations_create_people_table() {
        let migrations =
            MigrationSource::<diesel::pg::Pg>::migrations(&MIGRATIONS).expect("embedded migrations");

        assert_eq!(migrations.len(), 1);
        assert!(migrations[0].name().to_string().ends_with("create_people"));
    }

    #[tokio::test]
    async fn unreachable_database_reports_connect_error() {
        let error = run_migrations("postgres://invalid host/people")
            .await
            .expect_err("connection must fail");

        assert!(matches!(error, MigrationError::Connect(_)));
    }
}
