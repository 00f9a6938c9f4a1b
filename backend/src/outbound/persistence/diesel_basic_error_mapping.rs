//! Translation of pool and Diesel failures into repository port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::PersonRepositoryError;

use super::pool::PoolError;

/// Map pool errors into repository connection errors.
pub(super) fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    PersonRepositoryError::connection(message)
}

/// Map Diesel errors into repository errors.
///
/// Only a closed connection counts as a connectivity failure; every other
/// variant is a query failure. Driver messages are logged at debug level and
/// replaced by fixed strings so SQL details never reach callers.
pub(super) fn map_diesel_error(error: DieselError) -> PersonRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => PersonRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersonRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _)
        | DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, _) => {
            PersonRepositoryError::query("person record violates table constraints")
        }
        _ => PersonRepositoryError::query("database error"),
    }
}
