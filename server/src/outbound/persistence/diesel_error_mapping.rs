//! Mapping from Diesel and pool failures to domain persistence errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::InteractError;

/// Collapse interact failures into the shared repository error.
pub(super) fn map_interact_error(error: InteractError) -> RepositoryError {
    match error {
        InteractError::Checkout { message } | InteractError::Task { message } => {
            RepositoryError::connection(message)
        }
        InteractError::Query(err) => map_diesel_error(err),
    }
}

fn map_diesel_error(error: DieselError) -> RepositoryError {
    debug!(error = %error, "diesel operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::duplicate(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            RepositoryError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => RepositoryError::query(info.message().to_owned()),
        other => RepositoryError::query(other.to_string()),
    }
}
