use thiserror::Error;

pub mod database;
pub mod validation;

pub use database::DatabaseError;
pub use validation::ValidationError;

/// Internal error type for store and gateway operations
///
/// Separates infrastructure errors (database) from domain errors (validation).
/// Not exposed via API - endpoints convert to ItemError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
