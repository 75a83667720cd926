use crate::errors::internal::{DatabaseError, InternalError};
use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

/// Error body returned by the item endpoints
#[derive(Object, Debug)]
pub struct ItemErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "item_bad_request_handler")]
pub enum ItemError {
    /// Request body failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ItemErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemErrorResponse>),
}

/// Maps request parsing failures (malformed JSON) to a 400 body
fn item_bad_request_handler(err: poem::Error) -> ItemError {
    tracing::debug!("Rejected malformed item request: {}", err);
    ItemError::validation_failed(err.to_string())
}

impl ItemError {
    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        ItemError::ValidationFailed(Json(ItemErrorResponse {
            error: message.into(),
        }))
    }

    /// Convert InternalError to ItemError
    ///
    /// The single conversion point from internal errors to API errors.
    /// Store failure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Validation(validation) => Self::validation_failed(validation.to_string()),
            InternalError::Database(DatabaseError::Operation { operation, .. }) => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Database(_) => {
                tracing::error!("Unexpected database error in item operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        ItemError::InternalError(Json(ItemErrorResponse {
            error: "Internal server error".to_string(),
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemError::ValidationFailed(json) => json.0.error.clone(),
            ItemError::InternalError(json) => json.0.error.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::ValidationFailed(_) => 400,
            ItemError::InternalError(_) => 500,
        }
    }
}

impl From<InternalError> for ItemError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
