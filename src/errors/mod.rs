// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::ItemError;
pub use internal::{InternalError, ValidationError};

#[cfg(test)]
mod items_test;
