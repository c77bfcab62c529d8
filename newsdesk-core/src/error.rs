//! Validation errors for client-supplied input

use thiserror::Error;

/// Input rejected before it reaches the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No identifier was supplied
    #[error("article id is required")]
    MissingIdentifier,

    /// The identifier is not a finite number
    #[error("article id '{value}' is not a number")]
    InvalidIdentifier { value: String },
}
