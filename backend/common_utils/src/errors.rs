//! Errors shared across the workspace.

/// Result carrying an [`error_stack::Report`] of `E`.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Invalid value provided: {message}")]
    InvalidValue { message: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ParsingError {
    #[error("Failed to parse email")]
    EmailParsingError,
    #[error("Failed to parse decimal value")]
    DecimalParsingError,
}
