//! Payment request error types.

use thiserror::Error;

/// Errors raised while building an outgoing payment request.
///
/// All variants are caller mistakes. Nothing here is retryable; the
/// request must be corrected and rebuilt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// A configured or call-supplied override named a field outside the
    /// supported gateway field table.
    #[error("Unsupported field override: {0}")]
    UnsupportedField(String),

    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    /// Amount is negative or does not fit the gateway's integer
    /// minor-unit representation.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency codes are three ASCII letters (ISO 4217).
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("Field {field} exceeds the gateway maximum of {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}
