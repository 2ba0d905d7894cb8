//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No PSPID configured")]
    MissingPspid,

    #[error("Invalid gateway environment {0:?}, expected \"test\" or \"prod\"")]
    InvalidEnvironment(String),

    #[error("No SHA-IN passphrase configured")]
    MissingShaIn,

    #[error("No SHA-OUT passphrase configured")]
    MissingShaOut,
}
