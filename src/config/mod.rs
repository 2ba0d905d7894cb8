//! Merchant configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `OGONE` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use ogone_gateway::config::MerchantConfig;
//!
//! let config = MerchantConfig::from_env().expect("Failed to load configuration");
//! println!("Gateway endpoint: {}", config.environment.endpoint());
//! ```

mod error;
mod merchant;

pub use error::{ConfigError, ValidationError};
pub use merchant::{Environment, MerchantConfig};
