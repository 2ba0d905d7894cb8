//! Merchant account configuration

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::domain::payment::Passphrase;

use super::error::{ConfigError, ValidationError};

/// Test gateway page; transactions are simulated.
const TEST_ENDPOINT: &str = "https://secure.ogone.com/ncol/test/orderstandard_utf8.asp";

/// Production gateway page; transactions are real.
const PROD_ENDPOINT: &str = "https://secure.ogone.com/ncol/prod/orderstandard_utf8.asp";

/// Gateway environment
///
/// Selects which gateway endpoint receives the payment form. The
/// recognized tags are exactly `"test"` and `"prod"`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Test,
    Prod,
}

impl Environment {
    /// The order-standard endpoint for this environment.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Environment::Test => TEST_ENDPOINT,
            Environment::Prod => PROD_ENDPOINT,
        }
    }

    /// The configuration tag for this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }

    /// Check if pointed at the production gateway.
    pub fn is_production(&self) -> bool {
        *self == Environment::Prod
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "test" => Ok(Environment::Test),
            "prod" => Ok(Environment::Prod),
            other => Err(ValidationError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merchant account configuration
///
/// Everything the gateway needs to attribute and verify an exchange: the
/// merchant identifier, the target environment, the two signing
/// passphrases, and optional request-field overrides applied to every
/// outgoing payment request.
#[derive(Debug, Clone, Deserialize)]
pub struct MerchantConfig {
    /// Merchant identifier (PSPID) assigned by the gateway
    pub pspid: String,

    /// Target gateway environment
    pub environment: Environment,

    /// Passphrase signing outgoing requests (SHA-IN)
    pub sha_in: Passphrase,

    /// Passphrase verifying incoming notifications (SHA-OUT)
    pub sha_out: Passphrase,

    /// Request-field overrides applied to every payment request
    ///
    /// Keys are gateway field names, matched case-insensitively against
    /// the supported field table at request-build time.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl MerchantConfig {
    /// Create a merchant configuration from raw settings.
    ///
    /// The environment tag is parsed and all invariants are checked, so a
    /// returned configuration is ready for use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the PSPID or a passphrase is empty, or
    /// when the environment tag is not `"test"` or `"prod"`.
    pub fn new(
        pspid: impl Into<String>,
        environment: &str,
        sha_in: impl Into<String>,
        sha_out: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            pspid: pspid.into(),
            environment: environment.parse()?,
            sha_in: Passphrase::new(sha_in),
            sha_out: Passphrase::new(sha_out),
            options: BTreeMap::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `OGONE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Validates the result
    ///
    /// # Environment Variable Format
    ///
    /// - `OGONE__PSPID=myshop` -> `pspid = myshop`
    /// - `OGONE__ENVIRONMENT=test` -> `environment = Test`
    /// - `OGONE__SHA_IN=...` / `OGONE__SHA_OUT=...` -> passphrases
    /// - `OGONE__OPTIONS__TITLE=Checkout` -> `options["title"] = Checkout`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, values
    /// cannot be parsed, or validation fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(config::Environment::default().prefix("OGONE").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Add a request-field override applied to every payment request.
    ///
    /// The name is validated against the field table when a request is
    /// built, not here.
    pub fn with_option(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(field.into(), value.into());
        self
    }

    /// Validate the merchant configuration
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the PSPID or either passphrase is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pspid.is_empty() {
            return Err(ValidationError::MissingPspid);
        }
        if self.sha_in.is_empty() {
            return Err(ValidationError::MissingShaIn);
        }
        if self.sha_out.is_empty() {
            return Err(ValidationError::MissingShaOut);
        }
        Ok(())
    }
}
