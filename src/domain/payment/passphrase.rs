//! SHA passphrase handling.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// A gateway signing passphrase (SHA-IN or SHA-OUT).
///
/// Wraps [`secrecy::SecretString`] so the value is redacted from `Debug`
/// output and zeroized on drop. The raw material is only exposed to
/// signature composition.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Passphrase(SecretString);

impl Passphrase {
    /// Creates a passphrase from raw string material.
    pub fn new(material: impl Into<String>) -> Self {
        Self(SecretString::new(material.into()))
    }

    /// Exposes the raw passphrase for digest composition.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// True when no passphrase material is present.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_material() {
        let passphrase = Passphrase::new("Mysecretsig1875!?");
        let debug = format!("{:?}", passphrase);
        assert!(!debug.contains("Mysecretsig1875"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn expose_returns_raw_material() {
        let passphrase = Passphrase::new("Mysecretsig1875!?");
        assert_eq!(passphrase.expose(), "Mysecretsig1875!?");
    }

    #[test]
    fn empty_passphrase_is_detected() {
        assert!(Passphrase::new("").is_empty());
        assert!(!Passphrase::new("x").is_empty());
    }
}
