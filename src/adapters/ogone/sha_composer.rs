//! Canonical signature composition for the gateway's SHA scheme.
//!
//! The gateway signs a parameter set by sorting the signable parameters
//! alphabetically, concatenating `NAME=value<passphrase>` for each, and
//! hashing the result. The digest travels as uppercase hexadecimal in the
//! `SHASIGN` parameter.
//!
//! # Security
//!
//! - The passphrase is appended after every pair, as the gateway computes it
//! - Empty values and the `SHASIGN` parameter itself never enter the digest

use std::collections::BTreeMap;

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::domain::payment::Passphrase;
use crate::ports::{ParameterFilter, ShaComposer};

use super::parameter_filter;

/// Digest algorithm for the SHASIGN.
///
/// Must match the algorithm selected in the merchant's gateway back
/// office. SHA-1 is the gateway's historical default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    fn digest_hex(&self, material: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha1 => hex::encode_upper(Sha1::digest(material)),
            HashAlgorithm::Sha256 => hex::encode_upper(Sha256::digest(material)),
            HashAlgorithm::Sha512 => hex::encode_upper(Sha512::digest(material)),
        }
    }
}

/// Signature composer covering every signable parameter.
///
/// Normalizes parameter names to uppercase, drops empty values and the
/// signature parameter, applies the direction whitelist, and digests the
/// sorted concatenation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllParametersShaComposer {
    algorithm: HashAlgorithm,
}

impl AllParametersShaComposer {
    /// Creates a composer using the gateway's default algorithm (SHA-1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a different digest algorithm.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl ShaComposer for AllParametersShaComposer {
    fn compose(
        &self,
        params: &BTreeMap<String, String>,
        passphrase: &Passphrase,
        filter: ParameterFilter,
    ) -> String {
        // 1. Normalize names, drop unsignable parameters
        let mut signable: BTreeMap<String, &str> = BTreeMap::new();
        for (name, value) in params {
            let name = name.trim().to_ascii_uppercase();
            if value.is_empty() || name == "SHASIGN" {
                continue;
            }
            if !parameter_filter::retains(filter, &name) {
                continue;
            }
            signable.insert(name, value);
        }

        // 2. Concatenate NAME=value<passphrase> in sorted name order
        let mut material = String::new();
        for (name, value) in &signable {
            material.push_str(name);
            material.push('=');
            material.push_str(value);
            material.push_str(passphrase.expose());
        }

        // 3. Digest as uppercase hex
        self.algorithm.digest_hex(material.as_bytes())
    }
}
