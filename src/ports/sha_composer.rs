//! Signature composition port.

use std::collections::BTreeMap;

use crate::domain::payment::Passphrase;

/// Direction-specific signing policy.
///
/// The gateway signs each direction of the exchange against its own
/// whitelist of parameters: outgoing requests under the SHA-IN contract,
/// incoming notifications under the SHA-OUT contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterFilter {
    /// Outgoing request parameters.
    ShaIn,
    /// Incoming notification (feedback) parameters.
    ShaOut,
}

/// Port for computing the gateway signature over a parameter mapping.
///
/// Implementations must produce a deterministic digest over a filtered,
/// ordered view of the parameters using the given secret, so that the same
/// mapping always signs to the same value regardless of input order.
pub trait ShaComposer: Send + Sync {
    /// Composes the signature for the given parameters.
    ///
    /// The returned string is the digest in the textual form the gateway
    /// exchanges (uppercase hexadecimal for the standard scheme).
    fn compose(
        &self,
        params: &BTreeMap<String, String>,
        passphrase: &Passphrase,
        filter: ParameterFilter,
    ) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn sha_composer_is_object_safe() {
        fn _accepts_dyn(_composer: &dyn ShaComposer) {}
    }
}
