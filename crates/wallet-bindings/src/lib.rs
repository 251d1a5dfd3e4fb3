//! FFI surface for mobile and JS-bridge consumers.
//!
//! Mirrors the chain registry and the validator contract as UniFFI types so
//! Swift and Kotlin code can use the same chain tokens and hand their
//! platform address validator to Rust.

pub mod types;
pub mod validator;

use std::sync::Arc;

use address_validator::Validator;
use chain_registry::ChainId;

pub use types::{Chain, Network, ValidateOptionsData};
pub use validator::{AddressValidator, ForeignValidator};

uniffi::setup_scaffolding!();

// ─── UniFFI-exported functions ───────────────────────────────────────
// UniFFI passes owned String values across FFI, so exported functions
// take owned arguments.

/// Canonical lowercase token for a chain
#[uniffi::export]
pub fn chain_token(chain: Chain) -> String {
    ChainId::from(chain).as_str().to_string()
}

/// Map any string to a chain, falling back to `Unknown`
#[uniffi::export]
pub fn chain_from_token(token: String) -> Chain {
    ChainId::from_token(&token).into()
}

/// Every chain in the registry, `Unknown` last
#[uniffi::export]
pub fn all_chains() -> Vec<Chain> {
    ChainId::ALL.into_iter().map(Chain::from).collect()
}

#[uniffi::export]
pub fn is_known_chain(chain: Chain) -> bool {
    ChainId::from(chain).is_known()
}

/// Run a platform validator through the Rust validator contract
#[uniffi::export]
pub fn validate_address(
    validator: Arc<dyn AddressValidator>,
    address: String,
    currency: String,
    options: Option<ValidateOptionsData>,
) -> bool {
    let options = options.map(address_validator::ValidateOptions::from);
    ForeignValidator::new(validator).validate(&address, &currency, options.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    impl AddressValidator for AcceptAll {
        fn validate(
            &self,
            _address: String,
            _currency: String,
            _options: Option<ValidateOptionsData>,
        ) -> bool {
            true
        }
    }

    #[test]
    fn test_chain_token() {
        assert_eq!(chain_token(Chain::Solana), "solana");
        assert_eq!(chain_token(Chain::Unknown), "unknown");
    }

    #[test]
    fn test_chain_from_token() {
        assert_eq!(chain_from_token("tron".into()), Chain::Tron);
        assert_eq!(chain_from_token("near".into()), Chain::Unknown);
    }

    #[test]
    fn test_all_chains() {
        let chains = all_chains();
        assert_eq!(chains.len(), 8);
        assert_eq!(chains.first(), Some(&Chain::Ethereum));
        assert_eq!(chains.last(), Some(&Chain::Unknown));
    }

    #[test]
    fn test_is_known_chain() {
        assert!(is_known_chain(Chain::Bitcoin));
        assert!(!is_known_chain(Chain::Unknown));
    }

    #[test]
    fn test_validate_address_accept_all() {
        let validator: Arc<dyn AddressValidator> = Arc::new(AcceptAll);
        assert!(validate_address(validator, "anything".into(), "bitcoin".into(), None));
    }
}
