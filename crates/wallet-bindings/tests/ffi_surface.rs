//! Integration tests over the exported FFI functions, using the same calls a
//! Swift or Kotlin client makes.

use std::sync::Arc;

use wallet_bindings::*;

/// Stand-in for a platform validator: bitcoin mainnet addresses start with
/// `1`, `3` or `bc1`; testnet ones with `m`, `n`, `2` or `tb1`.
struct PlatformValidator;

impl AddressValidator for PlatformValidator {
    fn validate(
        &self,
        address: String,
        currency: String,
        options: Option<ValidateOptionsData>,
    ) -> bool {
        if currency != chain_token(Chain::Bitcoin) {
            return false;
        }
        let prefixes: &[&str] = match options.and_then(|o| o.network_type) {
            Some(Network::Test) => &["m", "n", "2", "tb1"],
            _ => &["1", "3", "bc1"],
        };
        prefixes.iter().any(|p| address.starts_with(p))
    }
}

#[test]
fn solana_token_is_solana() {
    assert_eq!(chain_token(Chain::Solana), "solana");
}

#[test]
fn every_chain_round_trips_through_its_token() {
    for chain in all_chains() {
        assert_eq!(chain_from_token(chain_token(chain)), chain);
    }
}

#[test]
fn unrecognised_tokens_map_to_unknown() {
    for token in ["", "ETHEREUM", "bsc", "solana-devnet"] {
        let chain = chain_from_token(token.into());
        assert_eq!(chain, Chain::Unknown);
        assert!(!is_known_chain(chain));
    }
}

#[test]
fn bitcoin_prod_validation_end_to_end() {
    let validator: Arc<dyn AddressValidator> = Arc::new(PlatformValidator);
    let prod = Some(ValidateOptionsData {
        network_type: Some(Network::Prod),
    });

    assert!(validate_address(
        validator.clone(),
        "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".into(),
        "bitcoin".into(),
        prod,
    ));
    assert!(!validate_address(
        validator,
        "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx".into(),
        "bitcoin".into(),
        prod,
    ));
}

#[test]
fn testnet_and_default_options() {
    let validator: Arc<dyn AddressValidator> = Arc::new(PlatformValidator);
    let test = Some(ValidateOptionsData {
        network_type: Some(Network::Test),
    });

    assert!(validate_address(
        validator.clone(),
        "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx".into(),
        "bitcoin".into(),
        test,
    ));
    assert!(validate_address(
        validator.clone(),
        "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq".into(),
        "bitcoin".into(),
        None,
    ));
    assert!(!validate_address(
        validator,
        "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".into(),
        "ethereum".into(),
        None,
    ));
}
