use address_validator::{NetworkType, ValidateOptions};
use chain_registry::ChainId;

/// Chain identifier passed across FFI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum Chain {
    Ethereum,
    Polygon,
    Arbitrum,
    Bitcoin,
    Ton,
    Tron,
    Solana,
    Unknown,
}

impl From<ChainId> for Chain {
    fn from(chain: ChainId) -> Self {
        match chain {
            ChainId::Ethereum => Chain::Ethereum,
            ChainId::Polygon => Chain::Polygon,
            ChainId::Arbitrum => Chain::Arbitrum,
            ChainId::Bitcoin => Chain::Bitcoin,
            ChainId::Ton => Chain::Ton,
            ChainId::Tron => Chain::Tron,
            ChainId::Solana => Chain::Solana,
            ChainId::Unknown => Chain::Unknown,
        }
    }
}

impl From<Chain> for ChainId {
    fn from(chain: Chain) -> Self {
        match chain {
            Chain::Ethereum => ChainId::Ethereum,
            Chain::Polygon => ChainId::Polygon,
            Chain::Arbitrum => ChainId::Arbitrum,
            Chain::Bitcoin => ChainId::Bitcoin,
            Chain::Ton => ChainId::Ton,
            Chain::Tron => ChainId::Tron,
            Chain::Solana => ChainId::Solana,
            Chain::Unknown => ChainId::Unknown,
        }
    }
}

/// Network type passed across FFI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum Network {
    Prod,
    Test,
}

impl From<NetworkType> for Network {
    fn from(network: NetworkType) -> Self {
        match network {
            NetworkType::Prod => Network::Prod,
            NetworkType::Test => Network::Test,
        }
    }
}

impl From<Network> for NetworkType {
    fn from(network: Network) -> Self {
        match network {
            Network::Prod => NetworkType::Prod,
            Network::Test => NetworkType::Test,
        }
    }
}

/// Validator options passed across FFI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, uniffi::Record)]
pub struct ValidateOptionsData {
    pub network_type: Option<Network>,
}

impl From<ValidateOptions> for ValidateOptionsData {
    fn from(options: ValidateOptions) -> Self {
        Self {
            network_type: options.network_type.map(Network::from),
        }
    }
}

impl From<ValidateOptionsData> for ValidateOptions {
    fn from(options: ValidateOptionsData) -> Self {
        Self {
            network_type: options.network_type.map(NetworkType::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_mirror_is_lossless() {
        for chain in ChainId::ALL {
            assert_eq!(ChainId::from(Chain::from(chain)), chain);
        }
    }

    #[test]
    fn network_mirror_is_lossless() {
        for network in [NetworkType::Prod, NetworkType::Test] {
            assert_eq!(NetworkType::from(Network::from(network)), network);
        }
    }

    #[test]
    fn options_conversion() {
        let data = ValidateOptionsData::from(ValidateOptions::test());
        assert_eq!(data.network_type, Some(Network::Test));
        assert_eq!(ValidateOptions::from(data), ValidateOptions::test());
        assert_eq!(
            ValidateOptions::from(ValidateOptionsData::default()),
            ValidateOptions::new()
        );
    }
}
