use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported blockchain networks.
///
/// `Unknown` is the fallback for any chain outside this set. It is a regular
/// value, not an error: callers that must reject unrecognised chains check
/// [`ChainId::is_known`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainId {
    Ethereum,
    Polygon,
    Arbitrum,
    Bitcoin,
    Ton,
    Tron,
    Solana,
    Unknown,
}

impl ChainId {
    /// Every variant, in declaration order.
    pub const ALL: [ChainId; 8] = [
        ChainId::Ethereum,
        ChainId::Polygon,
        ChainId::Arbitrum,
        ChainId::Bitcoin,
        ChainId::Ton,
        ChainId::Tron,
        ChainId::Solana,
        ChainId::Unknown,
    ];

    /// Every variant except `Unknown`.
    pub const KNOWN: [ChainId; 7] = [
        ChainId::Ethereum,
        ChainId::Polygon,
        ChainId::Arbitrum,
        ChainId::Bitcoin,
        ChainId::Ton,
        ChainId::Tron,
        ChainId::Solana,
    ];

    /// Canonical lowercase token for this chain.
    pub const fn as_str(self) -> &'static str {
        match self {
            ChainId::Ethereum => "ethereum",
            ChainId::Polygon => "polygon",
            ChainId::Arbitrum => "arbitrum",
            ChainId::Bitcoin => "bitcoin",
            ChainId::Ton => "ton",
            ChainId::Tron => "tron",
            ChainId::Solana => "solana",
            ChainId::Unknown => "unknown",
        }
    }

    /// Look up a chain by its canonical token.
    ///
    /// Matching is exact: `"Ethereum"` or `" solana"` are not canonical and
    /// map to `Unknown` like any other unrecognised input. This never fails.
    pub fn from_token(token: &str) -> ChainId {
        match ChainId::ALL.into_iter().find(|chain| chain.as_str() == token) {
            Some(chain) => chain,
            None => {
                tracing::debug!(token, "unrecognised chain token, falling back to unknown");
                ChainId::Unknown
            }
        }
    }

    /// Whether this is one of the named chains rather than the fallback.
    pub const fn is_known(self) -> bool {
        !matches!(self, ChainId::Unknown)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ChainId::from_token(s))
    }
}

impl From<&str> for ChainId {
    fn from(token: &str) -> Self {
        ChainId::from_token(token)
    }
}

impl From<ChainId> for &'static str {
    fn from(chain: ChainId) -> Self {
        chain.as_str()
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Any string is accepted; unrecognised tokens become `Unknown`.
impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(ChainId::from_token(&token))
    }
}
