use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidatorError;

/// Which family of address formats the validator checks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Production (mainnet) address formats.
    Prod,
    /// Test-network address formats.
    Test,
}

impl NetworkType {
    pub const fn as_str(self) -> &'static str {
        match self {
            NetworkType::Prod => "prod",
            NetworkType::Test => "test",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" => Ok(NetworkType::Prod),
            "test" => Ok(NetworkType::Test),
            other => Err(ValidatorError::InvalidNetworkType(other.to_string())),
        }
    }
}
