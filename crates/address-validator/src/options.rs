use serde::{Deserialize, Serialize};

use crate::network::NetworkType;

/// Options passed to [`Validator::validate`](crate::Validator::validate).
///
/// Leaving `network_type` unset keeps whatever default the validator
/// implementation applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<NetworkType>,
}

impl ValidateOptions {
    pub const fn new() -> Self {
        Self { network_type: None }
    }

    /// Options selecting production address formats.
    pub const fn prod() -> Self {
        Self::new().with_network_type(NetworkType::Prod)
    }

    /// Options selecting test-network address formats.
    pub const fn test() -> Self {
        Self::new().with_network_type(NetworkType::Test)
    }

    pub const fn with_network_type(mut self, network_type: NetworkType) -> Self {
        self.network_type = Some(network_type);
        self
    }
}
