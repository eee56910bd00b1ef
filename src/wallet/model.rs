//! Wallet domain model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chain a wallet belongs to. Only Stellar is enabled in this deployment,
/// but the tag travels with every wallet and provider request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Stellar,
}

impl ChainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainType::Stellar => "stellar",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One provisioned embedded wallet.
///
/// `id` is the provider-assigned opaque identifier; every provider-side
/// operation (notably raw signing) is keyed by it. `address` is the Stellar
/// G-address, used for display and local verification only. Wallets are
/// never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub address: String,
    pub chain_type: ChainType,
}
