//! External wallet provider interface.
//!
//! The provider is a remote custody service: it enumerates wallets, creates
//! new ones, and produces raw signatures over caller-supplied hashes. The
//! flow never sees private keys; it only holds wallet ids and addresses.

mod http;

pub use http::HttpWalletProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FlowResult;
use crate::wallet::{ChainType, Wallet};

/// Raw-sign request payload.
///
/// Built fresh for every signing attempt. The provider's signing primitive
/// is keyed by the opaque wallet id, never by the address.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignRequest {
    pub chain_type: ChainType,
    pub wallet_id: String,
    /// `0x`-prefixed hex hash to sign.
    pub hash: String,
}

/// Remote embedded-wallet service.
///
/// All calls are asynchronous with no guaranteed latency bound; failures
/// surface as [`crate::error::FlowError::Provider`] and are never retried
/// here.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Wallets already provisioned for the current user.
    async fn list_wallets(&self) -> FlowResult<Vec<Wallet>>;

    /// Provision a new wallet on `chain`.
    async fn create_wallet(&self, chain: ChainType) -> FlowResult<Wallet>;

    /// Sign the request's hash with the wallet's key, returning the
    /// signature as a `0x`-prefixed hex string.
    async fn raw_sign(&self, request: &RawSignRequest) -> FlowResult<String>;
}
