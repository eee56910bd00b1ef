//! Sign-and-verify orchestration.

use std::sync::Arc;

use crate::codec::hex_to_bytes;
use crate::crypto::verify_stellar_signature;
use crate::error::FlowResult;
use crate::provider::{RawSignRequest, WalletProvider};
use crate::session::AuthSession;
use crate::state::SessionState;
use crate::wallet::{resolve_active, ChainType, Wallet};

use super::SigningResult;

/// Orchestrates one raw-sign round against the provider followed by local
/// verification of the returned signature.
pub struct SigningService<P> {
    provider: Arc<P>,
    session: Arc<AuthSession>,
    state: Arc<SessionState>,
    chain: ChainType,
}

impl<P: WalletProvider> SigningService<P> {
    pub fn new(
        provider: Arc<P>,
        session: Arc<AuthSession>,
        state: Arc<SessionState>,
        chain: ChainType,
    ) -> Self {
        Self {
            provider,
            session,
            state,
            chain,
        }
    }

    /// Request a raw signature over `hash` from the active wallet and verify
    /// it locally against the wallet's address.
    ///
    /// `hash` must be a `0x`-prefixed hex string of whatever length the
    /// provider expects. Returns `Ok(None)` when the action is skipped: no
    /// wallet resolved, the session gate failed, or another operation is in
    /// flight. Skips never touch the status channel; everything else
    /// publishes exactly one progress status and one terminal status.
    pub async fn sign_and_verify(&self, hash: &str) -> FlowResult<Option<SigningResult>> {
        if !self.session.can_act() {
            tracing::debug!("signing skipped: session not ready");
            return Ok(None);
        }
        let Some(_guard) = self.state.try_begin() else {
            tracing::debug!("signing skipped: another operation is in flight");
            return Ok(None);
        };

        let recently_created = self.state.recently_created().await;
        let known = match self.provider.list_wallets().await {
            Ok(known) => known,
            Err(err) => {
                tracing::error!(error = %err, "signing failed: could not list wallets");
                self.state
                    .status
                    .publish(format!("❌ Signing failed: {}", err));
                return Err(err);
            }
        };
        let Some(wallet) = resolve_active(&known, recently_created.as_ref(), self.chain) else {
            tracing::debug!(chain = %self.chain, "signing skipped: no wallet");
            return Ok(None);
        };

        self.state.status.publish("Requesting signature…");

        match self.run(&wallet, hash).await {
            Ok(result) => {
                self.state.status.publish(format!(
                    "Signature: {}\nVerified? {}",
                    result.signature,
                    if result.verified { "✅" } else { "❌" }
                ));
                Ok(Some(result))
            }
            Err(err) => {
                tracing::error!(wallet_id = %wallet.id, error = %err, "signing failed");
                self.state
                    .status
                    .publish(format!("❌ Signing failed: {}", err));
                Err(err)
            }
        }
    }

    /// The fallible middle of the flow: provider round-trip, decode, verify.
    async fn run(&self, wallet: &Wallet, hash: &str) -> FlowResult<SigningResult> {
        // The provider signs by wallet id; the address never goes on the wire.
        let request = RawSignRequest {
            chain_type: wallet.chain_type,
            wallet_id: wallet.id.clone(),
            hash: hash.to_string(),
        };
        let signature = self.provider.raw_sign(&request).await?;

        let hash_bytes = hex_to_bytes(hash)?;
        let signature_bytes = hex_to_bytes(&signature)?;
        let verified = verify_stellar_signature(&wallet.address, &hash_bytes, &signature_bytes)?;

        tracing::info!(wallet_id = %wallet.id, verified, "signature received and checked");

        Ok(SigningResult { signature, verified })
    }
}
