//! Wallet provisioning and active-wallet lookup.

use std::sync::Arc;

use crate::error::FlowResult;
use crate::provider::WalletProvider;
use crate::session::AuthSession;
use crate::state::SessionState;

use super::model::{ChainType, Wallet};
use super::resolver::resolve_active;

/// Provisions wallets on the configured chain and resolves the wallet
/// current actions should target.
pub struct WalletService<P> {
    provider: Arc<P>,
    session: Arc<AuthSession>,
    state: Arc<SessionState>,
    chain: ChainType,
}

impl<P: WalletProvider> WalletService<P> {
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

    /// Resolve the active wallet, if any.
    ///
    /// Consults the provider's wallet list and the session's
    /// recently-created wallet; the latter wins.
    pub async fn active_wallet(&self) -> FlowResult<Option<Wallet>> {
        let recently_created = self.state.recently_created().await;
        let known = self.provider.list_wallets().await?;
        Ok(resolve_active(&known, recently_created.as_ref(), self.chain))
    }

    /// Provision a new wallet on the configured chain.
    ///
    /// Publishes a progress status before the provider call and exactly one
    /// terminal status after it. A failed creation is not retried and leaves
    /// the wallet set unchanged. Returns `Ok(None)` when the action is
    /// skipped because the session gate fails or another operation is
    /// already in flight; skips never touch the status channel.
    pub async fn create_wallet(&self) -> FlowResult<Option<Wallet>> {
        if !self.session.can_act() {
            tracing::debug!("wallet creation skipped: session not ready");
            return Ok(None);
        }
        let Some(_guard) = self.state.try_begin() else {
            tracing::debug!("wallet creation skipped: another operation is in flight");
            return Ok(None);
        };

        self.state.status.publish("Creating Stellar wallet…");

        match self.provider.create_wallet(self.chain).await {
            Ok(wallet) => {
                tracing::info!(
                    wallet_id = %wallet.id,
                    address = %wallet.address,
                    "wallet created"
                );
                self.state.set_recently_created(wallet.clone()).await;
                self.state
                    .status
                    .publish(format!("✅ Wallet created\n{}", wallet.address));
                Ok(Some(wallet))
            }
            Err(err) => {
                tracing::error!(error = %err, "wallet creation failed");
                self.state.status.publish(format!("❌ Failed: {}", err));
                Err(err)
            }
        }
    }
}
