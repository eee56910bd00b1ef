//! Embedded wallet signing demo
//!
//! Drives the full flow against the configured wallet provider: log in,
//! provision a Stellar wallet when none exists, request a raw signature
//! over a sample hash, and verify it locally. Every status transition is
//! printed verbatim.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use stellar_embedded_wallet::codec::bytes_to_hex;
use stellar_embedded_wallet::config::Config;
use stellar_embedded_wallet::provider::HttpWalletProvider;
use stellar_embedded_wallet::session::AuthSession;
use stellar_embedded_wallet::signing::SigningService;
use stellar_embedded_wallet::state::SessionState;
use stellar_embedded_wallet::wallet::WalletService;

/// Payload whose SHA-256 digest is signed by the demo.
const SAMPLE_PAYLOAD: &[u8] = b"stellar embedded wallet demo payload";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(
        provider = %config.provider_base_url,
        chain = %config.chain,
        "starting wallet flow"
    );

    let provider = Arc::new(HttpWalletProvider::new(
        &config.provider_base_url,
        &config.app_id,
    ));
    let session = Arc::new(AuthSession::new());
    let state = Arc::new(SessionState::new());

    let wallets = WalletService::new(
        provider.clone(),
        session.clone(),
        state.clone(),
        config.chain,
    );
    let signer = SigningService::new(
        provider.clone(),
        session.clone(),
        state.clone(),
        config.chain,
    );

    // Display surface: render every status transition verbatim.
    let mut status_rx = state.status.subscribe();
    tokio::spawn(async move {
        while status_rx.changed().await.is_ok() {
            let status = status_rx.borrow_and_update().clone();
            println!("{}", status);
        }
    });

    session.mark_ready();
    session.login();

    if config.create_wallet_on_login && wallets.active_wallet().await?.is_none() {
        wallets.create_wallet().await.context("auto-provisioning failed")?;
    }

    // The interactive flow: create a wallet when the user has none,
    // otherwise go straight to signing.
    if wallets.active_wallet().await?.is_none() {
        wallets
            .create_wallet()
            .await
            .context("wallet provisioning failed")?;
    }

    let hash = bytes_to_hex(Sha256::digest(SAMPLE_PAYLOAD).as_slice());
    let outcome = signer
        .sign_and_verify(&hash)
        .await
        .context("signing flow failed")?;

    if let Some(result) = outcome {
        tracing::info!(verified = result.verified, "signing round complete");
    }

    // Give the status printer a beat to flush the terminal status.
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.logout();

    Ok(())
}
