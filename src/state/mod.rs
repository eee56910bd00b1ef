//! Transient per-session flow state.

use tokio::sync::{Mutex, MutexGuard};

use crate::status::StatusChannel;
use crate::wallet::Wallet;

/// Mutable state shared by the provisioning and signing services.
///
/// `recently_created` bridges the window between wallet creation and the
/// provider's wallet list catching up; the resolver gives it precedence.
/// `in_flight` serializes the two orchestrators: status publication and
/// wallet-state mutation only happen while it is held, keeping this state
/// single-writer even though both services share it.
pub struct SessionState {
    recently_created: Mutex<Option<Wallet>>,
    pub status: StatusChannel,
    in_flight: Mutex<()>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            recently_created: Mutex::new(None),
            status: StatusChannel::new(),
            in_flight: Mutex::new(()),
        }
    }

    /// The wallet created earlier in this session, if any.
    pub async fn recently_created(&self) -> Option<Wallet> {
        self.recently_created.lock().await.clone()
    }

    pub async fn set_recently_created(&self, wallet: Wallet) {
        *self.recently_created.lock().await = Some(wallet);
    }

    /// Claim the single in-flight operation slot.
    ///
    /// Returns `None` when another create or sign operation is already
    /// running; callers treat that as a skip rather than queueing behind it,
    /// mirroring a UI that only ever exposes one actionable button.
    pub fn try_begin(&self) -> Option<MutexGuard<'_, ()>> {
        self.in_flight.try_lock().ok()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::ChainType;

    #[tokio::test]
    async fn test_recently_created_round_trip() {
        let state = SessionState::new();
        assert!(state.recently_created().await.is_none());

        let wallet = Wallet {
            id: "w1".to_string(),
            address: "GAAZ".to_string(),
            chain_type: ChainType::Stellar,
        };
        state.set_recently_created(wallet.clone()).await;
        assert_eq!(state.recently_created().await, Some(wallet));
    }

    #[tokio::test]
    async fn test_in_flight_slot_is_exclusive() {
        let state = SessionState::new();

        let guard = state.try_begin().expect("slot should be free");
        assert!(state.try_begin().is_none());

        drop(guard);
        assert!(state.try_begin().is_some());
    }
}
