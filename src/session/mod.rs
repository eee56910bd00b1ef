//! Authentication session handle.
//!
//! The session provider itself is external; the flow only consumes its
//! `ready`/`authenticated` flags and the login/logout transitions. Both
//! orchestrators gate on [`AuthSession::can_act`].

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-local view of the external authentication session.
pub struct AuthSession {
    ready: AtomicBool,
    authenticated: AtomicBool,
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
            authenticated: AtomicBool::new(false),
        }
    }

    /// Mark the session provider as initialized.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    pub fn ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    pub fn login(&self) {
        self.authenticated.store(true, Ordering::SeqCst);
        tracing::info!("user authenticated");
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
        tracing::info!("user logged out");
    }

    /// Gate for wallet and signing actions.
    pub fn can_act(&self) -> bool {
        self.ready() && self.authenticated()
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_requires_ready_and_authenticated() {
        let session = AuthSession::new();
        assert!(!session.can_act());

        session.login();
        assert!(!session.can_act());

        session.mark_ready();
        assert!(session.can_act());

        session.logout();
        assert!(!session.can_act());
    }
}
