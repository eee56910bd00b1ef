//! Status channel shared between the orchestrators and the display surface.

use tokio::sync::watch;

/// Single-value status channel.
///
/// Every publish overwrites the previous value, so subscribers always
/// observe exactly one status: the most recent progress or terminal message.
/// No history is retained.
#[derive(Clone)]
pub struct StatusChannel {
    tx: watch::Sender<String>,
}

impl StatusChannel {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { tx }
    }

    /// Publish a new status, replacing the current one.
    pub fn publish(&self, status: impl Into<String>) {
        let status = status.into();
        tracing::debug!(status = %status, "status updated");
        self.tx.send_replace(status);
    }

    /// The currently visible status string.
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Subscribe to status transitions.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for StatusChannel {
    fn default() -> Self {
        Self::new()
    }
}
