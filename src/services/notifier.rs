//! Cross-context update notifications
//!
//! Best-effort analogue of the browser's same-origin broadcast channel:
//! views announce that slot state changed so other contexts re-fetch their
//! caches. Delivery is fire-and-forget; a context that misses a message
//! still converges on its next manual refresh.

use tokio::sync::broadcast;
use tracing::debug;

/// The single message kind carried by the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotsChanged;

/// Handle to the shared update channel. A disabled handle silently drops
/// every notification, modeling runtimes without the broadcast primitive.
#[derive(Debug, Clone)]
pub struct UpdateChannel {
    tx: Option<broadcast::Sender<SlotsChanged>>,
}

impl UpdateChannel {
    /// Open a channel shared by all views holding a clone of this handle
    pub fn open() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx: Some(tx) }
    }

    /// A channel that drops every notification
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Best-effort broadcast; never fails. Having no receivers is normal.
    pub fn notify(&self) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(SlotsChanged);
            debug!("broadcast slots-changed");
        }
    }

    /// Subscribe for notifications; `None` when the channel is disabled
    pub fn subscribe(&self) -> Option<broadcast::Receiver<SlotsChanged>> {
        self.tx.as_ref().map(broadcast::Sender::subscribe)
    }
}
