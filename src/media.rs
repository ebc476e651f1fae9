//! Process-wide cache of the welcome image's Telegram file id.
//!
//! The asset is immutable for the process lifetime, so there is no eviction
//! and no TTL. Two simultaneous first `/start`s may both upload before either
//! observes the other's handle; that wastes one duplicate upload of identical
//! content and self-heals when the last writer fills the slot.

use teloxide::types::FileId;
use tokio::sync::Mutex;

/// Injected store for reusable upload handles. Constructed once at startup
/// and shared through the handler dependencies.
#[derive(Default)]
pub struct MediaCache {
    welcome: Mutex<Option<FileId>>,
}

impl MediaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached welcome-image handle, or `None` when the caller must upload
    /// the asset and record the handle Telegram assigns.
    pub async fn welcome_handle(&self) -> Option<FileId> {
        self.welcome.lock().await.clone()
    }

    /// Records the handle for all subsequent callers. Set-if-absent would do;
    /// overwriting is equivalent because the content is idempotent.
    pub async fn record_welcome(&self, handle: FileId) {
        *self.welcome.lock().await = Some(handle);
    }
}
