use std::collections::HashMap;

use teloxide::types::ChatId;

use crate::types::PendingDownload;

/// Per-chat store for a resolved resource awaiting quality selection.
///
/// A chat has at most one pending download; sending a new link replaces the
/// previous one. The store lives behind an `Arc<Mutex<_>>` shared between
/// the dispatcher's handlers.
pub struct PendingManager {
    pending: HashMap<ChatId, PendingDownload>,
}

impl PendingManager {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    pub fn insert(&mut self, chat: ChatId, download: PendingDownload) {
        self.pending.insert(chat, download);
    }

    pub fn take(&mut self, chat: ChatId) -> Option<PendingDownload> {
        self.pending.remove(&chat)
    }

    pub fn clear(&mut self, chat: ChatId) -> bool {
        self.pending.remove(&chat).is_some()
    }
}
