use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// View-model key under which a success message is exposed.
pub const SUCCESS_KEY: &str = "msgSuccess";

/// One-shot messages handed from a mutating request to the page it redirects to.
///
/// Messages are keyed by redirect target. Reading a target's message removes it,
/// so it is shown by exactly one render. A newer message for the same target
/// replaces an unread one.
#[derive(Debug, Clone, Default)]
pub struct FlashStore {
    messages: Arc<Mutex<HashMap<String, String>>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, target: &str, message: impl Into<String>) {
        self.lock().insert(target.to_string(), message.into());
    }

    pub fn take(&self, target: &str) -> Option<String> {
        self.lock().remove(target)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Plain string map: a poisoned lock still holds valid data.
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_read_once() {
        let flash = FlashStore::new();
        flash.push("/admin/potion", "Enregistrement de Flamme réussi");
        assert_eq!(
            flash.take("/admin/potion").as_deref(),
            Some("Enregistrement de Flamme réussi")
        );
        assert_eq!(flash.take("/admin/potion"), None);
    }

    #[test]
    fn messages_are_kept_per_target() {
        let flash = FlashStore::new();
        flash.push("/admin/potion", "potion");
        assert_eq!(flash.take("/admin/qualite"), None);
        assert_eq!(flash.take("/admin/potion").as_deref(), Some("potion"));
    }

    #[test]
    fn newer_message_replaces_unread_one() {
        let flash = FlashStore::new();
        let clone = flash.clone();
        flash.push("/admin/potion", "first");
        clone.push("/admin/potion", "second");
        assert_eq!(flash.take("/admin/potion").as_deref(), Some("second"));
    }
}
