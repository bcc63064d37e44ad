//! Two-phase delete handshake.
//!
//! A delete request only marks the target; nothing leaves the collection
//! until the user confirms through the dialog. Cancelling leaves the
//! collection untouched.

/// Pending-deletion state for one container.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    pending: Option<String>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` for deletion. A second request before confirmation just
    /// retargets the pending id; it never deletes anything by itself.
    pub fn request(&mut self, id: &str) {
        self.pending = Some(id.to_string());
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consumes the pending id on confirmation; the caller applies the
    /// actual `Remove` action with it.
    pub fn take_confirmed(&mut self) -> Option<String> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mail::MailContentBundle;
    use crate::model::newsletter::{Newsletter, NewsletterCriteria};
    use crate::model::stats::EntityStats;
    use crate::store::{CollectionStore, StoreAction};
    use chrono::Utc;

    fn newsletter(id: &str) -> Newsletter {
        Newsletter {
            id: id.to_string(),
            nom: id.to_string(),
            site_id: "site-1".to_string(),
            site_name: "Main shop".to_string(),
            mail: MailContentBundle::default(),
            criteria: NewsletterCriteria { subscribed: true },
            reduction: None,
            last_sent: None,
            next_send: None,
            actif: true,
            date_creation: Utc::now(),
            stats: EntityStats::zero(),
        }
    }

    #[test]
    fn requesting_twice_without_confirming_removes_nothing() {
        let mut store =
            CollectionStore::from_items(vec![newsletter("1"), newsletter("2")]);
        let mut confirm = DeleteConfirmation::new();

        confirm.request("1");
        confirm.request("2");
        assert_eq!(store.len(), 2);
        assert_eq!(confirm.pending(), Some("2"));
    }

    #[test]
    fn cancel_leaves_the_collection_untouched() {
        let store = CollectionStore::from_items(vec![newsletter("1")]);
        let mut confirm = DeleteConfirmation::new();

        confirm.request("1");
        confirm.cancel();
        assert!(confirm.take_confirmed().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn confirming_once_removes_exactly_the_requested_entity() {
        let mut store =
            CollectionStore::from_items(vec![newsletter("1"), newsletter("2")]);
        let mut confirm = DeleteConfirmation::new();

        confirm.request("1");
        let id = confirm.take_confirmed().unwrap();
        store.apply(StoreAction::Remove(id)).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get("1").is_none());
        assert!(store.get("2").is_some());
        // The handshake is spent: confirming again yields nothing.
        assert!(confirm.take_confirmed().is_none());
    }
}
