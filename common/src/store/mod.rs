//! Action-based in-memory stores for the dashboard collections.
//!
//! Each list view owns one [`CollectionStore`] as the single source of
//! truth. All mutation goes through [`CollectionStore::apply`], so every
//! state change is a named action with a `Result`, auditable and testable
//! outside the rendering framework. There is exactly one logical writer
//! (the user's synchronous interaction), so no locking is involved.

mod confirm;
mod filter;

use std::fmt;

use chrono::{DateTime, Utc};

pub use confirm::DeleteConfirmation;
pub use filter::{DateRange, ListFilter};

use crate::model::newsletter::Newsletter;
use crate::model::scenario::Scenario;

/// Common surface of the entities a store can hold.
pub trait Entity: Clone {
    fn id(&self) -> &str;
    /// Display name, used in toasts and list rows.
    fn label(&self) -> &str;
    fn site_id(&self) -> &str;
    fn date_creation(&self) -> DateTime<Utc>;
    fn actif(&self) -> bool;
    fn set_actif(&mut self, actif: bool);
}

impl Entity for Scenario {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.nom
    }

    fn site_id(&self) -> &str {
        &self.site_id
    }

    fn date_creation(&self) -> DateTime<Utc> {
        self.date_creation
    }

    fn actif(&self) -> bool {
        self.actif
    }

    fn set_actif(&mut self, actif: bool) {
        self.actif = actif;
    }
}

impl Entity for Newsletter {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.nom
    }

    fn site_id(&self) -> &str {
        &self.site_id
    }

    fn date_creation(&self) -> DateTime<Utc> {
        self.date_creation
    }

    fn actif(&self) -> bool {
        self.actif
    }

    fn set_actif(&mut self, actif: bool) {
        self.actif = actif;
    }
}

/// One mutation of a collection.
#[derive(Debug, Clone)]
pub enum StoreAction<T> {
    Add(T),
    /// Replaces the entity with the same id, keeping its array position.
    Replace(T),
    Remove(String),
    ToggleActif(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateId(String),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "entity {id} already exists"),
            StoreError::NotFound(id) => write!(f, "entity {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Ordered, id-keyed collection with action-based mutation.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore<T> {
    items: Vec<T>,
}

impl<T: Entity> CollectionStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateId`] when adding an id that already exists;
    /// [`StoreError::NotFound`] when replacing, removing or toggling an id
    /// that does not. The collection is untouched on error.
    pub fn apply(&mut self, action: StoreAction<T>) -> Result<(), StoreError> {
        match action {
            StoreAction::Add(item) => {
                if self.contains(item.id()) {
                    return Err(StoreError::DuplicateId(item.id().to_string()));
                }
                self.items.push(item);
                Ok(())
            }
            StoreAction::Replace(item) => {
                let slot = self
                    .items
                    .iter_mut()
                    .find(|existing| existing.id() == item.id())
                    .ok_or_else(|| StoreError::NotFound(item.id().to_string()))?;
                *slot = item;
                Ok(())
            }
            StoreAction::Remove(id) => {
                let position = self
                    .items
                    .iter()
                    .position(|item| item.id() == id)
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?;
                self.items.remove(position);
                Ok(())
            }
            StoreAction::ToggleActif(id) => {
                let item = self
                    .items
                    .iter_mut()
                    .find(|item| item.id() == id)
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?;
                let flipped = !item.actif();
                item.set_actif(flipped);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mail::MailContentBundle;
    use crate::model::scenario::{Scenario, ScenarioCriteria, ScenarioKind};
    use crate::model::stats::EntityStats;

    fn scenario(id: &str, nom: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            nom: nom.to_string(),
            site_id: "site-1".to_string(),
            site_name: "Main shop".to_string(),
            mail: MailContentBundle::default(),
            criteres: ScenarioCriteria::default_for(ScenarioKind::Birthday),
            reduction: None,
            etapes: Vec::new(),
            actif: true,
            date_creation: Utc::now(),
            statistiques: EntityStats::zero(),
        }
    }

    fn store_with(ids: &[&str]) -> CollectionStore<Scenario> {
        CollectionStore::from_items(ids.iter().map(|id| scenario(id, id)).collect())
    }

    #[test]
    fn entity_label_is_the_display_name() {
        let scenario = scenario("1", "Welcome back");
        assert_eq!(scenario.label(), scenario.nom);
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut store = store_with(&["1"]);
        let err = store.apply(StoreAction::Add(scenario("1", "dup"))).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_keeps_collection_order() {
        let mut store = store_with(&["1", "2", "3"]);
        let mut edited = scenario("2", "renamed");
        edited.actif = false;
        store.apply(StoreAction::Replace(edited)).unwrap();

        let ids: Vec<&str> = store.items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(store.get("2").unwrap().nom, "renamed");
        assert_eq!(store.get("1").unwrap().nom, "1");
    }

    #[test]
    fn replace_missing_id_is_not_found_and_leaves_store_untouched() {
        let mut store = store_with(&["1"]);
        let err = store
            .apply(StoreAction::Replace(scenario("9", "ghost")))
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("9".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").unwrap().nom, "1");
    }

    #[test]
    fn remove_deletes_exactly_one_entity() {
        let mut store = store_with(&["1", "2", "3"]);
        store.apply(StoreAction::Remove("2".to_string())).unwrap();
        let ids: Vec<&str> = store.items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        let err = store
            .apply(StoreAction::Remove("2".to_string()))
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("2".to_string()));
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut store = store_with(&["1", "2"]);
        store
            .apply(StoreAction::ToggleActif("1".to_string()))
            .unwrap();
        assert!(!store.get("1").unwrap().actif);
        assert!(store.get("2").unwrap().actif);
        store
            .apply(StoreAction::ToggleActif("1".to_string()))
            .unwrap();
        assert!(store.get("1").unwrap().actif);
    }
}
